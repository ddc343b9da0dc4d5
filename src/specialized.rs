//! Research and budget agents working side by side on one trip

use crate::budget::{allocation_lines, BudgetPlanner};
use crate::display_mode::DisplayMode;
use crate::errors::Result;
use crate::research::{BudgetTier, TripResearchAgent};

/// Rome research report, then a priority-shaped budget with sample expenses
pub fn run_demo(
    total_budget: f64,
    duration_days: u32,
    display: DisplayMode,
) -> Result<(TripResearchAgent, BudgetPlanner)> {
    let d = display.clone();
    d.heading("🚀 SPECIALIZED AGENTS DEMONSTRATION");
    d.rule('=', 60);

    d.say("\n1️⃣ CREATING SPECIALIZED AGENTS");
    let mut research = TripResearchAgent::new("TravelGuru", display.clone());
    let mut budget = BudgetPlanner::new(total_budget, duration_days, display)?;

    d.say("\n2️⃣ SETTING RESEARCH GOALS");
    research.set_research_goal("Rome", "June 15-29, 2024", &["history", "art", "food"], BudgetTier::MidRange);

    d.say("\n3️⃣ GENERATING RESEARCH REPORT");
    d.say(&research.compile_research_report("Rome"));

    d.say("\n4️⃣ OPTIMIZING BUDGET ALLOCATION");
    let allocation = budget.analyze_distribution(&["food_experience", "cultural_immersion"]);
    d.say("\n📊 Optimized Budget Allocation:");
    for line in allocation_lines(&allocation, total_budget) {
        d.say(&line);
    }

    d.say("\n💡 Smart Budget Recommendations:");
    for rec in budget.smart_recommendations() {
        d.say(&format!("   {}", rec));
    }

    d.say("\n5️⃣ TRACKING SAMPLE EXPENSES");
    for (category, amount, description) in [
        ("accommodation", 120.0, "Hotel Rome - Night 1"),
        ("food", 65.0, "Amazing dinner in Trastevere"),
        ("activities", 85.0, "Colosseum and Forum tour"),
        ("transport", 25.0, "Airport to city center"),
    ] {
        let feedback = budget.track_expense(category, amount, description, None);
        d.say(&format!("\n{}", feedback));
    }

    d.say("\n6️⃣ FINAL BUDGET SUMMARY");
    d.say(&budget.budget_summary());

    d.say("");
    d.rule('=', 60);
    d.show_success("🎉 DEMONSTRATION COMPLETE!");
    d.rule('=', 60);
    d.say("This shows how specialized agents can:");
    for line in [
        "✅ Work independently on their expertise areas",
        "✅ Provide detailed, focused results",
        "✅ Be combined for comprehensive planning",
        "✅ Adapt to user preferences and priorities",
    ] {
        d.say(line);
    }
    Ok((research, budget))
}
