//! Travel budget planner
//!
//! Splits a trip budget across five spending categories, reshapes the split
//! from named traveller priorities, tracks expenses against it and projects
//! the end-of-trip outcome.

use crate::budget::types::{
    BudgetAlert, BudgetCategory, BudgetOutcome, BudgetPrediction, Category, CategoryAnalysis,
    Expense, PriorityTag, SpendingAnalysis, SpendingPace,
};
use crate::display_mode::DisplayMode;
use crate::errors::{AgentError, Result};
use chrono::{Local, NaiveDate};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, warn};

const SECTION_RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";
const REPORT_RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Allocated amount per category, in report order
pub type Allocation = Vec<(Category, f64)>;

/// Budget planning agent
#[derive(Debug, Clone)]
pub struct BudgetPlanner {
    pub name: String,
    total_budget: f64,
    trip_duration: u32,
    daily_budget: f64,

    /// Indexed by [`Category::index`]
    categories: Vec<BudgetCategory>,

    expenses: Vec<Expense>,
    recommendations: Vec<String>,
    alerts: Vec<BudgetAlert>,
    display: DisplayMode,
}

impl BudgetPlanner {
    /// Create a planner with the default category split
    pub fn new(total_budget: f64, trip_duration: u32, display: DisplayMode) -> Result<Self> {
        if !total_budget.is_finite() || total_budget < 0.0 {
            return Err(AgentError::Validation(format!(
                "total budget must be a non-negative amount, got {}",
                total_budget
            )));
        }
        if trip_duration == 0 {
            return Err(AgentError::Validation("trip duration must be at least one day".to_string()));
        }

        let categories = Category::ALL
            .iter()
            .map(|&category| BudgetCategory {
                category,
                default_pct: category.default_pct(),
                allocated: total_budget * category.default_pct(),
                spent: 0.0,
                priority: category.priority(),
            })
            .collect();

        let planner = Self {
            name: "BudgetWise".to_string(),
            total_budget,
            trip_duration,
            daily_budget: total_budget / trip_duration as f64,
            categories,
            expenses: Vec::new(),
            recommendations: Vec::new(),
            alerts: Vec::new(),
            display,
        };

        planner.display.say(&format!(
            "💰 Budget initialized: ${:.2} for {} days",
            planner.total_budget, planner.trip_duration
        ));
        planner.display.say(&format!("📊 Daily budget: ${:.2}", planner.daily_budget));
        Ok(planner)
    }

    pub fn total_budget(&self) -> f64 {
        self.total_budget
    }

    pub fn daily_budget(&self) -> f64 {
        self.daily_budget
    }

    pub fn category(&self, category: Category) -> &BudgetCategory {
        &self.categories[category.index()]
    }

    pub fn categories(&self) -> &[BudgetCategory] {
        &self.categories
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn alerts(&self) -> &[BudgetAlert] {
        &self.alerts
    }

    pub fn recommendations(&self) -> &[String] {
        &self.recommendations
    }

    /// Current allocation per category
    pub fn allocation(&self) -> Allocation {
        self.categories.iter().map(|c| (c.category, c.allocated)).collect()
    }

    /// Reshape the allocation from traveller priorities.
    ///
    /// Unknown tags are ignored. The result always sums to the total
    /// budget: any net adjustment left after balancing is taken out of the
    /// largest category.
    pub fn analyze_distribution<S: AsRef<str>>(&mut self, priorities: &[S]) -> Allocation {
        let names: Vec<&str> = priorities.iter().map(AsRef::as_ref).collect();
        self.display.say(&format!(
            "🎯 Analyzing budget distribution with priorities: {}",
            if names.is_empty() { "default".to_string() } else { names.join(", ") }
        ));

        if names.is_empty() {
            return self.allocation();
        }

        let adjustments = self.priority_adjustments(&names);

        let mut adjusted: Vec<f64> = self
            .categories
            .iter()
            .zip(&adjustments)
            .map(|(c, adj)| c.allocated + adj)
            .collect();
        let total_adjustment: f64 = adjustments.iter().sum();

        if total_adjustment.abs() > 0.01 {
            let mut largest = 0;
            for (i, amount) in adjusted.iter().enumerate() {
                if *amount > adjusted[largest] {
                    largest = i;
                }
            }
            debug!(
                category = %Category::ALL[largest],
                correction = total_adjustment,
                "rebalancing largest category"
            );
            adjusted[largest] -= total_adjustment;
        }

        for (category, amount) in self.categories.iter_mut().zip(adjusted) {
            category.allocated = amount;
        }

        self.allocation()
    }

    /// Per-category deltas for the given priority tags
    fn priority_adjustments(&self, priorities: &[&str]) -> Vec<f64> {
        let mut adjustments = vec![0.0; Category::ALL.len()];

        for name in priorities {
            match name.parse::<PriorityTag>() {
                Ok(tag) => {
                    let (category, pct) = tag.adjustment();
                    adjustments[category.index()] += self.total_budget * pct;
                }
                Err(_) => debug!(priority = %name, "ignoring unknown priority"),
            }
        }

        // Money has to come from somewhere: categories that were not raised pay for the rest
        let total_positive: f64 = adjustments.iter().filter(|a| **a > 0.0).sum();
        if total_positive > 0.0 {
            let donors: Vec<usize> = (0..adjustments.len()).filter(|&i| adjustments[i] <= 0.0).collect();
            if !donors.is_empty() {
                let reduction = total_positive / donors.len() as f64;
                for i in donors {
                    adjustments[i] -= reduction;
                }
            }
        }

        adjustments
    }

    /// Recommendations based on daily budget and category shares
    pub fn smart_recommendations(&mut self) -> Vec<String> {
        let mut recommendations: Vec<String> = if self.daily_budget < 50.0 {
            vec![
                "💡 Consider staying in hostels or budget hotels to maximize your experiences",
                "🥪 Mix of street food, groceries, and occasional restaurant meals",
                "🚶 Walk more and use public transport - great way to see the city!",
                "🎫 Look for free walking tours and museum free days",
                "📱 Use budget travel apps like Rome2Rio for transport planning",
            ]
        } else if self.daily_budget > 200.0 {
            vec![
                "✨ You have room for luxury experiences and premium accommodations",
                "🍷 Consider fine dining experiences and wine tastings",
                "🚗 Private transport or taxis for convenience",
                "🎭 Premium activities like private tours or shows",
                "🏨 Boutique hotels or luxury accommodations",
            ]
        } else {
            vec![
                "👍 Great balance possible between comfort and experiences",
                "🏨 Mix of mid-range hotels and nice restaurants",
                "🎯 Focus budget on your top 2-3 priorities",
                "🚇 Efficient use of public transport with occasional taxis",
                "🍽️ Mix of local restaurants and special dining experiences",
            ]
        }
        .into_iter()
        .map(String::from)
        .collect();

        if self.total_budget > 0.0 {
            let accommodation_pct = self.category(Category::Accommodation).allocated / self.total_budget * 100.0;
            let food_pct = self.category(Category::Food).allocated / self.total_budget * 100.0;

            if accommodation_pct > 40.0 {
                recommendations.push(format!(
                    "🏨 You're allocating {:.1}% to accommodation - consider if location/luxury is worth it",
                    accommodation_pct
                ));
            }
            if food_pct > 30.0 {
                recommendations.push(format!(
                    "🍽️ High food budget ({:.1}%) - perfect for culinary adventures!",
                    food_pct
                ));
            }
        }

        self.recommendations = recommendations.clone();
        recommendations
    }

    /// Record an expense and return human-readable feedback.
    ///
    /// Unknown categories and invalid amounts are rejected before any
    /// state changes; the rejection is rendered as a `❌` line rather than
    /// returned as an error. `date` defaults to today.
    pub fn track_expense(
        &mut self,
        category: &str,
        amount: f64,
        description: &str,
        date: Option<NaiveDate>,
    ) -> String {
        match self.validate_expense(category, amount) {
            Ok(category) => self.record_expense(category, amount, description, date),
            Err(err) => {
                debug!(%err, "expense rejected");
                format!("❌ {}", err)
            }
        }
    }

    fn validate_expense(&self, category: &str, amount: f64) -> Result<Category> {
        let category: Category = category.parse()?;
        if !amount.is_finite() || amount < 0.0 {
            return Err(AgentError::Validation(format!(
                "expense amount must be a non-negative number, got {}",
                amount
            )));
        }
        Ok(category)
    }

    fn record_expense(
        &mut self,
        category: Category,
        amount: f64,
        description: &str,
        date: Option<NaiveDate>,
    ) -> String {

        self.expenses.push(Expense {
            id: self.expenses.len() + 1,
            category,
            amount,
            description: description.to_string(),
            date: date.unwrap_or_else(|| Local::now().date_naive()),
            timestamp: Local::now(),
        });

        let entry = &mut self.categories[category.index()];
        entry.spent += amount;
        let allocated = entry.allocated;
        let remaining = entry.remaining();

        let mut feedback = format!("💸 Expense logged: ${:.2} for {}", amount, description);

        if remaining < 0.0 {
            let overspend = remaining.abs();
            let message = format!("⚠️ Over budget in {}! Overspent by ${:.2}", category, overspend);
            warn!(%category, overspend, "category over budget");
            self.alerts.push(BudgetAlert::OverBudget {
                category,
                amount: overspend,
                message: message.clone(),
            });
            feedback.push('\n');
            feedback.push_str(&message);

            let suggestions = self.suggest_reallocation(category, overspend);
            feedback.push_str(&format!("\n💡 Suggestions: {}", suggestions));
        } else {
            let remaining_pct = if allocated > 0.0 { remaining / allocated * 100.0 } else { 0.0 };
            feedback.push_str(&format!(
                "\n✅ Remaining in {}: ${:.2} ({:.1}%)",
                category, remaining, remaining_pct
            ));
            if remaining_pct < 20.0 {
                feedback.push_str(&format!("\n⚠️ Running low on {} budget!", category));
            }
        }

        feedback
    }

    /// Greedy suggestion for covering an overspend from other categories.
    ///
    /// Lowest declared priority is cut first, never more than half of a
    /// category's remaining slack, and only amounts of at least $10 are
    /// suggested.
    pub fn suggest_reallocation(&self, overspent: Category, overspend: f64) -> String {
        let mut available: Vec<&BudgetCategory> = self
            .categories
            .iter()
            .filter(|c| c.category != overspent && c.remaining() > 0.0)
            .collect();
        available.sort_by_key(|c| c.priority);

        let mut suggestions = Vec::new();
        let mut remaining_to_cover = overspend;

        for candidate in available {
            if remaining_to_cover <= 0.0 {
                break;
            }
            let can_reallocate = (candidate.remaining() * 0.5).min(remaining_to_cover);
            if can_reallocate >= 10.0 {
                suggestions.push(format!(
                    "Consider reducing {} budget by ${:.0}",
                    candidate.category, can_reallocate
                ));
                remaining_to_cover -= can_reallocate;
            }
        }

        if suggestions.is_empty() {
            "Consider increasing total budget".to_string()
        } else {
            suggestions.join("; ")
        }
    }

    pub fn total_spent(&self) -> f64 {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Snapshot of spending against the plan
    pub fn spending_analysis(&self) -> SpendingAnalysis {
        let total_spent = self.total_spent();

        let mut daily_spending: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        for expense in &self.expenses {
            *daily_spending.entry(expense.date).or_insert(0.0) += expense.amount;
        }

        let days_with_spending: BTreeSet<NaiveDate> = self.expenses.iter().map(|e| e.date).collect();
        let days_remaining = self
            .trip_duration
            .saturating_sub(days_with_spending.len() as u32)
            .max(1);

        let avg_daily_spending = if daily_spending.is_empty() {
            0.0
        } else {
            total_spent / daily_spending.len() as f64
        };

        let category_breakdown = self
            .categories
            .iter()
            .map(|c| CategoryAnalysis {
                category: c.category,
                allocated: c.allocated,
                spent: c.spent,
                remaining: c.remaining(),
                spent_percentage: c.spent_pct(),
                status: c.status(),
            })
            .collect();

        SpendingAnalysis {
            total_budget: self.total_budget,
            total_spent,
            remaining_budget: self.total_budget - total_spent,
            days_remaining,
            daily_budget_target: self.daily_budget,
            avg_daily_spending,
            spending_pace: if avg_daily_spending > self.daily_budget {
                SpendingPace::Ahead
            } else {
                SpendingPace::Behind
            },
            category_breakdown,
            daily_spending,
            alerts_count: self.alerts.len(),
        }
    }

    /// Full budget report with categories, recommendations and recent alerts
    pub fn budget_report(&self) -> String {
        let analysis = self.spending_analysis();

        let pace = match analysis.spending_pace {
            SpendingPace::Ahead => "🔥 Spending ahead of target",
            SpendingPace::Behind => "✅ Spending below target",
        };

        let mut report = format!(
            "\n💰 COMPREHENSIVE BUDGET REPORT\n{rule}\n\n📊 BUDGET OVERVIEW\n{section}\n\
             💵 Total Budget: ${:.2}\n💸 Total Spent: ${:.2}\n💰 Remaining: ${:.2}\n\n\
             🎯 Daily Targets vs Actual:\n   Target: ${:.2}/day\n   Actual: ${:.2}/day\n   Pace: {}\n\n\
             📈 CATEGORY BREAKDOWN\n{section}\n",
            analysis.total_budget,
            analysis.total_spent,
            analysis.remaining_budget,
            analysis.daily_budget_target,
            analysis.avg_daily_spending,
            pace,
            rule = REPORT_RULE,
            section = SECTION_RULE,
        );

        for line in &analysis.category_breakdown {
            report.push_str(&format!("   {} {}\n", line.status.emoji(), line.category.title()));
            report.push_str(&format!("      Allocated: ${:.2}\n", line.allocated));
            report.push_str(&format!("      Spent: ${:.2} ({:.1}%)\n", line.spent, line.spent_percentage));
            report.push_str(&format!("      Remaining: ${:.2}\n\n", line.remaining));
        }

        if !self.recommendations.is_empty() {
            report.push_str("💡 SMART RECOMMENDATIONS\n");
            report.push_str(SECTION_RULE);
            report.push('\n');
            for rec in &self.recommendations {
                report.push_str(&format!("   {}\n", rec));
            }
        }

        if !self.alerts.is_empty() {
            report.push_str("\n🚨 RECENT ALERTS\n");
            report.push_str(SECTION_RULE);
            report.push('\n');
            for alert in self.recent_alerts(3) {
                report.push_str(&format!("   {}\n", alert.message()));
            }
        }

        report.push_str(&format!("\n{}\n", REPORT_RULE));
        report.push_str(&format!("📅 Report generated: {}\n", Local::now().format("%Y-%m-%d %H:%M")));
        report
    }

    /// Compact per-category summary
    pub fn budget_summary(&self) -> String {
        let total_spent = self.total_spent();
        let mut summary = format!(
            "\n💰 BUDGET SUMMARY\n{}\n💵 Total Budget: ${:.2}\n💸 Total Spent: ${:.2}\n💰 Remaining: ${:.2}\n\n📊 CATEGORY BREAKDOWN:\n",
            SECTION_RULE,
            self.total_budget,
            total_spent,
            self.total_budget - total_spent
        );

        for c in &self.categories {
            summary.push_str(&format!(
                "   {} {}: ${:.0} / ${:.0} ({:.1}%)\n",
                c.status().emoji(),
                c.category.title(),
                c.spent,
                c.allocated,
                c.spent_pct()
            ));
        }

        if !self.alerts.is_empty() {
            summary.push_str("\n🚨 RECENT ALERTS:\n");
            for alert in self.recent_alerts(3) {
                summary.push_str(&format!("   {}\n", alert.message()));
            }
        }

        summary
    }

    /// Project the end-of-trip outcome from the spending so far.
    ///
    /// Returns `None` until at least one expense has been tracked.
    pub fn predict_outcome(&self) -> Option<BudgetPrediction> {
        let analysis = self.spending_analysis();
        if analysis.daily_spending.is_empty() {
            return None;
        }

        let days_remaining = analysis.days_remaining as f64;
        let projected_total = analysis.total_spent + analysis.avg_daily_spending * days_remaining;

        let outcome = if projected_total <= self.total_budget * 0.95 {
            BudgetOutcome::OnTrack
        } else if projected_total <= self.total_budget * 1.1 {
            BudgetOutcome::SlightOverspend
        } else {
            BudgetOutcome::SignificantOverspend
        };

        let projected_overspend = (projected_total - self.total_budget).max(0.0);

        Some(BudgetPrediction {
            outcome,
            projected_total,
            projected_overspend,
            daily_adjustment_needed: projected_overspend / days_remaining,
            confidence: (analysis.daily_spending.len() as f64 * 10.0).min(100.0),
        })
    }

    fn recent_alerts(&self, n: usize) -> &[BudgetAlert] {
        &self.alerts[self.alerts.len().saturating_sub(n)..]
    }
}

/// "   Food: $750.00 (30.0%)" lines for an allocation
pub fn allocation_lines(allocation: &Allocation, total: f64) -> Vec<String> {
    allocation
        .iter()
        .map(|(category, amount)| {
            format!(
                "   {}: ${:.2} ({:.1}%)",
                category.title(),
                amount,
                amount / total * 100.0
            )
        })
        .collect()
}

/// Allocate $3000 over 14 days, overspend on shopping, then report and project
pub fn run_demo(display: DisplayMode) -> Result<BudgetPlanner> {
    let d = display.clone();
    d.say("🚀 Budget Planner Agent Demonstration\n");

    let total = 3000.0;
    let mut planner = BudgetPlanner::new(total, 14, display)?;

    d.heading("💰 INITIAL BUDGET ANALYSIS");
    d.rule('=', 50);
    let allocation = planner.analyze_distribution(&["food_experience", "cultural_immersion"]);
    d.say("\n📊 Budget Allocation:");
    for line in allocation_lines(&allocation, total) {
        d.say(&line);
    }

    d.say("\n💡 Smart Recommendations:");
    for rec in planner.smart_recommendations() {
        d.say(&format!("   {}", rec));
    }

    d.say("");
    d.rule('=', 50);
    d.heading("💸 SIMULATING EXPENSES...");
    d.rule('=', 50);

    let expenses = [
        ("accommodation", 120.0, "Hotel Rome - Night 1", (2024, 6, 15)),
        ("food", 45.0, "Dinner at Trastevere", (2024, 6, 15)),
        ("transport", 25.0, "Airport to city center", (2024, 6, 15)),
        ("activities", 85.0, "Colosseum and Forum tour", (2024, 6, 16)),
        ("food", 65.0, "Lunch + Dinner + Breakfast", (2024, 6, 16)),
        ("accommodation", 120.0, "Hotel Rome - Night 2", (2024, 6, 16)),
        ("shopping", 150.0, "Souvenirs and local crafts", (2024, 6, 17)),
        ("activities", 95.0, "Vatican Museums tour", (2024, 6, 17)),
    ];
    for (category, amount, description, (y, m, day)) in expenses {
        let date = NaiveDate::from_ymd_opt(y, m, day);
        let feedback = planner.track_expense(category, amount, description, date);
        d.say(&format!("\n{}", feedback));
    }

    d.say("");
    d.rule('=', 70);
    d.heading("📊 COMPREHENSIVE BUDGET ANALYSIS");
    d.rule('=', 70);
    d.say(&planner.budget_report());

    d.say("");
    d.rule('=', 70);
    d.heading("🔮 BUDGET PREDICTION");
    d.rule('=', 70);
    if let Some(prediction) = planner.predict_outcome() {
        d.say(&format!("📈 Outcome Prediction: {}", prediction.outcome.message()));
        d.say(&format!("💰 Projected Total Spending: ${:.2}", prediction.projected_total));
        if prediction.projected_overspend > 0.0 {
            d.show_warning(&format!(
                "🚨 Projected Overspend: ${:.2}",
                prediction.projected_overspend
            ));
            d.say(&format!(
                "📉 Reduce daily spending by: ${:.2}",
                prediction.daily_adjustment_needed
            ));
        }
        d.say(&format!("🎯 Prediction Confidence: {:.0}%", prediction.confidence));
    }
    Ok(planner)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planner(total: f64) -> BudgetPlanner {
        BudgetPlanner::new(total, 14, DisplayMode::quiet()).unwrap()
    }

    fn date(d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2024, 6, d)
    }

    fn sum(allocation: &Allocation) -> f64 {
        allocation.iter().map(|(_, a)| a).sum()
    }

    #[test]
    fn test_default_allocation_sums_to_total() {
        let mut planner = planner(3000.0);
        let allocation = planner.analyze_distribution::<&str>(&[]);
        assert!((sum(&allocation) - 3000.0).abs() < 1e-6);
        assert!((planner.category(Category::Accommodation).allocated - 1050.0).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_zero_duration() {
        assert!(BudgetPlanner::new(1000.0, 0, DisplayMode::quiet()).is_err());
        assert!(BudgetPlanner::new(-1.0, 3, DisplayMode::quiet()).is_err());
    }

    #[test]
    fn test_positive_priorities_are_funded_by_other_categories() {
        let mut planner = planner(3000.0);
        let allocation = planner.analyze_distribution(&["food_experience", "cultural_immersion"]);

        // +360 food, +300 activities, 660 taken equally from the other three
        assert!((planner.category(Category::Food).allocated - 1110.0).abs() < 1e-6);
        assert!((planner.category(Category::Activities).allocated - 900.0).abs() < 1e-6);
        assert!((planner.category(Category::Accommodation).allocated - 830.0).abs() < 1e-6);
        assert!((planner.category(Category::Shopping).allocated - (-70.0)).abs() < 1e-6);
        assert!((sum(&allocation) - 3000.0).abs() < 1e-6);
    }

    #[test]
    fn test_net_negative_priorities_rebalance_largest_category() {
        let mut planner = planner(2000.0);
        let allocation = planner.analyze_distribution(&["budget_conscious"]);
        assert!((sum(&allocation) - 2000.0).abs() < 1e-6);
        // Only food moved (-160); the correction lands on accommodation (largest)
        assert!((planner.category(Category::Food).allocated - 340.0).abs() < 1e-6);
        assert!((planner.category(Category::Accommodation).allocated - 860.0).abs() < 1e-6);
    }

    #[test]
    fn test_unknown_priorities_are_ignored() {
        let mut planner = planner(2500.0);
        let before = planner.allocation();
        let after = planner.analyze_distribution(&["sightseeing"]);
        assert_eq!(before, after);
    }

    #[test]
    fn test_track_expense_within_budget() {
        let mut planner = planner(2500.0);
        let feedback = planner.track_expense("food", 65.0, "Dinner", date(15));
        assert!(feedback.contains("💸 Expense logged: $65.00 for Dinner"));
        assert!(feedback.contains("✅ Remaining in food: $560.00 (89.6%)"));
        assert!(planner.alerts().is_empty());
    }

    #[test]
    fn test_track_expense_running_low() {
        let mut planner = planner(1000.0);
        // shopping allocation is 50
        let feedback = planner.track_expense("shopping", 45.0, "Magnets", date(15));
        assert!(feedback.contains("Running low on shopping budget"));
    }

    #[test]
    fn test_overspend_appends_one_alert_with_amount() {
        let mut planner = planner(3000.0);
        // shopping allocation is 150
        let feedback = planner.track_expense("shopping", 200.25, "Souvenirs", date(17));
        assert_eq!(planner.alerts().len(), 1);
        assert!(feedback.contains("Overspent by $50.25"));
        assert!(feedback.contains("💡 Suggestions: Consider reducing activities budget by $50"));
    }

    #[test]
    fn test_unknown_category_leaves_state_untouched() {
        let mut planner = planner(3000.0);
        let feedback = planner.track_expense("spa", 80.0, "Massage", None);
        assert_eq!(
            feedback,
            "❌ Unknown category: spa. Use: accommodation, food, activities, transport, shopping"
        );
        assert!(planner.expenses().is_empty());
        assert!(planner.alerts().is_empty());
        assert_eq!(planner.total_spent(), 0.0);
    }

    #[test]
    fn test_negative_amount_rejected() {
        let mut planner = planner(3000.0);
        let feedback = planner.track_expense("food", -5.0, "Refund", None);
        assert!(feedback.starts_with("❌ Validation failed"));
        assert!(planner.expenses().is_empty());
    }

    #[test]
    fn test_reallocation_prefers_low_priority_and_caps_at_half() {
        let planner = planner(1000.0);
        // slack: shopping 50 (low), activities 200 (medium), then high categories
        let suggestion = planner.suggest_reallocation(Category::Food, 150.0);
        assert_eq!(
            suggestion,
            "Consider reducing shopping budget by $25; Consider reducing activities budget by $100; \
             Consider reducing accommodation budget by $25"
        );
    }

    #[test]
    fn test_reallocation_fallback() {
        let planner = planner(20.0);
        assert_eq!(
            planner.suggest_reallocation(Category::Food, 500.0),
            "Consider increasing total budget"
        );
    }

    #[test]
    fn test_recommendations_by_daily_budget() {
        let mut low = planner(500.0);
        assert!(low.smart_recommendations()[0].contains("hostels"));

        let mut high = planner(5000.0);
        assert!(high.smart_recommendations()[0].contains("luxury"));

        let mut mid = planner(2500.0);
        let recs = mid.smart_recommendations();
        assert!(recs[0].contains("Great balance"));
        assert_eq!(mid.recommendations().len(), recs.len());
    }

    #[test]
    fn test_recommendations_flag_heavy_shares() {
        let mut planner = planner(2500.0);
        planner.analyze_distribution(&["luxury_accommodation", "food_experience"]);
        let recs = planner.smart_recommendations();
        assert!(recs.iter().any(|r| r.contains("to accommodation")));
        assert!(recs.iter().any(|r| r.contains("High food budget")));
    }

    #[test]
    fn test_spending_analysis_counts_distinct_days() {
        let mut planner = planner(2800.0);
        planner.track_expense("food", 100.0, "a", date(15));
        planner.track_expense("food", 50.0, "b", date(15));
        planner.track_expense("transport", 150.0, "c", date(16));

        let analysis = planner.spending_analysis();
        assert_eq!(analysis.days_remaining, 12);
        assert_eq!(analysis.daily_spending.len(), 2);
        assert!((analysis.avg_daily_spending - 150.0).abs() < 1e-9);
        assert_eq!(analysis.spending_pace, SpendingPace::Behind);
    }

    #[test]
    fn test_prediction_requires_spending() {
        assert!(planner(1000.0).predict_outcome().is_none());
    }

    #[test]
    fn test_prediction_outcomes() {
        let mut planner = planner(1400.0); // 100/day target
        planner.track_expense("food", 50.0, "light day", date(15));
        let p = planner.predict_outcome().unwrap();
        // 50 + 50 * 13 = 700
        assert_eq!(p.outcome, BudgetOutcome::OnTrack);
        assert!((p.projected_total - 700.0).abs() < 1e-9);
        assert_eq!(p.confidence, 10.0);

        planner.track_expense("accommodation", 350.0, "splurge", date(16));
        let p = planner.predict_outcome().unwrap();
        // 400 + 200 * 12 = 2800
        assert_eq!(p.outcome, BudgetOutcome::SignificantOverspend);
        assert!((p.projected_overspend - 1400.0).abs() < 1e-9);
        assert!((p.daily_adjustment_needed - 1400.0 / 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_reports_include_alerts() {
        let mut planner = planner(1000.0);
        planner.track_expense("shopping", 80.0, "Crafts", date(15));
        let report = planner.budget_report();
        assert!(report.contains("COMPREHENSIVE BUDGET REPORT"));
        assert!(report.contains("🚨 Shopping"));
        assert!(report.contains("Over budget in shopping"));

        let summary = planner.budget_summary();
        assert!(summary.contains("🚨 Shopping: $80 / $50 (160.0%)"));
        assert!(summary.contains("RECENT ALERTS"));
    }

    #[test]
    fn test_constructor_narrates() {
        let display = DisplayMode::capture();
        BudgetPlanner::new(2500.0, 14, display.clone()).unwrap();
        assert_eq!(
            display.captured(),
            vec!["💰 Budget initialized: $2500.00 for 14 days", "📊 Daily budget: $178.57"]
        );
    }
}
