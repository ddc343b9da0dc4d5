//! Integration tests for tripwise
//!
//! Exercises the agents through the public API with pinned mock services.

use serde_json::json;
use tripwise::{
    agent::{basic, BasicAgent, CycleOutcome},
    apis::{make_rng, HotelPrices, PriceApi, SimpleForecast, SimpleWeatherApi},
    budget::{BudgetAlert, BudgetPlanner, Category},
    research::{BudgetTier, TripResearchAgent},
    tools::builtin,
    travel::{demo_goals, SimpleTravelAgent},
    types::params_from,
    DisplayMode,
};

#[test]
fn test_default_allocation_sums_to_total() {
    for total in [999.99, 2500.0, 3000.0, 12345.67] {
        let mut planner = BudgetPlanner::new(total, 14, DisplayMode::quiet()).unwrap();
        let allocation = planner.analyze_distribution::<&str>(&[]);
        assert_eq!(allocation.len(), 5);
        let sum: f64 = allocation.iter().map(|(_, amount)| amount).sum();
        assert!((sum - total).abs() < 0.01, "total {} allocated {}", total, sum);
    }
}

#[test]
fn test_prioritised_allocation_sums_to_total() {
    let mut planner = BudgetPlanner::new(2500.0, 14, DisplayMode::quiet()).unwrap();
    let allocation = planner.analyze_distribution(&["food_experience", "cultural_immersion", "unknown_tag"]);
    let sum: f64 = allocation.iter().map(|(_, amount)| amount).sum();
    assert!((sum - 2500.0).abs() < 0.01);
}

#[test]
fn test_overspend_appends_one_alert_with_amount() {
    let mut planner = BudgetPlanner::new(1000.0, 10, DisplayMode::quiet()).unwrap();
    planner.analyze_distribution::<&str>(&[]);
    let allocated = planner.category(Category::Shopping).allocated;

    let feedback = planner
        .track_expense("shopping", allocated + 12.34, "Souvenirs", None);

    assert_eq!(planner.alerts().len(), 1);
    assert!(feedback.contains("12.34"), "{}", feedback);
    let BudgetAlert::OverBudget { category, .. } = &planner.alerts()[0];
    assert_eq!(*category, Category::Shopping);
}

#[test]
fn test_unknown_category_leaves_state_untouched() {
    let mut planner = BudgetPlanner::new(1000.0, 10, DisplayMode::quiet()).unwrap();
    let feedback = planner.track_expense("spa", 50.0, "Massage", None);

    assert!(feedback.starts_with("❌ Unknown category: spa. Use: accommodation"), "{}", feedback);
    assert!(planner.expenses().is_empty());
    assert!(planner.alerts().is_empty());
    assert_eq!(planner.total_spent(), 0.0);
}

#[test]
fn test_destination_score_is_reproducible() {
    let weather = SimpleForecast {
        city: "Berlin".into(),
        forecast: "rainy",
        temperature: 12,
        rainfall: 70,
    };
    let prices = HotelPrices {
        city: "Berlin".into(),
        avg_hotel_price: 95,
        budget_options: 57.0,
        luxury_options: 171.0,
    };

    let a = SimpleTravelAgent::new(demo_goals(2500.0, 14), Some(1), DisplayMode::quiet());
    let b = SimpleTravelAgent::new(demo_goals(2500.0, 14), None, DisplayMode::quiet());
    let first = a.analyze_destination("Berlin", &weather, &prices);
    assert_eq!(first, a.analyze_destination("Berlin", &weather, &prices));
    assert_eq!(first, b.analyze_destination("Berlin", &weather, &prices));
    // 5 - 1 (rain) + 1 (budget) + 1.5 (museums) + 1 (nightlife)
    assert_eq!(first.overall_score, 7.5);
}

#[test]
fn test_seeded_planner_runs_are_identical() {
    let run = || {
        let mut agent = SimpleTravelAgent::new(demo_goals(2500.0, 14), Some(2024), DisplayMode::quiet());
        agent.autonomous_planning_cycle().unwrap();
        agent.recommendations().to_vec()
    };
    let first = run();
    assert_eq!(first.len(), 4);
    assert_eq!(first, run());
}

#[test]
fn test_injected_services_drive_planner() {
    let weather = SimpleWeatherApi::new(make_rng(Some(11)));
    let prices = PriceApi::new(make_rng(Some(12)));
    let mut agent =
        SimpleTravelAgent::with_services(demo_goals(2500.0, 14), weather, prices, DisplayMode::quiet());
    assert_eq!(agent.autonomous_planning_cycle().unwrap(), 2);
    assert!(agent.goals_achieved());
}

#[test]
fn test_unknown_destination_uses_defaults() {
    let agent = TripResearchAgent::new("Tester", DisplayMode::quiet());

    let weather = agent.research_weather("Atlantis", "June");
    assert_eq!(weather.temperature, "15-25°C");
    assert_eq!(weather.description, "Typical European weather");

    let budget = agent.budget_insights("Atlantis", BudgetTier::MidRange);
    assert_eq!(budget.daily_budget, 100.0);
    assert!((budget.breakdown.accommodation - 40.0).abs() < 1e-9);

    assert!(!agent.research_attractions("Atlantis", &["history"]).is_empty());
}

#[test]
fn test_relevant_memories_filter_order_and_limit() {
    let mut agent = BasicAgent::new("Tester", DisplayMode::quiet());
    agent.remember("note", json!({"city": "Rome"}), "first", None);
    agent.remember("note", json!({"city": "Paris"}), "second", None);
    agent.remember("note", json!({"city": "rome"}), "third", None);
    agent.remember("note", json!({}), "ROME again", None);

    let hits = agent.relevant_memories("Rome", 2);
    let outcomes: Vec<&str> = hits.iter().map(|m| m.outcome.as_str()).collect();
    assert_eq!(outcomes, vec!["ROME again", "third"]);

    let all = agent.relevant_memories("rome", 10);
    assert_eq!(all.len(), 3);
    assert!(all.iter().all(|m| m.outcome != "second"));
}

#[test]
fn test_goals_without_satisfying_memory_never_complete() {
    let agent = basic::run_demo("TravelBuddy", 20, DisplayMode::quiet());
    assert!(agent.goals().iter().all(|g| !g.completed));
    assert_eq!(agent.memory().len(), 20);
}

#[test]
fn test_goal_completes_once_memory_mentions_it() {
    let mut agent = BasicAgent::new("Tester", DisplayMode::quiet());
    agent.add_goal("web_search", params_from(json!({"query": "Lisbon"})), 1);
    agent.add_tool("web_search", builtin::web_search());

    let outcome = agent.run_planning_cycle();
    assert!(matches!(outcome, CycleOutcome::Executed(ref o) if o.is_success()));
    assert!(agent.goals()[0].completed);
    assert!(matches!(agent.run_planning_cycle(), CycleOutcome::AllGoalsCompleted));
}

#[test]
fn test_missing_tool_is_recovered_without_memory() {
    let mut agent = BasicAgent::new("Tester", DisplayMode::quiet());
    agent.add_goal("find_accommodation", params_from(json!({"city": "Rome"})), 1);

    let outcome = agent.run_planning_cycle();
    assert!(outcome.to_string().contains("Tool 'hotel_api' not available"));
    assert!(agent.memory().is_empty());
    assert!(agent.is_active());
}

#[test]
fn test_failing_tool_is_remembered_with_low_satisfaction() {
    let mut agent = BasicAgent::new("Tester", DisplayMode::quiet());
    agent.add_goal("plan_budget", params_from(json!({"total_budget": 100, "duration": 0})), 1);
    agent.add_tool("budget_calculator", builtin::budget_calculator());

    let outcome = agent.run_planning_cycle();
    assert!(matches!(outcome, CycleOutcome::Executed(ref o) if !o.is_success()));

    let last = agent.memory().last().unwrap();
    assert!(last.outcome.starts_with("Error: "));
    assert_eq!(last.satisfaction, Some(2.0));
    assert!(!agent.goals()[0].completed);
    assert_eq!(agent.tools().stats("budget_calculator").unwrap().failed_executions, 1);
}
