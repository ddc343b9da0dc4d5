//! Basic goal-driven agent
//!
//! Runs the plan → execute → learn cycle:
//! - Picks the highest-priority incomplete goal
//! - Maps it to an action through a static table
//! - Executes the action with a registered tool
//! - Records the experience and re-checks goal completion

use crate::agent::memory::{MemoryLog, DEFAULT_RELEVANT_LIMIT};
use crate::display_mode::DisplayMode;
use crate::errors::AgentError;
use crate::tools::{builtin, Tool, ToolRegistry};
use crate::types::{params_from, Action, Goal, MemoryEntry, Params};
use serde_json::{json, Value};
use std::fmt;
use tracing::{debug, info};

/// Satisfaction recorded for a successful tool call
pub const SUCCESS_SATISFACTION: f64 = 8.0;

/// Satisfaction recorded for a failed tool call
pub const FAILURE_SATISFACTION: f64 = 2.0;

/// A goal is complete once a relevant memory scores above this
pub const COMPLETION_THRESHOLD: f64 = 7.0;

/// Result of executing one action
#[derive(Debug)]
pub enum ActionOutcome {
    /// Action does not name a tool
    NoToolNeeded { action: String },

    /// Named tool is not registered; nothing is remembered
    ToolUnavailable { tool: String },

    /// Tool returned a result
    Succeeded { action: String, result: String },

    /// Tool reported an error
    Failed { action: String, error: AgentError },
}

impl ActionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ActionOutcome::Succeeded { .. })
    }
}

impl fmt::Display for ActionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionOutcome::NoToolNeeded { action } => write!(f, "No tool needed for {}", action),
            ActionOutcome::ToolUnavailable { tool } => write!(f, "❌ Tool '{}' not available", tool),
            ActionOutcome::Succeeded { action, result } => write!(f, "✅ {}: {}", action, result),
            ActionOutcome::Failed { action, error } => write!(f, "❌ {}: Error: {}", action, error),
        }
    }
}

/// Result of one planning cycle
#[derive(Debug)]
pub enum CycleOutcome {
    /// Agent was deactivated
    Inactive,

    /// No incomplete goals remain
    AllGoalsCompleted,

    /// An action was planned and executed
    Executed(ActionOutcome),
}

impl fmt::Display for CycleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CycleOutcome::Inactive => write!(f, "Agent is not active"),
            CycleOutcome::AllGoalsCompleted => {
                write!(f, "🎉 All goals completed! Agent has finished its work.")
            }
            CycleOutcome::Executed(outcome) => write!(f, "{}", outcome),
        }
    }
}

/// Goal-driven agent with tools and an experience log
#[derive(Debug)]
pub struct BasicAgent {
    pub name: String,
    goals: Vec<Goal>,
    memory: MemoryLog,
    tools: ToolRegistry,
    active: bool,
    display: DisplayMode,
}

impl BasicAgent {
    pub fn new(name: impl Into<String>, display: DisplayMode) -> Self {
        Self {
            name: name.into(),
            goals: Vec::new(),
            memory: MemoryLog::new(),
            tools: ToolRegistry::new(),
            active: true,
            display,
        }
    }

    /// Add a goal; higher `priority` is planned first
    pub fn add_goal(&mut self, kind: impl Into<String>, parameters: Params, priority: i32) -> &Goal {
        let goal = Goal::new(kind, parameters, priority);
        self.display.say(&format!("🎯 {} added goal: {}", self.name, goal));
        self.goals.push(goal);
        &self.goals[self.goals.len() - 1]
    }

    /// Register a tool under `name`
    pub fn add_tool(&mut self, name: &str, tool: impl Tool + 'static) {
        self.tools.register_as(name, tool);
        self.display.say(&format!("🔧 {} learned to use: {}", self.name, name));
    }

    /// Plan an action for the highest-priority incomplete goal.
    ///
    /// Ties go to the goal added first.
    pub fn plan_next_action(&self) -> Option<Action> {
        let next_goal = self
            .goals
            .iter()
            .filter(|g| !g.completed)
            .reduce(|best, g| if g.priority > best.priority { g } else { best })?;

        Some(action_for_goal(next_goal))
    }

    /// Execute an action with its tool and remember the experience
    pub fn execute_action(&mut self, action: &Action) -> ActionOutcome {
        let Some(tool) = action.tool_needed.as_deref() else {
            return ActionOutcome::NoToolNeeded {
                action: action.kind.clone(),
            };
        };

        if !self.tools.contains(tool) {
            debug!(tool, action = %action.kind, "tool not registered");
            return ActionOutcome::ToolUnavailable {
                tool: tool.to_string(),
            };
        }

        let data = json!({
            "action": action.kind,
            "parameters": Value::Object(action.parameters.clone()),
            "tool_used": tool,
        });

        match self.tools.invoke(tool, &action.parameters) {
            Ok(result) => {
                self.remember(
                    "action_execution",
                    data,
                    &format!("Success: {}", result),
                    Some(SUCCESS_SATISFACTION),
                );
                ActionOutcome::Succeeded {
                    action: action.kind.clone(),
                    result,
                }
            }
            Err(error) => {
                self.remember(
                    "action_execution",
                    data,
                    &format!("Error: {}", error),
                    Some(FAILURE_SATISFACTION),
                );
                ActionOutcome::Failed {
                    action: action.kind.clone(),
                    error,
                }
            }
        }
    }

    /// Store an experience
    pub fn remember(&mut self, kind: &str, data: Value, outcome: &str, satisfaction: Option<f64>) {
        self.memory.push(MemoryEntry::new(kind, data, outcome, satisfaction));
        self.display
            .say(&format!("🧠 {} remembered: {} -> {}", self.name, kind, outcome));
    }

    /// Memories mentioning `context`, most recent first
    pub fn relevant_memories(&self, context: &str, limit: usize) -> Vec<&MemoryEntry> {
        self.memory.relevant(context, limit)
    }

    /// One plan → execute → completion-check cycle
    pub fn run_planning_cycle(&mut self) -> CycleOutcome {
        if !self.active {
            return CycleOutcome::Inactive;
        }

        let Some(action) = self.plan_next_action() else {
            return CycleOutcome::AllGoalsCompleted;
        };

        self.display.say(&format!("🤔 {} planning: {}", self.name, action));

        let outcome = self.execute_action(&action);
        self.check_goal_completion();
        CycleOutcome::Executed(outcome)
    }

    /// Mark goals complete when a relevant memory shows high satisfaction.
    ///
    /// Relevance is matched on the goal kind, so only goals whose kind
    /// appears in a remembered action or outcome can complete.
    pub fn check_goal_completion(&mut self) {
        let mut completed = Vec::new();
        for (i, goal) in self.goals.iter().enumerate() {
            if goal.completed {
                continue;
            }
            let satisfied = self
                .memory
                .relevant(&goal.kind, DEFAULT_RELEVANT_LIMIT)
                .iter()
                .any(|m| m.satisfied_above(COMPLETION_THRESHOLD));
            if satisfied {
                completed.push(i);
            }
        }

        for i in completed {
            let goal = &mut self.goals[i];
            goal.complete();
            info!(agent = %self.name, goal = %goal.kind, "goal completed");
            self.display.say(&format!("🎉 Goal completed: {}", goal));
        }
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn memory(&self) -> &MemoryLog {
        &self.memory
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Stop the agent; later cycles return [`CycleOutcome::Inactive`]
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Goals, tools and the last three memories
    pub fn status_report(&self) -> String {
        let completed = self.goals.iter().filter(|g| g.completed).count();
        let mut status = format!(
            "\n📊 AGENT STATUS: {}\n{}\n\n🎯 Goals: {}/{} completed\n🧠 Memories: {} experiences stored\n🔧 Tools: {} available\n\nCURRENT GOALS:\n",
            self.name,
            "━".repeat(51),
            completed,
            self.goals.len(),
            self.memory.len(),
            self.tools.len()
        );
        for goal in &self.goals {
            status.push_str(&format!("   {}\n", goal));
        }

        if !self.memory.is_empty() {
            status.push_str("\nRECENT MEMORIES:\n");
            for memory in self.memory.last_n(3) {
                status.push_str(&format!("   {}\n", memory));
            }
        }
        status
    }
}

/// Static goal-kind → action table
fn action_for_goal(goal: &Goal) -> Action {
    let params = goal.parameters.clone();
    match goal.kind.as_str() {
        "research_destination" => {
            let mut query = Params::new();
            query.insert(
                "query".to_string(),
                params.get("destination").cloned().unwrap_or(Value::Null),
            );
            Action::new("search_info", query, Some("web_search"))
        }
        "plan_budget" => Action::new("calculate_budget", params, Some("budget_calculator")),
        "book_flight" => Action::new("search_flights", params, Some("flight_api")),
        "find_accommodation" => Action::new("search_hotels", params, Some("hotel_api")),
        _ => Action::new("research", params, Some("web_search")),
    }
}

/// Demo agent with three Rome trip goals and three demo tools
pub fn travel_buddy(name: &str, display: DisplayMode) -> BasicAgent {
    let mut agent = BasicAgent::new(name, display);

    agent.add_goal(
        "research_destination",
        params_from(json!({"destination": "Rome", "duration": 14})),
        3,
    );
    agent.add_goal(
        "plan_budget",
        params_from(json!({"total_budget": 3000, "duration": 14})),
        2,
    );
    agent.add_goal(
        "book_flight",
        params_from(json!({"destination": "Rome", "dates": "June 15-29"})),
        1,
    );

    agent.add_tool("web_search", builtin::web_search());
    agent.add_tool("budget_calculator", builtin::budget_calculator());
    agent.add_tool("flight_api", builtin::flight_api());
    agent
}

/// Run the demo agent for up to `max_cycles` planning cycles
pub fn run_demo(name: &str, max_cycles: usize, display: DisplayMode) -> BasicAgent {
    display.say("🚀 Creating a Basic Trip Planning Agent\n");
    let mut agent = travel_buddy(name, display.clone());

    display.say("\n🎬 Starting Agent Planning Cycles...\n");
    for cycle in 1..=max_cycles {
        display.say(&format!("--- Planning Cycle {} ---", cycle));
        let outcome = agent.run_planning_cycle();
        display.say(&format!("Result: {}\n", outcome));

        if matches!(outcome, CycleOutcome::AllGoalsCompleted) {
            break;
        }
    }

    display.say(&agent.status_report());
    agent
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::FnTool;

    fn agent() -> BasicAgent {
        BasicAgent::new("Tester", DisplayMode::quiet())
    }

    #[test]
    fn test_plan_picks_highest_priority() {
        let mut agent = agent();
        agent.add_goal("book_flight", params_from(json!({"destination": "Rome"})), 1);
        agent.add_goal("research_destination", params_from(json!({"destination": "Rome"})), 3);

        let action = agent.plan_next_action().unwrap();
        assert_eq!(action.kind, "search_info");
        assert_eq!(action.parameters.get("query"), Some(&json!("Rome")));
        assert_eq!(action.tool_needed.as_deref(), Some("web_search"));
    }

    #[test]
    fn test_priority_ties_go_to_first_goal() {
        let mut agent = agent();
        agent.add_goal("plan_budget", Params::new(), 2);
        agent.add_goal("book_flight", Params::new(), 2);
        assert_eq!(agent.plan_next_action().unwrap().kind, "calculate_budget");
    }

    #[test]
    fn test_unknown_goal_kind_maps_to_research() {
        let mut agent = agent();
        agent.add_goal("learn_language", params_from(json!({"language": "Italian"})), 1);
        let action = agent.plan_next_action().unwrap();
        assert_eq!(action.kind, "research");
        assert_eq!(action.parameters.get("language"), Some(&json!("Italian")));
    }

    #[test]
    fn test_no_goals_means_no_action() {
        assert!(agent().plan_next_action().is_none());
    }

    #[test]
    fn test_missing_tool_leaves_memory_untouched() {
        let mut agent = agent();
        let action = Action::new("search_hotels", Params::new(), Some("hotel_api"));
        let outcome = agent.execute_action(&action);
        assert_eq!(outcome.to_string(), "❌ Tool 'hotel_api' not available");
        assert!(agent.memory().is_empty());
    }

    #[test]
    fn test_action_without_tool() {
        let mut agent = agent();
        let action = Action::new("think", Params::new(), None);
        assert_eq!(agent.execute_action(&action).to_string(), "No tool needed for think");
    }

    #[test]
    fn test_success_records_high_satisfaction() {
        let mut agent = agent();
        agent.add_tool("web_search", builtin::web_search());
        let action = Action::new("search_info", params_from(json!({"query": "Rome"})), Some("web_search"));

        let outcome = agent.execute_action(&action);
        assert!(outcome.is_success());
        assert_eq!(
            outcome.to_string(),
            "✅ search_info: Found information about Rome: Great destination with rich history!"
        );

        let memory = agent.memory().last().unwrap();
        assert_eq!(memory.satisfaction, Some(8.0));
        assert!(memory.outcome.starts_with("Success: "));
        assert_eq!(memory.data["tool_used"], json!("web_search"));
    }

    #[test]
    fn test_failure_records_low_satisfaction() {
        let mut agent = agent();
        agent.add_tool(
            "flaky",
            FnTool::new("flaky", "Always fails", |_: &Params| Err(AgentError::Generic("boom".into()))),
        );
        let action = Action::new("try", Params::new(), Some("flaky"));

        let outcome = agent.execute_action(&action);
        assert_eq!(outcome.to_string(), "❌ try: Error: Agent error: boom");
        let memory = agent.memory().last().unwrap();
        assert_eq!(memory.satisfaction, Some(2.0));
        assert_eq!(memory.outcome, "Error: Agent error: boom");
    }

    #[test]
    fn test_goal_completes_when_kind_is_remembered() {
        let mut agent = agent();
        agent.add_tool("web_search", builtin::web_search());
        // unknown kinds plan a `research` action, which mentions the goal kind
        agent.add_goal("research", params_from(json!({"query": "Lisbon"})), 1);

        let outcome = agent.run_planning_cycle();
        assert!(matches!(outcome, CycleOutcome::Executed(ref o) if o.is_success()));
        assert!(agent.goals()[0].completed);
        assert!(matches!(agent.run_planning_cycle(), CycleOutcome::AllGoalsCompleted));
    }

    #[test]
    fn test_failures_do_not_complete_goals() {
        let mut agent = agent();
        agent.add_tool("budget_calculator", builtin::budget_calculator());
        agent.add_goal("calculate_budget", params_from(json!({"total_budget": 100, "duration": 0})), 1);
        agent.remember("note", json!({}), "calculate_budget failed", Some(2.0));
        agent.check_goal_completion();
        assert!(!agent.goals()[0].completed);
    }

    #[test]
    fn test_inactive_agent_does_nothing() {
        let mut agent = agent();
        agent.add_goal("research", Params::new(), 1);
        agent.deactivate();
        let outcome = agent.run_planning_cycle();
        assert_eq!(outcome.to_string(), "Agent is not active");
        assert!(agent.memory().is_empty());
    }

    #[test]
    fn test_demo_keeps_researching_rome() {
        let display = DisplayMode::capture();
        let agent = run_demo("TravelBuddy", 5, display.clone());

        assert_eq!(agent.memory().len(), 5);
        assert!(agent.goals().iter().all(|g| !g.completed));
        let lines = display.captured();
        assert!(lines.iter().any(|l| l == "🎯 TravelBuddy added goal: 🎯 research_destination: {\"destination\":\"Rome\",\"duration\":14}"));
        assert!(lines.iter().any(|l| l == "🔧 TravelBuddy learned to use: flight_api"));
        assert_eq!(lines.iter().filter(|l| l.starts_with("--- Planning Cycle")).count(), 5);
    }

    #[test]
    fn test_status_report() {
        let agent = run_demo("TravelBuddy", 2, DisplayMode::quiet());
        let status = agent.status_report();
        assert!(status.contains("📊 AGENT STATUS: TravelBuddy"));
        assert!(status.contains("🎯 Goals: 0/3 completed"));
        assert!(status.contains("🧠 Memories: 2 experiences stored"));
        assert!(status.contains("🔧 Tools: 3 available"));
        assert!(status.contains("RECENT MEMORIES:"));
    }
}
