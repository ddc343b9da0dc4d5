//! Production-style travel agent
//!
//! Wraps the travel tools in a registry, tracks goals and confidence in an
//! [`AgentSnapshot`] and degrades to a demo mode when no LLM credentials are
//! configured. Planning never leaves the process: with credentials present
//! the agent runs its local tool chain instead of a remote model.

use crate::display_mode::DisplayMode;
use crate::errors::{AgentError, Result};
use crate::production::types::{AgentSnapshot, Credentials, TripGoal};
use crate::research::extract_month;
use crate::tools::travel::{budget_analyzer_tool, research_destination_tool, weather_info_tool};
use crate::tools::ToolRegistry;
use crate::types::params_from;
use serde_json::json;
use tracing::{info, warn};

/// Confidence gained per successful plan
pub const CONFIDENCE_STEP: f64 = 0.2;

/// Trip length assumed when the dates do not give a day range
pub const DEFAULT_TRIP_DAYS: u32 = 7;

const STATUS_RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";
const GOAL_RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Nights covered by a "June 15-29" style range
pub fn trip_days(dates: &str) -> u32 {
    dates
        .split_whitespace()
        .find_map(|word| {
            let (start, end) = word.trim_end_matches(',').split_once('-')?;
            let (start, end) = (start.parse::<u32>().ok()?, end.parse::<u32>().ok()?);
            (end > start).then(|| end - start)
        })
        .unwrap_or(DEFAULT_TRIP_DAYS)
}

/// Travel agent with validated state and demo-mode fallback
pub struct ProductionTravelAgent {
    name: String,
    state: AgentSnapshot,
    credentials: Option<Credentials>,
    tools: ToolRegistry,
    display: DisplayMode,
}

impl std::fmt::Debug for ProductionTravelAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductionTravelAgent")
            .field("name", &self.name)
            .field("agent_id", &self.state.agent_id)
            .field("configured", &self.credentials.is_some())
            .finish()
    }
}

impl ProductionTravelAgent {
    /// Agent configured from `AZURE_OPENAI_*` environment variables
    pub fn from_env(name: impl Into<String>, display: DisplayMode) -> Self {
        Self::new(name, Credentials::from_env(), display)
    }

    pub fn new(name: impl Into<String>, credentials: Option<Credentials>, display: DisplayMode) -> Self {
        let mut tools = ToolRegistry::new();
        tools.register(research_destination_tool());
        tools.register(weather_info_tool());
        tools.register(budget_analyzer_tool());

        if credentials.is_some() {
            display.show_success("✅ LLM credentials found, tool chain enabled");
        } else {
            display.show_warning("⚠️ API keys not configured. Agent will run in demo mode.");
        }

        Self {
            name: name.into(),
            state: AgentSnapshot::default(),
            credentials,
            tools,
            display,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> &AgentSnapshot {
        &self.state
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    pub fn is_demo_mode(&self) -> bool {
        self.credentials.is_none()
    }

    /// Make `goal` the current goal and return its summary
    pub fn set_travel_goal(&mut self, goal: TripGoal) -> String {
        let summary = format!(
            "🎯 TRAVEL GOAL SET\n{}\n📍 Destination: {}\n📅 Dates: {}\n🎨 Interests: {}\n💰 Budget: {}\n\n✅ Goal registered! Ready to start planning.",
            GOAL_RULE,
            goal.destination,
            goal.travel_dates,
            goal.interests.join(", "),
            match goal.budget {
                Some(budget) => format!("${:.0}", budget),
                None => "Not specified".to_string(),
            }
        );
        info!(destination = %goal.destination, priority = goal.priority, "travel goal set");
        self.state.current_goal = Some(goal);
        self.display.say(&summary);
        summary
    }

    /// Plan the current goal
    ///
    /// In demo mode this returns an explanation of what a configured agent
    /// would do. Otherwise the research, weather and budget tools run for
    /// the current goal and their reports are concatenated. A missing goal
    /// or a failing tool is rendered into the returned text.
    pub fn plan_trip(&mut self, request: &str) -> String {
        if self.is_demo_mode() {
            return demo_mode_response(request);
        }

        match self.run_tool_chain() {
            Ok(plan) => {
                self.state.boost_confidence(CONFIDENCE_STEP);
                info!(confidence = self.state.confidence(), "trip planned");
                plan
            }
            Err(err) => {
                warn!(error = %err, "trip planning failed");
                format!("❌ Error during trip planning: {}", err)
            }
        }
    }

    fn run_tool_chain(&mut self) -> Result<String> {
        let goal = self
            .state
            .current_goal
            .clone()
            .ok_or_else(|| AgentError::Validation("no travel goal set".to_string()))?;
        self.state.last_action = Some("planning_trip".to_string());

        let mut sections = vec![
            self.tools.invoke(
                "research_destination",
                &params_from(json!({
                    "destination": goal.destination,
                    "interests": goal.interests.join(","),
                })),
            )?,
            self.tools.invoke(
                "get_weather_info",
                &params_from(json!({
                    "destination": goal.destination,
                    "month": extract_month(&goal.travel_dates),
                })),
            )?,
        ];
        if let Some(budget) = goal.budget {
            sections.push(self.tools.invoke(
                "budget_analyzer",
                &params_from(json!({
                    "total_budget": budget,
                    "duration": trip_days(&goal.travel_dates),
                    "priorities": goal.interests.join(","),
                })),
            )?);
        }

        self.state
            .memory_context
            .insert("last_planned_destination".to_string(), json!(goal.destination));
        Ok(sections.join("\n\n"))
    }

    /// Run each tool once with sample inputs
    pub fn demonstrate_tools(&mut self) -> Result<()> {
        let d = self.display.clone();
        d.heading("🔧 TOOL DEMONSTRATION");
        d.rule('=', 50);

        let runs = [
            (
                "1️⃣ DESTINATION RESEARCH TOOL:",
                "research_destination",
                json!({"destination": "Rome", "interests": "history,art,food"}),
            ),
            (
                "2️⃣ WEATHER INFORMATION TOOL:",
                "get_weather_info",
                json!({"destination": "Rome", "month": "June"}),
            ),
            (
                "3️⃣ BUDGET ANALYZER TOOL:",
                "budget_analyzer",
                json!({"total_budget": 2500.0, "duration": 14, "priorities": "food,culture"}),
            ),
        ];
        for (title, tool, params) in runs {
            d.say(&format!("\n{}", title));
            d.say(&self.tools.invoke(tool, &params_from(params))?);
        }
        Ok(())
    }

    pub fn status_report(&self) -> String {
        let configured = self.credentials.is_some();
        let mut status = format!(
            "🤖 AGENT STATUS: {}\n{}\n\n🆔 Agent ID: {}\n🎯 Current Goal: {}\n✅ Completed Goals: {}\n🎚️ Confidence: {:.1}%\n🔧 LLM Status: {}\n⚙️ Agent Status: {}\n",
            self.name,
            STATUS_RULE,
            self.state.agent_id,
            self.state
                .current_goal
                .as_ref()
                .map_or("None", |g| g.destination.as_str()),
            self.state.completed_goals.len(),
            self.state.confidence() * 100.0,
            if configured { "✅ Connected" } else { "❌ Not configured" },
            if configured { "✅ Active" } else { "❌ Demo mode" },
        );

        if let Some(goal) = &self.state.current_goal {
            status.push_str(&format!(
                "\n📍 CURRENT GOAL DETAILS:\n   Destination: {}\n   Dates: {}\n   Interests: {}\n   Budget: {}\n",
                goal.destination,
                goal.travel_dates,
                goal.interests.join(", "),
                goal.budget_label()
            ));
        }
        status
    }

    /// Move the current goal to the completed list
    pub fn complete_current_goal(&mut self) -> Option<&TripGoal> {
        let Some(mut goal) = self.state.current_goal.take() else {
            warn!("no current goal to complete");
            return None;
        };
        goal.completed = true;
        self.display
            .show_success(&format!("✅ Completed goal: {}", goal.destination));
        self.state.completed_goals.push(goal);
        self.state.completed_goals.last()
    }
}

fn demo_mode_response(request: &str) -> String {
    format!(
        "🤖 DEMO MODE RESPONSE\n\n\
         Your request: {}\n\n\
         In production mode with proper API keys, I would:\n\
         ✅ Reason about your request with a language model\n\
         ✅ Research destinations using real APIs\n\
         ✅ Get current weather information\n\
         ✅ Analyze your budget and provide optimization\n\
         ✅ Create a comprehensive travel plan\n\n\
         To enable full functionality:\n\
         1. Set up an Azure OpenAI account\n\
         2. Export AZURE_OPENAI_KEY and AZURE_OPENAI_BASE\n\
         3. Optionally set OPENAI_API_VERSION\n\n\
         For now, you can run the individual tools in demo mode!",
        request.trim()
    )
}

/// Status, goal, tools, planning and final status for "TravelPro"
pub fn run_demo(credentials: Option<Credentials>, display: DisplayMode) -> Result<ProductionTravelAgent> {
    let d = display.clone();
    d.heading("🚀 PRODUCTION AGENTIC AI DEMONSTRATION");
    d.rule('=', 60);

    let mut agent = ProductionTravelAgent::new("TravelPro", credentials, display);

    d.say("\n📊 INITIAL AGENT STATUS:");
    d.say(&agent.status_report());

    d.say("\n🎯 SETTING TRAVEL GOAL:");
    agent.set_travel_goal(TripGoal::new(
        "Rome",
        "June 15-29, 2024",
        vec!["history".into(), "art".into(), "food".into()],
        Some(2500.0),
    ));

    d.say("\n🔧 DEMONSTRATING INDIVIDUAL TOOLS:");
    agent.demonstrate_tools()?;

    d.say("\n🗺️ COMPREHENSIVE TRIP PLANNING:");
    let plan = agent.plan_trip(
        "I want to plan an amazing 14-day trip to Rome in June. I'm really interested in \
         history, art, and incredible food experiences. My budget is $2500 total.",
    );
    d.say("\n📋 TRIP PLAN RESULT:");
    if plan.starts_with("❌") {
        d.show_error(&plan);
    } else {
        d.say(&plan);
    }

    d.say("\n📊 FINAL AGENT STATUS:");
    d.say(&agent.status_report());

    d.say("");
    d.rule('=', 60);
    d.show_success("🎉 PRODUCTION DEMONSTRATION COMPLETE!");
    d.rule('=', 60);
    Ok(agent)
}
