//! Travel agent data types

use crate::apis::{HotelPrices, SimpleForecast};
use crate::display_mode::DisplayMode;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::collections::BTreeMap;

/// What the traveller wants out of the trip
#[derive(Debug, Clone, Serialize)]
pub struct TripGoals {
    pub destinations: Vec<String>,
    pub budget: f64,
    pub duration: u32,
    pub preferences: Vec<String>,
    pub constraints: Vec<String>,
}

impl TripGoals {
    pub fn prefers(&self, preference: &str) -> bool {
        self.preferences.iter().any(|p| p == preference)
    }
}

/// How well a destination fits the trip goals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DestinationAnalysis {
    /// Clamped to 1..=10, one decimal
    pub overall_score: f64,
    pub reasons: Vec<String>,
    /// Decided on the unclamped score
    pub recommended: bool,
}

/// Cached research for one destination
#[derive(Debug, Clone, Serialize)]
pub struct ResearchEntry {
    pub weather: SimpleForecast,
    pub prices: HotelPrices,
    pub analysis: DestinationAnalysis,
    pub researched_at: DateTime<Local>,
}

/// Ranked destination in the final plan
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub city: String,
    pub score: f64,
    pub recommended: bool,
    pub reasons: Vec<String>,
    pub estimated_daily_cost: i64,
}

/// Actions the travel agent can plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TravelAction {
    ResearchDestination(String),
    AnalyzeAndRecommend,
}

/// Research cache, learned preferences and decision history
#[derive(Debug)]
pub struct TravelAgentMemory {
    research_cache: BTreeMap<String, ResearchEntry>,
    user_preferences: BTreeMap<String, serde_json::Value>,
    decision_history: Vec<String>,
    display: DisplayMode,
}

impl TravelAgentMemory {
    pub fn new(display: DisplayMode) -> Self {
        Self {
            research_cache: BTreeMap::new(),
            user_preferences: BTreeMap::new(),
            decision_history: Vec::new(),
            display,
        }
    }

    pub fn store_research(&mut self, city: &str, entry: ResearchEntry) {
        self.research_cache.insert(city.to_string(), entry);
        self.display.say(&format!("💾 Stored research data for {}", city));
    }

    pub fn research(&self, city: &str) -> Option<&ResearchEntry> {
        self.research_cache.get(city)
    }

    pub fn has_research(&self, city: &str) -> bool {
        self.research_cache.contains_key(city)
    }

    pub fn learn_preference(&mut self, kind: &str, value: serde_json::Value) {
        self.display
            .say(&format!("🧠 Learned: User prefers {} = {}", kind, value));
        self.user_preferences.insert(kind.to_string(), value);
    }

    pub fn preference(&self, kind: &str) -> Option<&serde_json::Value> {
        self.user_preferences.get(kind)
    }

    pub fn record_decision(&mut self, decision: impl Into<String>) {
        self.decision_history.push(decision.into());
    }

    pub fn decision_history(&self) -> &[String] {
        &self.decision_history
    }
}
