//! Validated goal and state records for the production agent

use crate::errors::{AgentError, Result};
use chrono::{DateTime, Local};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use uuid::Uuid;

/// Allowed goal priorities
pub const PRIORITY_RANGE: std::ops::RangeInclusive<u8> = 1..=10;

/// Starting confidence of a fresh agent
pub const INITIAL_CONFIDENCE: f64 = 0.5;

/// Default API version when `OPENAI_API_VERSION` is unset
pub const DEFAULT_API_VERSION: &str = "2023-12-01-preview";

/// A trip the agent is working towards
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripGoal {
    pub destination: String,
    pub travel_dates: String,
    pub interests: Vec<String>,
    pub budget: Option<f64>,
    pub priority: u8,
    pub completed: bool,
    pub created_at: DateTime<Local>,
}

impl TripGoal {
    pub fn new(
        destination: impl Into<String>,
        travel_dates: impl Into<String>,
        interests: Vec<String>,
        budget: Option<f64>,
    ) -> Self {
        Self {
            destination: destination.into(),
            travel_dates: travel_dates.into(),
            interests,
            budget,
            priority: 1,
            completed: false,
            created_at: Local::now(),
        }
    }

    /// Set the priority, rejecting values outside 1..=10
    pub fn with_priority(mut self, priority: u8) -> Result<Self> {
        if !PRIORITY_RANGE.contains(&priority) {
            return Err(AgentError::Validation(format!(
                "priority must be between 1 and 10, got {}",
                priority
            )));
        }
        self.priority = priority;
        Ok(self)
    }

    pub fn budget_label(&self) -> String {
        match self.budget {
            Some(budget) => format!("${:.0}", budget),
            None => "Not set".to_string(),
        }
    }
}

/// Agent bookkeeping
#[derive(Debug, Clone, Serialize)]
pub struct AgentSnapshot {
    pub agent_id: Uuid,
    pub current_goal: Option<TripGoal>,
    pub completed_goals: Vec<TripGoal>,
    pub memory_context: BTreeMap<String, Value>,
    pub last_action: Option<String>,
    confidence: f64,
}

impl Default for AgentSnapshot {
    fn default() -> Self {
        Self {
            agent_id: Uuid::new_v4(),
            current_goal: None,
            completed_goals: Vec::new(),
            memory_context: BTreeMap::new(),
            last_action: None,
            confidence: INITIAL_CONFIDENCE,
        }
    }
}

impl AgentSnapshot {
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Set confidence, rejecting values outside [0, 1]
    pub fn set_confidence(&mut self, confidence: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&confidence) {
            return Err(AgentError::Validation(format!(
                "confidence must be within [0, 1], got {}",
                confidence
            )));
        }
        self.confidence = confidence;
        Ok(())
    }

    /// Raise confidence by `delta`, saturating at 1.0
    pub fn boost_confidence(&mut self, delta: f64) {
        self.confidence = (self.confidence + delta).clamp(0.0, 1.0);
    }
}

/// LLM endpoint credentials read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub api_base: String,
    pub api_version: String,
}

impl Credentials {
    /// Read `AZURE_OPENAI_KEY`, `AZURE_OPENAI_BASE` and `OPENAI_API_VERSION`
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Both key and base must be present and non-empty
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());
        Some(Self {
            api_key: non_empty("AZURE_OPENAI_KEY")?,
            api_base: non_empty("AZURE_OPENAI_BASE")?,
            api_version: non_empty("OPENAI_API_VERSION")
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_validation() {
        let goal = TripGoal::new("Rome", "June", vec![], None);
        assert_eq!(goal.priority, 1);
        assert_eq!(goal.clone().with_priority(10).unwrap().priority, 10);
        assert!(goal.clone().with_priority(0).is_err());
        assert!(goal.with_priority(11).is_err());
    }

    #[test]
    fn test_confidence_bounds() {
        let mut snapshot = AgentSnapshot::default();
        assert_eq!(snapshot.confidence(), INITIAL_CONFIDENCE);
        assert!(snapshot.set_confidence(1.5).is_err());
        assert!(snapshot.set_confidence(-0.1).is_err());
        snapshot.set_confidence(0.9).unwrap();
        snapshot.boost_confidence(0.2);
        assert_eq!(snapshot.confidence(), 1.0);
    }

    #[test]
    fn test_credentials_require_key_and_base() {
        let env = |pairs: &'static [(&'static str, &'static str)]| {
            move |key: &str| {
                pairs
                    .iter()
                    .find(|(k, _)| *k == key)
                    .map(|(_, v)| v.to_string())
            }
        };

        assert!(Credentials::from_lookup(env(&[("AZURE_OPENAI_KEY", "k")])).is_none());
        assert!(Credentials::from_lookup(env(&[("AZURE_OPENAI_KEY", "k"), ("AZURE_OPENAI_BASE", "")])).is_none());

        let creds =
            Credentials::from_lookup(env(&[("AZURE_OPENAI_KEY", "k"), ("AZURE_OPENAI_BASE", "https://x")]))
                .unwrap();
        assert_eq!(creds.api_version, DEFAULT_API_VERSION);
    }

    #[test]
    fn test_budget_label() {
        let goal = TripGoal::new("Rome", "June", vec![], Some(2500.0));
        assert_eq!(goal.budget_label(), "$2500");
        assert_eq!(TripGoal::new("Rome", "June", vec![], None).budget_label(), "Not set");
    }
}
