//! Memory entries recorded by agents

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A remembered experience
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryEntry {
    /// Experience type, e.g. `action_execution`
    pub kind: String,

    /// Arbitrary structured payload
    pub data: serde_json::Value,

    /// Human-readable outcome
    pub outcome: String,

    /// Satisfaction score on a 1-10 scale, when one was recorded
    pub satisfaction: Option<f64>,

    pub timestamp: DateTime<Local>,
}

impl MemoryEntry {
    pub fn new(
        kind: impl Into<String>,
        data: serde_json::Value,
        outcome: impl Into<String>,
        satisfaction: Option<f64>,
    ) -> Self {
        Self {
            kind: kind.into(),
            data,
            outcome: outcome.into(),
            satisfaction,
            timestamp: Local::now(),
        }
    }

    /// Case-insensitive substring match against the stringified data or the outcome.
    ///
    /// `needle` must already be lowercase.
    pub fn mentions(&self, needle: &str) -> bool {
        self.data.to_string().to_lowercase().contains(needle)
            || self.outcome.to_lowercase().contains(needle)
    }

    /// True when a satisfaction above `threshold` was recorded
    pub fn satisfied_above(&self, threshold: f64) -> bool {
        self.satisfaction.map_or(false, |s| s > threshold)
    }
}

impl fmt::Display for MemoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.satisfaction {
            Some(s) => write!(f, "Memory: {} -> {} (satisfaction: {:.1})", self.kind, self.outcome, s),
            None => write!(f, "Memory: {} -> {} (satisfaction: none)", self.kind, self.outcome),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mentions_data_and_outcome() {
        let entry = MemoryEntry::new(
            "action_execution",
            json!({"action": "search_info", "tool_used": "web_search"}),
            "Success: Found Rome",
            Some(8.0),
        );
        assert!(entry.mentions("web_search"));
        assert!(entry.mentions("found rome"));
        assert!(!entry.mentions("paris"));
    }

    #[test]
    fn test_satisfied_above_is_strict() {
        let seven = MemoryEntry::new("x", json!(null), "ok", Some(7.0));
        let eight = MemoryEntry::new("x", json!(null), "ok", Some(8.0));
        let unscored = MemoryEntry::new("x", json!(null), "ok", None);
        assert!(!seven.satisfied_above(7.0));
        assert!(eight.satisfied_above(7.0));
        assert!(!unscored.satisfied_above(7.0));
    }

    #[test]
    fn test_display_without_satisfaction() {
        let entry = MemoryEntry::new("note", json!("x"), "kept", None);
        assert_eq!(entry.to_string(), "Memory: note -> kept (satisfaction: none)");
    }
}
