//! Error types for tripwise
//!
//! Every agent operation that can fail returns [`Result`]. Conditions the
//! agents recover from locally (missing tool, failing tool) are still
//! expressed here so they can be logged and rendered consistently.

use thiserror::Error;

/// Main error type for the tripwise agents
#[derive(Error, Debug)]
pub enum AgentError {
    /// Action requested a tool that was never registered
    #[error("Tool '{0}' not available")]
    ToolNotAvailable(String),

    /// Tool ran but reported a failure
    #[error("Tool '{tool}' failed: {reason}")]
    ToolFailed { tool: String, reason: String },

    /// Missing or malformed tool / operation parameter
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Expense or allocation against a category the planner does not know
    #[error("Unknown category: {category}. Use: {valid}")]
    UnknownCategory { category: String, valid: String },

    /// Report requested for a destination without an open research goal
    #[error("No active research goal found for {0}")]
    NoActiveGoal(String),

    /// Planning state machine transition errors
    #[error("Invalid state transition from {from} via {event}")]
    InvalidTransition { from: String, event: String },

    /// Value outside its allowed range
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("Agent error: {0}")]
    Generic(String),
}

/// Result type alias for agent operations
pub type Result<T> = std::result::Result<T, AgentError>;

impl AgentError {
    /// Shorthand for a missing required parameter
    pub fn missing(name: &str) -> Self {
        AgentError::InvalidParameter {
            name: name.to_string(),
            reason: "required".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_category_lists_valid_names() {
        let err = AgentError::UnknownCategory {
            category: "souvenirs".to_string(),
            valid: "accommodation, food".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("souvenirs"));
        assert!(msg.contains("accommodation, food"));
    }

    #[test]
    fn test_tool_not_available_display() {
        let err = AgentError::ToolNotAvailable("hotel_api".to_string());
        assert_eq!(err.to_string(), "Tool 'hotel_api' not available");
    }

    #[test]
    fn test_missing_parameter() {
        let err = AgentError::missing("duration");
        assert!(err.to_string().contains("duration"));
        assert!(err.to_string().contains("required"));
    }
}
