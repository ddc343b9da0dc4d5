//! Goals and actions
//!
//! A [`Goal`] is a desired outcome with a type tag and a priority; an
//! [`Action`] is the concrete step planned for it. Neither carries any
//! invariant beyond field presence.

use crate::types::params::{render_params, Params};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A goal the agent is working towards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    /// Goal type tag, e.g. `research_destination`
    pub kind: String,

    /// Free-form goal parameters
    pub parameters: Params,

    /// Higher number means higher priority
    pub priority: i32,

    /// Whether the goal has been achieved
    pub completed: bool,

    pub created_at: DateTime<Local>,

    pub completed_at: Option<DateTime<Local>>,
}

impl Goal {
    /// Create a new, incomplete goal
    pub fn new(kind: impl Into<String>, parameters: Params, priority: i32) -> Self {
        Self {
            kind: kind.into(),
            parameters,
            priority,
            completed: false,
            created_at: Local::now(),
            completed_at: None,
        }
    }

    /// Mark this goal as completed
    pub fn complete(&mut self) {
        self.completed = true;
        self.completed_at = Some(Local::now());
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.completed { "✅" } else { "🎯" };
        write!(f, "{} {}: {}", status, self.kind, render_params(&self.parameters))
    }
}

/// An action an agent can take
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Action {
    /// Action type tag, e.g. `search_info`
    pub kind: String,

    pub parameters: Params,

    /// Registered tool that performs this action, if any
    pub tool_needed: Option<String>,

    pub created_at: DateTime<Local>,
}

impl Action {
    pub fn new(kind: impl Into<String>, parameters: Params, tool_needed: Option<&str>) -> Self {
        Self {
            kind: kind.into(),
            parameters,
            tool_needed: tool_needed.map(str::to_string),
            created_at: Local::now(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Action: {} with {}", self.kind, render_params(&self.parameters))
    }
}
