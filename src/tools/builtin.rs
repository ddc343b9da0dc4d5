//! Demo tools used by the basic agent
//!
//! - web_search: canned destination search
//! - budget_calculator: daily budget from total and duration
//! - flight_api: canned flight search

use crate::errors::AgentError;
use crate::tools::types::FnTool;
use crate::types::{Params, ParamsExt};
use serde_json::json;

/// Canned search returning a fixed blurb for the `query` parameter
pub fn web_search() -> FnTool {
    FnTool::new("web_search", "Search for information about a destination", |params: &Params| {
        let query = params.str_param("query").unwrap_or("general search");
        Ok(format!("Found information about {}: Great destination with rich history!", query))
    })
    .with_parameters(json!({
        "type": "object",
        "properties": {"query": {"type": "string"}}
    }))
}

/// Daily budget calculator; fails when `duration` is zero
pub fn budget_calculator() -> FnTool {
    FnTool::new("budget_calculator", "Split a total budget across the trip days", |params: &Params| {
        let budget = params.f64_param("total_budget").unwrap_or(0.0);
        let duration = params.f64_param("duration").unwrap_or(1.0);
        if duration <= 0.0 {
            return Err(AgentError::InvalidParameter {
                name: "duration".to_string(),
                reason: "trip duration must be positive".to_string(),
            });
        }
        Ok(format!("Daily budget: ${:.2}", budget / duration))
    })
    .with_parameters(json!({
        "type": "object",
        "properties": {
            "total_budget": {"type": "number"},
            "duration": {"type": "number", "exclusiveMinimum": 0}
        }
    }))
}

/// Canned flight search for the `destination` parameter
pub fn flight_api() -> FnTool {
    FnTool::new("flight_api", "Search flights to a destination", |params: &Params| {
        let destination = params.str_param("destination").unwrap_or("unknown");
        Ok(format!("Found flights to {} starting from $800", destination))
    })
    .with_parameters(json!({
        "type": "object",
        "properties": {"destination": {"type": "string"}}
    }))
}
