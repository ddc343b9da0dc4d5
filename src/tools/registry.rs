//! Tool registry
//!
//! Maps tool names to registered [`Tool`]s and keeps per-tool execution
//! statistics.

use crate::errors::{AgentError, Result};
use crate::tools::types::{Tool, ToolSchema, ToolStats};
use crate::types::Params;
use std::collections::BTreeMap;
use tracing::debug;

/// Tool registry
#[derive(Default)]
pub struct ToolRegistry {
    /// Map of tool name to tool
    tools: BTreeMap<String, Box<dyn Tool>>,

    /// Map of tool name to execution statistics
    stats: BTreeMap<String, ToolStats>,
}

impl ToolRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool under its schema name, replacing any previous one
    pub fn register(&mut self, tool: impl Tool + 'static) {
        self.register_as(tool.name().to_string(), tool);
    }

    /// Register a tool under an explicit name
    pub fn register_as(&mut self, name: impl Into<String>, tool: impl Tool + 'static) {
        let name = name.into();
        debug!(tool = %name, "registering tool");
        self.stats.entry(name.clone()).or_default();
        self.tools.insert(name, Box::new(tool));
    }

    /// Invoke a registered tool
    ///
    /// Returns [`AgentError::ToolNotAvailable`] when no tool is registered
    /// under `name`; tool failures are passed through unchanged.
    pub fn invoke(&mut self, name: &str, params: &Params) -> Result<String> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| AgentError::ToolNotAvailable(name.to_string()))?;

        let result = tool.invoke(params);
        let stats = self.stats.entry(name.to_string()).or_default();
        match &result {
            Ok(_) => stats.record_success(),
            Err(e) => {
                debug!(tool = %name, error = %e, "tool invocation failed");
                stats.record_failure();
            }
        }
        result
    }

    /// Get tool schema by name
    pub fn get(&self, name: &str) -> Option<&ToolSchema> {
        self.tools.get(name).map(|t| t.schema())
    }

    /// Check if tool exists
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Get all tool names, sorted
    pub fn tool_names(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }

    /// Get all tool schemas
    pub fn schemas(&self) -> Vec<&ToolSchema> {
        self.tools.values().map(|t| t.schema()).collect()
    }

    /// Execution statistics for a tool
    pub fn stats(&self, name: &str) -> Option<&ToolStats> {
        self.stats.get(name)
    }

    /// Get total number of tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.tool_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::types::FnTool;

    fn registry() -> ToolRegistry {
        let mut registry = ToolRegistry::new();
        registry.register(FnTool::new("ok", "Always works", |_: &Params| Ok("fine".to_string())));
        registry.register(FnTool::new("broken", "Always fails", |_: &Params| {
            Err(AgentError::Generic("boom".to_string()))
        }));
        registry
    }

    #[test]
    fn test_registry_creation() {
        let registry = registry();
        assert_eq!(registry.len(), 2);
        assert!(!registry.is_empty());
        assert_eq!(registry.tool_names(), vec!["broken", "ok"]);
    }

    #[test]
    fn test_missing_tool_is_not_available() {
        let mut registry = registry();
        let err = registry.invoke("hotel_api", &Params::new()).unwrap_err();
        assert!(matches!(err, AgentError::ToolNotAvailable(name) if name == "hotel_api"));
    }

    #[test]
    fn test_stats_track_outcomes() {
        let mut registry = registry();
        registry.invoke("ok", &Params::new()).unwrap();
        registry.invoke("ok", &Params::new()).unwrap();
        assert!(registry.invoke("broken", &Params::new()).is_err());

        assert_eq!(registry.stats("ok").unwrap().successful_executions, 2);
        assert_eq!(registry.stats("broken").unwrap().failed_executions, 1);
    }

    #[test]
    fn test_register_as_overrides_name() {
        let mut registry = ToolRegistry::new();
        registry.register_as("alias", FnTool::new("real", "x", |_: &Params| Ok(String::new())));
        assert!(registry.contains("alias"));
        assert!(!registry.contains("real"));
        assert_eq!(registry.get("alias").unwrap().name, "real");
    }
}
