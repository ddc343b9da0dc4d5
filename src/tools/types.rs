//! Tool abstraction
//!
//! A tool is a named synchronous callback that turns a parameter map into
//! a textual result. Agents only see the [`Tool`] trait; closures are
//! adapted with [`FnTool`].

use crate::errors::Result;
use crate::types::Params;
use serde::{Deserialize, Serialize};

/// Tool schema definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSchema {
    /// Tool name (registry key)
    pub name: String,

    /// Tool description
    pub description: String,

    /// Parameter schema (JSON Schema)
    pub parameters: serde_json::Value,
}

impl ToolSchema {
    /// Create new tool schema
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: serde_json::Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
        }
    }
}

/// A callable tool
pub trait Tool {
    /// Schema describing the tool
    fn schema(&self) -> &ToolSchema;

    /// Run the tool with the given parameters
    fn invoke(&self, params: &Params) -> Result<String>;

    /// Tool name
    fn name(&self) -> &str {
        &self.schema().name
    }
}

type ToolFn = Box<dyn Fn(&Params) -> Result<String>>;

/// Tool backed by a closure
pub struct FnTool {
    schema: ToolSchema,
    func: ToolFn,
}

impl FnTool {
    /// Wrap a closure; the parameter schema defaults to an open object
    pub fn new<F>(name: impl Into<String>, description: impl Into<String>, func: F) -> Self
    where
        F: Fn(&Params) -> Result<String> + 'static,
    {
        Self {
            schema: ToolSchema::new(name, description, serde_json::json!({"type": "object"})),
            func: Box::new(func),
        }
    }

    /// Attach a JSON Schema for the parameters
    pub fn with_parameters(mut self, parameters: serde_json::Value) -> Self {
        self.schema.parameters = parameters;
        self
    }
}

impl Tool for FnTool {
    fn schema(&self) -> &ToolSchema {
        &self.schema
    }

    fn invoke(&self, params: &Params) -> Result<String> {
        (self.func)(params)
    }
}

impl std::fmt::Debug for FnTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnTool").field("schema", &self.schema).finish()
    }
}

/// Tool execution statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolStats {
    /// Total executions
    pub total_executions: u64,

    /// Successful executions
    pub successful_executions: u64,

    /// Failed executions
    pub failed_executions: u64,
}

impl ToolStats {
    /// Record successful execution
    pub fn record_success(&mut self) {
        self.total_executions += 1;
        self.successful_executions += 1;
    }

    /// Record failed execution
    pub fn record_failure(&mut self) {
        self.total_executions += 1;
        self.failed_executions += 1;
    }

    /// Success rate (0.0 to 1.0)
    pub fn success_rate(&self) -> f64 {
        if self.total_executions == 0 {
            return 0.0;
        }
        self.successful_executions as f64 / self.total_executions as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AgentError;
    use crate::types::ParamsExt;

    #[test]
    fn test_fn_tool_invokes_closure() {
        let tool = FnTool::new("echo", "Echo the query", |params: &Params| {
            Ok(params.require_str("query")?.to_uppercase())
        });
        let mut params = Params::new();
        params.insert("query".into(), "rome".into());

        assert_eq!(tool.name(), "echo");
        assert_eq!(tool.invoke(&params).unwrap(), "ROME");
    }

    #[test]
    fn test_fn_tool_propagates_errors() {
        let tool = FnTool::new("broken", "Always fails", |_: &Params| {
            Err(AgentError::Generic("boom".to_string()))
        });
        assert!(tool.invoke(&Params::new()).is_err());
    }

    #[test]
    fn test_stats_success_rate() {
        let mut stats = ToolStats::default();
        assert_eq!(stats.success_rate(), 0.0);
        stats.record_success();
        stats.record_success();
        stats.record_failure();
        assert_eq!(stats.total_executions, 3);
        assert!((stats.success_rate() - 2.0 / 3.0).abs() < 1e-9);
    }
}
