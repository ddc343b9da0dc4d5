//! Tool system
//!
//! Provides the callable tools agents act through:
//! - `Tool` trait and closure adapter
//! - Registry with per-tool execution statistics
//! - Demo tools for the basic agent
//! - Travel research, weather and budget tools

pub mod types;
pub mod registry;
pub mod builtin;
pub mod travel;

// Re-export commonly used types
pub use types::{FnTool, Tool, ToolSchema, ToolStats};
pub use registry::ToolRegistry;
