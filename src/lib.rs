//! tripwise - Travel Planning Agents
//!
//! Toy travel agents that put fixed-rule automation, a reactive chatbot and
//! goal-seeking "agentic" planners side by side. All external services are
//! mocked; everything runs in process.
//!
//! # Architecture
//!
//! - **Core**: errors, shared types, narration display, tool registry
//! - **Agents**: basic goal/tool/memory agent, autonomous travel planner,
//!   research agent, budget planner, weather assistant, production agent
//! - **Interface**: CLI arguments and TOML configuration

// Core
pub mod errors;
pub mod types;
pub mod display_mode;
pub mod tools;
pub mod apis;

// Re-export commonly used types
pub use display_mode::DisplayMode;
pub use errors::{AgentError, Result};

// Agents
pub mod agent;
pub mod automation;
pub mod travel;
pub mod research;
pub mod budget;
pub mod weather;
pub mod production;
pub mod specialized;

// Interface
pub mod cli;
