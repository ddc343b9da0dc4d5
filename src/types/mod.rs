//! Type definitions module
//!
//! Value objects shared by the agents: goals, actions, memory entries and
//! the free-form parameter maps they carry.

pub mod params;
pub mod goal;
pub mod memory;

// Re-export commonly used types
pub use params::{params_from, render_params, Params, ParamsExt};
pub use goal::{Action, Goal};
pub use memory::MemoryEntry;
