//! Agent module
//!
//! Goal-driven basic agent, its experience log, and the planning state
//! machine used by the travel agent.

pub mod basic;
pub mod memory;
pub mod state;

// Re-export commonly used types
pub use basic::{ActionOutcome, BasicAgent, CycleOutcome};
pub use memory::{MemoryLog, DEFAULT_RELEVANT_LIMIT};
pub use state::{TravelEvent, TravelState};
