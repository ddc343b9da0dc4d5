//! Production-pattern travel agent

pub mod agent;
pub mod types;

pub use agent::{run_demo, trip_days, ProductionTravelAgent, CONFIDENCE_STEP, DEFAULT_TRIP_DAYS};
pub use types::{AgentSnapshot, Credentials, TripGoal, DEFAULT_API_VERSION, INITIAL_CONFIDENCE};
