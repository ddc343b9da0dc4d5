//! Autonomous multi-destination trip planner

pub mod agent;
pub mod types;

pub use agent::{demo_goals, SimpleTravelAgent, ACCOMMODATION_SHARE, DEFAULT_MAX_STEPS};
pub use types::{
    DestinationAnalysis, Recommendation, ResearchEntry, TravelAction, TravelAgentMemory, TripGoals,
};
