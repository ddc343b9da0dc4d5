//! Destination research
//!
//! Knowledge base plus the research agent that turns goals into reports.

pub mod agent;
pub mod knowledge;

pub use agent::{
    extract_month, AttractionScore, BudgetInsights, ResearchGoal, TripResearchAgent, WeatherReport,
};
pub use knowledge::{BudgetTier, DestinationProfile};
