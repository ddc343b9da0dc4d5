//! Planning state machine for the travel agent
//!
//! Deterministic finite state machine driving the observe / plan / execute
//! loop:
//! - Every state either researches, plans, or is terminal
//! - Unknown (state, event) pairs are rejected, never silently ignored
//! - `RecommendationsReady` is terminal and absorbs every event

use crate::errors::{AgentError, Result};
use serde::{Deserialize, Serialize};

/// Travel planning states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelState {
    /// Agent created, nothing observed yet
    Initialized,

    /// At least one destination has no cached research
    ResearchNeeded,

    /// Research for every destination finished during this step
    ResearchComplete,

    /// All destinations researched, next step compares them
    ReadyToPlan,

    /// Recommendations produced (terminal)
    RecommendationsReady,
}

/// Events that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelEvent {
    /// Observation found unresearched destinations
    ResearchGap,

    /// Observation found every destination researched
    AllResearched,

    /// Research actions of a step covered every destination
    ResearchFinished,

    /// Destinations were scored and ranked
    RecommendationsMade,
}

impl TravelState {
    /// Check if this is a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, TravelState::RecommendationsReady)
    }

    /// Attempt state transition with validation
    ///
    /// Valid transitions:
    /// 1. Initialized | ResearchNeeded | ResearchComplete → ResearchNeeded (on: ResearchGap)
    /// 2. Initialized | ResearchNeeded | ResearchComplete → ReadyToPlan    (on: AllResearched)
    /// 3. ResearchNeeded → ResearchComplete     (on: ResearchFinished)
    /// 4. ReadyToPlan    → RecommendationsReady (on: RecommendationsMade)
    /// 5. RecommendationsReady → RecommendationsReady (terminal)
    pub fn transition(&self, event: TravelEvent) -> Result<TravelState> {
        use TravelEvent::*;
        use TravelState::*;

        let next_state = match (self, event) {
            (Initialized | ResearchNeeded | ResearchComplete, ResearchGap) => ResearchNeeded,
            (Initialized | ResearchNeeded | ResearchComplete, AllResearched) => ReadyToPlan,

            (ResearchNeeded, ResearchFinished) => ResearchComplete,

            (ReadyToPlan, RecommendationsMade) => RecommendationsReady,

            (RecommendationsReady, _) => RecommendationsReady,

            (from, event) => {
                return Err(AgentError::InvalidTransition {
                    from: format!("{:?}", from),
                    event: format!("{:?}", event),
                });
            }
        };

        Ok(next_state)
    }

    /// Get all valid events from this state
    pub fn valid_events(&self) -> Vec<TravelEvent> {
        use TravelEvent::*;
        use TravelState::*;

        match self {
            Initialized | ResearchComplete => vec![ResearchGap, AllResearched],
            ResearchNeeded => vec![ResearchGap, AllResearched, ResearchFinished],
            ReadyToPlan => vec![RecommendationsMade],
            RecommendationsReady => vec![],
        }
    }

    /// Human-readable state name
    pub fn display_name(&self) -> &'static str {
        match self {
            TravelState::Initialized => "initialized",
            TravelState::ResearchNeeded => "research_needed",
            TravelState::ResearchComplete => "research_complete",
            TravelState::ReadyToPlan => "ready_to_plan",
            TravelState::RecommendationsReady => "recommendations_ready",
        }
    }
}
