//! Autonomous travel planning agent
//!
//! Observes which destinations still need research, plans the next actions,
//! executes them against the mock services and advances its planning state
//! until recommendations are ready or the step budget runs out.

use crate::agent::{TravelEvent, TravelState};
use crate::apis::{make_rng, HotelPrices, PriceApi, SimpleForecast, SimpleWeatherApi};
use crate::display_mode::DisplayMode;
use crate::errors::Result;
use crate::travel::types::{
    DestinationAnalysis, Recommendation, ResearchEntry, TravelAction, TravelAgentMemory, TripGoals,
};
use chrono::Local;
use rand::rngs::StdRng;
use rand::Rng;
use serde_json::json;
use std::cmp::Ordering;
use std::time::Duration;
use tracing::{debug, info};

/// Default cap on planning steps
pub const DEFAULT_MAX_STEPS: usize = 10;

/// Share of the budget accommodation may take before a destination is penalised
pub const ACCOMMODATION_SHARE: f64 = 0.6;

/// Goal-seeking travel planner
#[derive(Debug)]
pub struct SimpleTravelAgent<R = StdRng> {
    goals: TripGoals,
    memory: TravelAgentMemory,
    weather_api: SimpleWeatherApi<R>,
    price_api: PriceApi<R>,
    recommendations: Vec<Recommendation>,
    state: TravelState,
    max_steps: usize,
    pace: Duration,
    display: DisplayMode,
}

impl SimpleTravelAgent<StdRng> {
    /// Agent with seeded (or entropy-seeded) mock services
    pub fn new(goals: TripGoals, seed: Option<u64>, display: DisplayMode) -> Self {
        let weather = SimpleWeatherApi::new(make_rng(seed));
        let prices = PriceApi::new(make_rng(seed.map(|s| s.wrapping_add(1))));
        Self::with_services(goals, weather, prices, display)
    }
}

impl<R: Rng> SimpleTravelAgent<R> {
    pub fn with_services(
        goals: TripGoals,
        weather_api: SimpleWeatherApi<R>,
        price_api: PriceApi<R>,
        display: DisplayMode,
    ) -> Self {
        Self {
            goals,
            memory: TravelAgentMemory::new(display.clone()),
            weather_api,
            price_api,
            recommendations: Vec::new(),
            state: TravelState::Initialized,
            max_steps: DEFAULT_MAX_STEPS,
            pace: Duration::ZERO,
            display,
        }
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Pause between planning steps
    pub fn with_pace(mut self, pace: Duration) -> Self {
        self.pace = pace;
        self
    }

    pub fn state(&self) -> TravelState {
        self.state
    }

    pub fn memory(&self) -> &TravelAgentMemory {
        &self.memory
    }

    /// Ranked recommendations, best first
    pub fn recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }

    pub fn goals_achieved(&self) -> bool {
        self.state == TravelState::RecommendationsReady
    }

    /// Observe → plan → execute → update until done or out of steps, then present the plan
    pub fn autonomous_planning_cycle(&mut self) -> Result<usize> {
        self.display.say("🚀 Starting autonomous trip planning...");
        self.display.say(&format!(
            "📋 Goals: Visit {}, Budget: ${:.0}, Duration: {} days",
            self.goals.destinations.join(", "),
            self.goals.budget,
            self.goals.duration
        ));
        self.display.say("");

        let mut steps = 0;
        while !self.goals_achieved() && steps < self.max_steps {
            self.display.say(&format!("🔄 Planning Step {}", steps + 1));

            self.observe_environment()?;
            for action in self.plan_next_actions() {
                self.execute_action(&action)?;
            }
            self.update_state()?;

            steps += 1;
            if !self.pace.is_zero() {
                std::thread::sleep(self.pace);
            }
            self.display.say("");
        }

        info!(steps, state = self.state.display_name(), "planning loop finished");
        self.present_final_plan();
        Ok(steps)
    }

    fn unresearched(&self) -> Vec<String> {
        self.goals
            .destinations
            .iter()
            .filter(|city| !self.memory.has_research(city))
            .cloned()
            .collect()
    }

    /// Decide whether research is still needed
    pub fn observe_environment(&mut self) -> Result<()> {
        self.display.say("👀 Observing current conditions...");

        let unresearched = self.unresearched();
        let event = if unresearched.is_empty() {
            self.display.say("✅ All destinations researched");
            TravelEvent::AllResearched
        } else {
            self.display
                .say(&format!("📊 Need to research: {}", unresearched.join(", ")));
            TravelEvent::ResearchGap
        };
        self.transition(event)
    }

    /// Actions for the current state
    pub fn plan_next_actions(&self) -> Vec<TravelAction> {
        match self.state {
            TravelState::ResearchNeeded => self
                .unresearched()
                .into_iter()
                .map(TravelAction::ResearchDestination)
                .collect(),
            TravelState::ReadyToPlan => vec![TravelAction::AnalyzeAndRecommend],
            _ => Vec::new(),
        }
    }

    pub fn execute_action(&mut self, action: &TravelAction) -> Result<()> {
        match action {
            TravelAction::ResearchDestination(city) => {
                self.memory.record_decision(format!("research_destination:{}", city));
                self.research_destination(city);
                Ok(())
            }
            TravelAction::AnalyzeAndRecommend => {
                self.memory.record_decision("analyze_and_recommend");
                self.analyze_and_recommend()
            }
        }
    }

    /// Gather weather and prices for a city, score it and cache the result
    pub fn research_destination(&mut self, city: &str) {
        self.display.say(&format!("🔍 Researching {}...", city));

        let weather = self.weather_api.forecast(city);
        let prices = self.price_api.hotel_prices(city);
        let analysis = self.analyze_destination(city, &weather, &prices);

        self.display.say(&format!("   Weather: {}, {}°C", weather.forecast, weather.temperature));
        self.display.say(&format!("   Hotels: ${}/night", prices.avg_hotel_price));
        self.display.say(&format!("   Rating: {:.1}/10", analysis.overall_score));

        self.memory.store_research(
            city,
            ResearchEntry {
                weather,
                prices,
                analysis,
                researched_at: Local::now(),
            },
        );
    }

    /// Score how well a destination fits the trip goals
    pub fn analyze_destination(
        &self,
        city: &str,
        weather: &SimpleForecast,
        prices: &HotelPrices,
    ) -> DestinationAnalysis {
        let mut score: f64 = 5.0;
        let mut reasons = Vec::new();
        let city = city.to_lowercase();

        if weather.forecast == "sunny" && self.goals.prefers("outdoor activities") {
            score += 2.0;
            reasons.push("Great weather for outdoor activities");
        } else if weather.forecast == "rainy" {
            score -= 1.0;
            reasons.push("Rainy weather might limit outdoor activities");
        }

        let stay_cost = prices.avg_hotel_price as f64 * f64::from(self.goals.duration);
        if stay_cost <= self.goals.budget * ACCOMMODATION_SHARE {
            score += 1.0;
            reasons.push("Within budget range");
        } else {
            score -= 2.0;
            reasons.push("Might be expensive for the budget");
        }

        if self.goals.prefers("museums") && matches!(city.as_str(), "paris" | "berlin") {
            score += 1.5;
            reasons.push("Excellent museums");
        }

        if self.goals.prefers("nightlife") && matches!(city.as_str(), "berlin" | "amsterdam") {
            score += 1.0;
            reasons.push("Great nightlife scene");
        }

        debug!(%city, score, "destination analysed");
        DestinationAnalysis {
            overall_score: (score.clamp(1.0, 10.0) * 10.0).round() / 10.0,
            reasons: reasons.into_iter().map(String::from).collect(),
            recommended: score >= 6.0,
        }
    }

    /// Rank every researched destination
    pub fn analyze_and_recommend(&mut self) -> Result<()> {
        self.display
            .say("🤔 Analyzing all destinations and creating recommendations...");

        let mut recommendations: Vec<Recommendation> = self
            .goals
            .destinations
            .iter()
            .filter_map(|city| {
                self.memory.research(city).map(|research| Recommendation {
                    city: city.clone(),
                    score: research.analysis.overall_score,
                    recommended: research.analysis.recommended,
                    reasons: research.analysis.reasons.clone(),
                    estimated_daily_cost: research.prices.avg_hotel_price,
                })
            })
            .collect();
        recommendations.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        if let Some(best) = recommendations.first() {
            self.memory.learn_preference("top_destination", json!(best.city));
        }

        self.recommendations = recommendations;
        self.transition(TravelEvent::RecommendationsMade)?;
        self.display.say("📊 Analysis complete!");
        Ok(())
    }

    /// Mark research complete once every destination is cached
    pub fn update_state(&mut self) -> Result<()> {
        if self.state == TravelState::ResearchNeeded && self.unresearched().is_empty() {
            self.transition(TravelEvent::ResearchFinished)?;
        }
        Ok(())
    }

    fn transition(&mut self, event: TravelEvent) -> Result<()> {
        let next = self.state.transition(event)?;
        debug!(from = self.state.display_name(), to = next.display_name(), "state transition");
        self.state = next;
        Ok(())
    }

    /// Estimated accommodation: mean over recommendations of nightly cost × duration
    pub fn estimated_accommodation(&self) -> Option<f64> {
        if self.recommendations.is_empty() {
            return None;
        }
        let total: f64 = self
            .recommendations
            .iter()
            .map(|r| r.estimated_daily_cost as f64 * f64::from(self.goals.duration))
            .sum();
        Some(total / self.recommendations.len() as f64)
    }

    pub fn present_final_plan(&self) {
        let d = &self.display;
        d.heading("🎉 Travel Planning Complete!");
        d.rule('=', 50);
        d.say("");
        d.say("📋 PERSONALIZED TRAVEL RECOMMENDATIONS");
        d.rule('-', 40);

        for (i, rec) in self.recommendations.iter().enumerate() {
            let status = if rec.recommended {
                "✅ HIGHLY RECOMMENDED"
            } else {
                "⚠️  CONSIDER CAREFULLY"
            };
            d.say(&format!(
                "{}. {} - Score: {:.1}/10 {}",
                i + 1,
                rec.city.to_uppercase(),
                rec.score,
                status
            ));
            d.say(&format!("   Daily Cost: ${}", rec.estimated_daily_cost));
            d.say(&format!("   Why: {}", rec.reasons.join(", ")));
            d.say("");
        }

        if let Some(accommodation) = self.estimated_accommodation() {
            d.say("💰 BUDGET ANALYSIS");
            d.say(&format!("   Estimated accommodation: ${:.0}", accommodation));
            d.say(&format!(
                "   Remaining for flights/food/activities: ${:.0}",
                self.goals.budget - accommodation
            ));
            d.say("");
        }

        d.say("🚀 Next Steps:");
        d.say("   1. Book flights to top-rated destinations");
        d.say("   2. Reserve accommodations in recommended areas");
        d.say("   3. Research specific activities based on weather forecasts");
    }

    pub fn explain_agent_behavior(&self) {
        let d = &self.display;
        d.say("");
        d.rule('=', 60);
        d.heading("🤖 WHAT MADE THIS AI 'AGENTIC'?");
        d.rule('=', 60);
        d.say("");
        d.say("Unlike basic automation or traditional AI chatbots, this agent:");
        d.say("");
        for line in [
            "✅ AUTONOMOUS: Worked toward your goals without constant instruction",
            "✅ PROACTIVE: Took initiative to research destinations",
            "✅ GOAL-ORIENTED: Every action aimed at achieving your trip goals",
            "✅ ADAPTIVE: Could handle different destination data and preferences",
            "✅ MEMORY: Remembered research to avoid duplicate work",
            "✅ REASONING: Analyzed data against your specific preferences",
        ] {
            d.show_success(line);
        }
        d.say("");
        d.say("This is the foundation of Agentic AI! 🎯");
    }
}

/// Trip goals used by the demo
pub fn demo_goals(budget: f64, duration: u32) -> TripGoals {
    TripGoals {
        destinations: ["Paris", "Berlin", "Amsterdam", "Prague"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        budget,
        duration,
        preferences: vec!["museums".into(), "local food".into(), "nightlife".into()],
        constraints: vec!["no more than 3 flights".into(), "stay in city centers".into()],
    }
}
