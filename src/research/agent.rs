//! Destination research agent
//!
//! Turns research goals (destination, dates, interests, budget tier) into
//! reports combining weather, ranked attractions, budget insights and local
//! tips from the built-in knowledge base.

use crate::display_mode::DisplayMode;
use crate::errors::AgentError;
use crate::research::knowledge::{
    self, BudgetTier, MonthlyWeather, DEFAULT_ATTRACTIONS, DEFAULT_BUDGET_RANGES,
    DEFAULT_LOCAL_TIPS, DEFAULT_SPLURGES,
};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::{debug, info};

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const REPORT_RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";
const SECTION_RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Attractions start from this score before interest matches
pub const BASE_ATTRACTION_SCORE: f64 = 0.3;

/// Score added per matching interest keyword
pub const KEYWORD_BONUS: f64 = 0.3;

/// A destination to research
#[derive(Debug, Clone, Serialize)]
pub struct ResearchGoal {
    pub id: usize,
    pub destination: String,
    pub dates: String,
    pub interests: Vec<String>,
    pub budget_type: BudgetTier,
    pub completed: bool,
    pub created_at: DateTime<Local>,
    pub completed_at: Option<DateTime<Local>>,
}

/// Weather expectations and packing advice for a month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReport {
    pub temperature: String,
    pub description: String,
    pub rain_probability: String,
    pub packing_advice: String,
}

/// An attraction ranked against the traveller's interests
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttractionScore {
    pub name: String,
    pub score: f64,
    pub recommended: bool,
    pub interest_match: &'static str,
}

/// Daily budget split
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyBreakdown {
    pub accommodation: f64,
    pub food: f64,
    pub activities: f64,
    pub transport: f64,
}

/// Budget insights for a destination and tier
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetInsights {
    pub daily_budget: f64,
    pub breakdown: DailyBreakdown,
    pub money_saving_tips: Vec<String>,
    pub splurge_recommendations: Vec<String>,
}

/// Everything gathered for one report
#[derive(Debug, Clone, Serialize)]
pub struct ResearchRecord {
    pub weather: WeatherReport,
    pub attractions: Vec<AttractionScore>,
    pub budget: BudgetInsights,
    pub goal: ResearchGoal,
}

/// Travel research agent
#[derive(Debug)]
pub struct TripResearchAgent {
    pub name: String,
    goals: Vec<ResearchGoal>,
    research_data: BTreeMap<String, ResearchRecord>,
    display: DisplayMode,
}

impl TripResearchAgent {
    pub fn new(name: impl Into<String>, display: DisplayMode) -> Self {
        Self {
            name: name.into(),
            goals: Vec::new(),
            research_data: BTreeMap::new(),
            display,
        }
    }

    /// Register a destination to research
    pub fn set_research_goal(
        &mut self,
        destination: &str,
        travel_dates: &str,
        interests: &[&str],
        budget_type: BudgetTier,
    ) -> &ResearchGoal {
        let goal = ResearchGoal {
            id: self.goals.len() + 1,
            destination: destination.to_string(),
            dates: travel_dates.to_string(),
            interests: interests.iter().map(|i| i.to_string()).collect(),
            budget_type,
            completed: false,
            created_at: Local::now(),
            completed_at: None,
        };
        self.display
            .say(&format!("🎯 Research Goal Set: {} for {}", destination, travel_dates));
        self.goals.push(goal);
        &self.goals[self.goals.len() - 1]
    }

    /// Weather for a destination and month; unknown pairs get a generic European profile
    pub fn research_weather(&self, destination: &str, month: &str) -> WeatherReport {
        self.display
            .say(&format!("🌤️ Researching weather for {} in {}...", destination, month));

        match knowledge::lookup(destination).and_then(|d| d.weather_for(month)) {
            Some(weather) => WeatherReport {
                temperature: weather.temp.to_string(),
                description: weather.description.to_string(),
                rain_probability: weather.rain.to_string(),
                packing_advice: packing_advice(weather),
            },
            None => {
                debug!(destination, month, "no weather data, using fallback");
                WeatherReport {
                    temperature: "15-25°C".to_string(),
                    description: "Typical European weather".to_string(),
                    rain_probability: "Moderate".to_string(),
                    packing_advice: "Pack layers and bring a light rain jacket".to_string(),
                }
            }
        }
    }

    /// Attractions scored against `interests`, best first, at most five
    pub fn research_attractions<S: AsRef<str>>(&self, destination: &str, interests: &[S]) -> Vec<AttractionScore> {
        let interests: Vec<&str> = interests.iter().map(AsRef::as_ref).collect();
        self.display.say(&format!(
            "🏛️ Researching attractions in {} for interests: {}",
            destination,
            interests.join(", ")
        ));

        let attractions = knowledge::lookup(destination)
            .map(|d| d.attractions)
            .unwrap_or(DEFAULT_ATTRACTIONS);

        let mut scored: Vec<AttractionScore> = attractions
            .iter()
            .map(|&name| {
                let score = score_attraction(name, &interests);
                AttractionScore {
                    name: name.to_string(),
                    score,
                    recommended: score > 0.5,
                    interest_match: interest_match(name),
                }
            })
            .collect();

        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        scored.truncate(5);
        scored
    }

    /// Daily budget split, money-saving tips and (for luxury) splurges
    pub fn budget_insights(&self, destination: &str, tier: BudgetTier) -> BudgetInsights {
        let profile = knowledge::lookup(destination);
        let ranges = profile.map(|d| d.budget_ranges).unwrap_or(DEFAULT_BUDGET_RANGES);
        let tips = profile.map(|d| d.local_tips).unwrap_or(DEFAULT_LOCAL_TIPS);
        let daily = ranges.daily(tier);

        let money_saving_tips = tips
            .iter()
            .filter(|tip| {
                let lower = tip.to_lowercase();
                ["free", "save", "advance", "local"].iter().any(|w| lower.contains(w))
            })
            .map(|tip| tip.to_string())
            .collect();

        let splurge_recommendations = if tier == BudgetTier::Luxury {
            profile
                .map(|d| d.splurges)
                .unwrap_or(DEFAULT_SPLURGES)
                .iter()
                .map(|s| s.to_string())
                .collect()
        } else {
            Vec::new()
        };

        BudgetInsights {
            daily_budget: daily,
            breakdown: DailyBreakdown {
                accommodation: daily * 0.4,
                food: daily * 0.3,
                activities: daily * 0.2,
                transport: daily * 0.1,
            },
            money_saving_tips,
            splurge_recommendations,
        }
    }

    /// Research the first open goal for `destination` and render the report.
    ///
    /// The goal is marked complete; a second call for the same destination
    /// returns a `❌` line unless another goal is open.
    pub fn compile_research_report(&mut self, destination: &str) -> String {
        let Some(index) = self
            .goals
            .iter()
            .position(|g| g.destination == destination && !g.completed)
        else {
            let err = AgentError::NoActiveGoal(destination.to_string());
            debug!(%err, "no research goal");
            return format!("❌ {}", err);
        };

        self.display.say(&format!(
            "📋 Compiling comprehensive research report for {}...",
            destination
        ));

        let goal = self.goals[index].clone();
        let month = extract_month(&goal.dates);
        let weather = self.research_weather(destination, month);
        let attractions = self.research_attractions(destination, &goal.interests);
        let budget = self.budget_insights(destination, goal.budget_type);

        let report = self.detailed_report(destination, &weather, &attractions, &budget, &goal);

        let goal = &mut self.goals[index];
        goal.completed = true;
        goal.completed_at = Some(Local::now());

        self.research_data.insert(
            destination.to_string(),
            ResearchRecord {
                weather,
                attractions,
                budget,
                goal: goal.clone(),
            },
        );

        info!(agent = %self.name, destination, "research report compiled");
        self.display
            .say(&format!("✅ Research completed for {}!", destination));
        report
    }

    fn detailed_report(
        &self,
        destination: &str,
        weather: &WeatherReport,
        attractions: &[AttractionScore],
        budget: &BudgetInsights,
        goal: &ResearchGoal,
    ) -> String {
        let mut report = format!(
            "\n🌍 COMPREHENSIVE TRAVEL RESEARCH REPORT\n{rule}\n\n\
             📍 DESTINATION: {}\n📅 TRAVEL DATES: {}\n🎯 YOUR INTERESTS: {}\n💰 BUDGET CATEGORY: {}\n\n\
             🌤️ WEATHER FORECAST & PACKING\n{section}\n\
             🌡️ Temperature: {}\n☀️ Conditions: {}\n🌧️ Rain Probability: {}\n\n\
             🎒 PACKING ESSENTIALS:\n   {}\n\n\
             🏛️ TOP ATTRACTIONS FOR YOU\n{section}\n",
            destination,
            goal.dates,
            goal.interests.join(", "),
            goal.budget_type.title(),
            weather.temperature,
            weather.description,
            weather.rain_probability,
            weather.packing_advice,
            rule = REPORT_RULE,
            section = SECTION_RULE,
        );

        for (i, attraction) in attractions.iter().enumerate() {
            let icon = if attraction.recommended { "🎯" } else { "📍" };
            report.push_str(&format!("   {} {}. {}\n", icon, i + 1, attraction.name));
            report.push_str(&format!("      └─ Best for: {}\n", attraction.interest_match));
        }

        report.push_str(&format!(
            "\n💰 BUDGET BREAKDOWN (Daily)\n{section}\n💵 Total Daily Budget: ${:.0}\n\n\
             \u{20}  🏨 Accommodation: ${:.0} (40%)\n\
             \u{20}  🍽️ Food & Dining: ${:.0} (30%)\n\
             \u{20}  🎭 Activities: ${:.0} (20%)\n\
             \u{20}  🚇 Transport: ${:.0} (10%)\n\n💡 MONEY-SAVING TIPS:\n",
            budget.daily_budget,
            budget.breakdown.accommodation,
            budget.breakdown.food,
            budget.breakdown.activities,
            budget.breakdown.transport,
            section = SECTION_RULE,
        ));
        for tip in &budget.money_saving_tips {
            report.push_str(&format!("   • {}\n", tip));
        }

        if !budget.splurge_recommendations.is_empty() {
            report.push_str("\n✨ LUXURY EXPERIENCES:\n");
            for splurge in &budget.splurge_recommendations {
                report.push_str(&format!("   • {}\n", splurge));
            }
        }

        if let Some(profile) = knowledge::lookup(destination) {
            report.push_str(&format!("\n🏛️ LOCAL INSIDER TIPS\n{}\n", SECTION_RULE));
            for tip in profile.local_tips {
                report.push_str(&format!("   💡 {}\n", tip));
            }
        }

        report.push_str(&format!(
            "\n{}\n✅ Research completed by {}\n📅 Generated on: {}\n",
            REPORT_RULE,
            self.name,
            Local::now().format("%Y-%m-%d %H:%M")
        ));
        report
    }

    pub fn goals(&self) -> &[ResearchGoal] {
        &self.goals
    }

    /// Records of compiled reports, keyed by destination
    pub fn research_data(&self) -> &BTreeMap<String, ResearchRecord> {
        &self.research_data
    }

    pub fn status_report(&self) -> String {
        let completed = self.goals.iter().filter(|g| g.completed).count();
        let mut status = format!(
            "\n📊 RESEARCH AGENT STATUS\n{}\n\n🎯 Research Goals: {}/{} completed\n📚 Destinations in Knowledge Base: {}\n💾 Research Reports Generated: {}\n\nGOALS OVERVIEW:\n",
            "━".repeat(51),
            completed,
            self.goals.len(),
            knowledge::destinations().len(),
            self.research_data.len()
        );
        for goal in &self.goals {
            let icon = if goal.completed { "✅" } else { "🔄" };
            status.push_str(&format!("   {} {} - {}\n", icon, goal.destination, goal.dates));
        }
        status
    }
}

/// Packing list for a month's weather
pub fn packing_advice(weather: &MonthlyWeather) -> String {
    let temp = weather.temp;
    let mut advice = if temp.contains("30") || weather.description.to_lowercase().contains("hot") {
        vec!["Light, breathable clothing", "Sun hat and sunscreen", "Comfortable walking shoes"]
    } else if temp.contains("15") && !temp.contains("25") {
        vec!["Layered clothing", "Light jacket or cardigan", "Comfortable walking shoes"]
    } else {
        vec!["Comfortable layers", "Light jacket", "Good walking shoes"]
    };

    if matches!(weather.rain.to_lowercase().as_str(), "moderate" | "high") {
        advice.push("Compact umbrella or rain jacket");
    }
    advice.join(", ")
}

/// Base score plus a bonus per interest keyword found in the name, capped at 1.0
pub fn score_attraction(attraction: &str, interests: &[&str]) -> f64 {
    let name = attraction.to_lowercase();
    let hits = interests
        .iter()
        .flat_map(|interest| knowledge::interest_keywords(&interest.to_lowercase()).iter())
        .filter(|keyword| name.contains(*keyword))
        .count();

    (BASE_ATTRACTION_SCORE + KEYWORD_BONUS * hits as f64).min(1.0)
}

/// Primary interest category an attraction belongs to
pub fn interest_match(attraction: &str) -> &'static str {
    let name = attraction.to_lowercase();
    let any = |words: &[&str]| words.iter().any(|w| name.contains(w));

    if any(&["museum", "art", "louvre", "vatican"]) {
        "art & culture"
    } else if any(&["colosseum", "forum", "pantheon", "notre-dame"]) {
        "history"
    } else if any(&["eiffel", "sagrada", "arc", "casa"]) {
        "architecture"
    } else if any(&["park", "garden", "güell"]) {
        "nature"
    } else {
        "general interest"
    }
}

/// First month named (in full or by its three-letter prefix) in `dates`, June if none
pub fn extract_month(dates: &str) -> &'static str {
    MONTHS
        .iter()
        .find(|month| dates.contains(*month) || dates.contains(&month[..3]))
        .copied()
        .unwrap_or("June")
}

/// Two reports (Rome mid-range, Paris luxury) and the agent status
pub fn run_demo(display: DisplayMode) -> TripResearchAgent {
    display.say("🚀 Trip Research Agent Demonstration\n");
    let mut researcher = TripResearchAgent::new("TravelGuru", display.clone());

    researcher.set_research_goal("Rome", "June 15-29, 2024", &["history", "art", "food"], BudgetTier::MidRange);
    researcher.set_research_goal(
        "Paris",
        "July 1-7, 2024",
        &["art", "culture", "architecture"],
        BudgetTier::Luxury,
    );

    display.say(&format!("\n{}", "=".repeat(60)));
    display.heading("GENERATING RESEARCH REPORTS...");
    display.rule('=', 60);

    let rome = researcher.compile_research_report("Rome");
    display.say(&rome);
    display.say(&format!("\n{}\n", "=".repeat(60)));

    let paris = researcher.compile_research_report("Paris");
    display.say(&paris);

    display.say(&format!("\n{}", researcher.status_report()));
    researcher
}
