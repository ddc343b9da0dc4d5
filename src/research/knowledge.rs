//! Built-in destination knowledge base

use crate::errors::AgentError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Typical weather for one month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyWeather {
    pub month: &'static str,
    pub temp: &'static str,
    pub description: &'static str,
    pub rain: &'static str,
}

/// Daily budget per traveller tier, in dollars
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetRanges {
    pub budget: f64,
    pub mid_range: f64,
    pub luxury: f64,
}

impl BudgetRanges {
    pub fn daily(&self, tier: BudgetTier) -> f64 {
        match tier {
            BudgetTier::Budget => self.budget,
            BudgetTier::MidRange => self.mid_range,
            BudgetTier::Luxury => self.luxury,
        }
    }
}

/// Ranges used for destinations outside the knowledge base
pub const DEFAULT_BUDGET_RANGES: BudgetRanges = BudgetRanges {
    budget: 50.0,
    mid_range: 100.0,
    luxury: 200.0,
};

pub const DEFAULT_ATTRACTIONS: &[&str] = &["Local museums", "City center", "Parks"];

pub const DEFAULT_LOCAL_TIPS: &[&str] = &["Research local customs", "Book accommodations in advance"];

pub const DEFAULT_SPLURGES: &[&str] = &["Premium local experiences", "Fine dining", "Private guided tours"];

/// Everything known about one destination
#[derive(Debug)]
pub struct DestinationProfile {
    pub name: &'static str,
    pub attractions: &'static [&'static str],
    pub weather: &'static [MonthlyWeather],
    pub local_tips: &'static [&'static str],
    pub budget_ranges: BudgetRanges,
    pub splurges: &'static [&'static str],
}

impl DestinationProfile {
    pub fn weather_for(&self, month: &str) -> Option<&MonthlyWeather> {
        self.weather.iter().find(|w| w.month == month)
    }
}

const fn month(
    month: &'static str,
    temp: &'static str,
    description: &'static str,
    rain: &'static str,
) -> MonthlyWeather {
    MonthlyWeather {
        month,
        temp,
        description,
        rain,
    }
}

static KNOWLEDGE_BASE: [DestinationProfile; 3] = [
    DestinationProfile {
        name: "Rome",
        attractions: &["Colosseum", "Vatican City", "Trevi Fountain", "Roman Forum", "Pantheon"],
        weather: &[
            month("June", "20-28°C", "Warm and pleasant", "Low"),
            month("July", "23-31°C", "Hot and sunny", "Very low"),
            month("August", "23-31°C", "Very hot", "Low"),
            month("September", "19-26°C", "Mild and comfortable", "Moderate"),
        ],
        local_tips: &[
            "Book attractions in advance to skip lines",
            "Dress modestly for Vatican visits",
            "Try authentic Roman pizza al taglio",
            "Walk early morning or evening when it's cooler",
        ],
        budget_ranges: BudgetRanges {
            budget: 60.0,
            mid_range: 120.0,
            luxury: 250.0,
        },
        splurges: &[
            "Private Vatican tour after hours",
            "Michelin-starred dining experience",
            "Private gladiator experience",
        ],
    },
    DestinationProfile {
        name: "Paris",
        attractions: &["Eiffel Tower", "Louvre Museum", "Notre-Dame", "Arc de Triomphe", "Montmartre"],
        weather: &[
            month("June", "15-22°C", "Mild and pleasant", "Moderate"),
            month("July", "17-25°C", "Warm", "Low"),
            month("August", "17-25°C", "Warm", "Low"),
            month("September", "14-21°C", "Cool and comfortable", "Moderate"),
        ],
        local_tips: &[
            "Learn basic French phrases",
            "Visit museums on first Sunday mornings for free entry",
            "Try croissants from local boulangeries",
            "Use the metro for efficient city travel",
        ],
        budget_ranges: BudgetRanges {
            budget: 70.0,
            mid_range: 140.0,
            luxury: 300.0,
        },
        splurges: &[
            "Private Louvre tour",
            "Seine river dinner cruise",
            "Champagne tasting in Champagne region",
        ],
    },
    DestinationProfile {
        name: "Barcelona",
        attractions: &["Sagrada Familia", "Park Güell", "Las Ramblas", "Gothic Quarter", "Casa Batlló"],
        weather: &[
            month("June", "20-26°C", "Perfect weather", "Low"),
            month("July", "23-29°C", "Warm and sunny", "Very low"),
            month("August", "24-29°C", "Hot", "Low"),
            month("September", "21-26°C", "Excellent weather", "Low"),
        ],
        local_tips: &[
            "Book Sagrada Familia tickets well in advance",
            "Enjoy tapas culture - eat small plates",
            "Siesta time is real - many shops close 2-5 PM",
            "Beach is easily accessible by metro",
        ],
        budget_ranges: BudgetRanges {
            budget: 50.0,
            mid_range: 100.0,
            luxury: 200.0,
        },
        splurges: &[
            "Private Gaudí architecture tour",
            "Flamenco dinner show",
            "Day trip to Montserrat monastery",
        ],
    },
];

/// All known destinations
pub fn destinations() -> &'static [DestinationProfile] {
    &KNOWLEDGE_BASE
}

/// Look a destination up by exact name
pub fn lookup(destination: &str) -> Option<&'static DestinationProfile> {
    KNOWLEDGE_BASE.iter().find(|d| d.name == destination)
}

/// Keywords that tie an attraction to an interest
pub fn interest_keywords(interest: &str) -> &'static [&'static str] {
    match interest {
        "history" => &["colosseum", "forum", "pantheon", "notre-dame", "gothic"],
        "art" => &["louvre", "vatican", "museum", "gallery"],
        "architecture" => &["sagrada", "eiffel", "pantheon", "arc", "casa"],
        "culture" => &["montmartre", "las ramblas", "vatican", "gothic quarter"],
        "food" => &["market", "quarter", "ramblas"],
        "nature" => &["park", "garden", "güell"],
        _ => &[],
    }
}

/// Traveller spending tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetTier {
    Budget,
    #[default]
    MidRange,
    Luxury,
}

impl BudgetTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetTier::Budget => "budget",
            BudgetTier::MidRange => "mid-range",
            BudgetTier::Luxury => "luxury",
        }
    }

    /// Capitalised name for reports
    pub fn title(&self) -> &'static str {
        match self {
            BudgetTier::Budget => "Budget",
            BudgetTier::MidRange => "Mid-Range",
            BudgetTier::Luxury => "Luxury",
        }
    }
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BudgetTier {
    type Err = AgentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "budget" => Ok(BudgetTier::Budget),
            "mid-range" | "mid_range" | "midrange" => Ok(BudgetTier::MidRange),
            "luxury" => Ok(BudgetTier::Luxury),
            other => Err(AgentError::InvalidParameter {
                name: "budget_type".to_string(),
                reason: format!("unknown budget tier '{}', use budget, mid-range or luxury", other),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("Barcelona").unwrap().attractions.len(), 5);
        assert!(lookup("Lisbon").is_none());
        assert_eq!(destinations().len(), 3);
    }

    #[test]
    fn test_weather_for_month() {
        let rome = lookup("Rome").unwrap();
        assert_eq!(rome.weather_for("July").unwrap().temp, "23-31°C");
        assert!(rome.weather_for("December").is_none());
    }

    #[test]
    fn test_budget_tier_parse() {
        assert_eq!("mid-range".parse::<BudgetTier>().unwrap(), BudgetTier::MidRange);
        assert_eq!("Luxury".parse::<BudgetTier>().unwrap(), BudgetTier::Luxury);
        assert!("platinum".parse::<BudgetTier>().is_err());
        assert_eq!(BudgetTier::MidRange.title(), "Mid-Range");
    }

    #[test]
    fn test_daily_budget_by_tier() {
        let paris = lookup("Paris").unwrap();
        assert_eq!(paris.budget_ranges.daily(BudgetTier::Luxury), 300.0);
        assert_eq!(DEFAULT_BUDGET_RANGES.daily(BudgetTier::Budget), 50.0);
    }
}
