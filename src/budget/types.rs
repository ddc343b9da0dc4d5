//! Budget system type definitions

use crate::errors::AgentError;
use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Spending category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Accommodation,
    Food,
    Activities,
    Transport,
    Shopping,
}

impl Category {
    /// All categories in declaration (and report) order
    pub const ALL: [Category; 5] = [
        Category::Accommodation,
        Category::Food,
        Category::Activities,
        Category::Transport,
        Category::Shopping,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Accommodation => "accommodation",
            Category::Food => "food",
            Category::Activities => "activities",
            Category::Transport => "transport",
            Category::Shopping => "shopping",
        }
    }

    /// Capitalised name for reports
    pub fn title(&self) -> &'static str {
        match self {
            Category::Accommodation => "Accommodation",
            Category::Food => "Food",
            Category::Activities => "Activities",
            Category::Transport => "Transport",
            Category::Shopping => "Shopping",
        }
    }

    /// Default share of the total budget
    pub fn default_pct(&self) -> f64 {
        match self {
            Category::Accommodation => 0.35,
            Category::Food => 0.25,
            Category::Activities => 0.20,
            Category::Transport => 0.15,
            Category::Shopping => 0.05,
        }
    }

    /// Declared importance, used when looking for money to move
    pub fn priority(&self) -> CategoryPriority {
        match self {
            Category::Accommodation | Category::Food | Category::Transport => CategoryPriority::High,
            Category::Activities => CategoryPriority::Medium,
            Category::Shopping => CategoryPriority::Low,
        }
    }

    /// Comma-separated list of valid category names
    pub fn valid_names() -> String {
        Category::ALL.iter().map(|c| c.as_str()).collect::<Vec<_>>().join(", ")
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = AgentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| AgentError::UnknownCategory {
                category: s.to_string(),
                valid: Category::valid_names(),
            })
    }
}

/// Declared category importance; lower ranks are cut first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryPriority {
    Low,
    Medium,
    High,
}

/// Named traveller priority that nudges one category's share
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityTag {
    LuxuryAccommodation,
    FoodExperience,
    ActivityFocused,
    ShoppingTrip,
    BudgetConscious,
    BackpackerStyle,
    CulturalImmersion,
    AdventureTravel,
    RomanticGetaway,
}

impl PriorityTag {
    /// Category affected and the share of the total budget added (or removed)
    pub fn adjustment(&self) -> (Category, f64) {
        match self {
            PriorityTag::LuxuryAccommodation => (Category::Accommodation, 0.15),
            PriorityTag::FoodExperience => (Category::Food, 0.12),
            PriorityTag::ActivityFocused => (Category::Activities, 0.15),
            PriorityTag::ShoppingTrip => (Category::Shopping, 0.08),
            PriorityTag::BudgetConscious => (Category::Food, -0.08),
            PriorityTag::BackpackerStyle => (Category::Accommodation, -0.15),
            PriorityTag::CulturalImmersion => (Category::Activities, 0.10),
            PriorityTag::AdventureTravel => (Category::Activities, 0.12),
            PriorityTag::RomanticGetaway => (Category::Food, 0.08),
        }
    }
}

impl FromStr for PriorityTag {
    type Err = AgentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = match s {
            "luxury_accommodation" => PriorityTag::LuxuryAccommodation,
            "food_experience" => PriorityTag::FoodExperience,
            "activity_focused" => PriorityTag::ActivityFocused,
            "shopping_trip" => PriorityTag::ShoppingTrip,
            "budget_conscious" => PriorityTag::BudgetConscious,
            "backpacker_style" => PriorityTag::BackpackerStyle,
            "cultural_immersion" => PriorityTag::CulturalImmersion,
            "adventure_travel" => PriorityTag::AdventureTravel,
            "romantic_getaway" => PriorityTag::RomanticGetaway,
            other => return Err(AgentError::Validation(format!("unknown priority tag: {}", other))),
        };
        Ok(tag)
    }
}

/// Running state of one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetCategory {
    pub category: Category,
    pub default_pct: f64,
    pub allocated: f64,
    pub spent: f64,
    pub priority: CategoryPriority,
}

impl BudgetCategory {
    pub fn remaining(&self) -> f64 {
        self.allocated - self.spent
    }

    /// Percentage of the allocation already spent (0 when nothing allocated)
    pub fn spent_pct(&self) -> f64 {
        if self.allocated > 0.0 {
            self.spent / self.allocated * 100.0
        } else {
            0.0
        }
    }

    pub fn status(&self) -> CategoryStatus {
        if self.remaining() < 0.0 {
            CategoryStatus::OverBudget
        } else if self.spent_pct() < 80.0 {
            CategoryStatus::OnTrack
        } else {
            CategoryStatus::AlmostSpent
        }
    }
}

/// Health of a single category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryStatus {
    OnTrack,
    AlmostSpent,
    OverBudget,
}

impl CategoryStatus {
    pub fn emoji(&self) -> &'static str {
        match self {
            CategoryStatus::OnTrack => "✅",
            CategoryStatus::AlmostSpent => "⚠️",
            CategoryStatus::OverBudget => "🚨",
        }
    }
}

/// A recorded expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: usize,
    pub category: Category,
    pub amount: f64,
    pub description: String,
    pub date: NaiveDate,
    pub timestamp: DateTime<Local>,
}

/// Budget alert raised while tracking expenses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BudgetAlert {
    /// Category spending exceeded its allocation
    OverBudget {
        category: Category,
        amount: f64,
        message: String,
    },
}

impl BudgetAlert {
    pub fn message(&self) -> &str {
        match self {
            BudgetAlert::OverBudget { message, .. } => message,
        }
    }
}

/// Per-category line of a spending analysis
#[derive(Debug, Clone, Serialize)]
pub struct CategoryAnalysis {
    pub category: Category,
    pub allocated: f64,
    pub spent: f64,
    pub remaining: f64,
    pub spent_percentage: f64,
    pub status: CategoryStatus,
}

/// Whether average daily spending runs above the daily target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpendingPace {
    Ahead,
    Behind,
}

/// Snapshot of spending against the plan
#[derive(Debug, Clone, Serialize)]
pub struct SpendingAnalysis {
    pub total_budget: f64,
    pub total_spent: f64,
    pub remaining_budget: f64,
    pub days_remaining: u32,
    pub daily_budget_target: f64,
    pub avg_daily_spending: f64,
    pub spending_pace: SpendingPace,
    pub category_breakdown: Vec<CategoryAnalysis>,
    pub daily_spending: BTreeMap<NaiveDate, f64>,
    pub alerts_count: usize,
}

/// Projected end-of-trip outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetOutcome {
    OnTrack,
    SlightOverspend,
    SignificantOverspend,
}

impl BudgetOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            BudgetOutcome::OnTrack => "You're on track to stay within budget! 🎯",
            BudgetOutcome::SlightOverspend => "You might slightly exceed budget, but manageable. ⚠️",
            BudgetOutcome::SignificantOverspend => {
                "Significant budget overspend predicted. Consider adjustments! 🚨"
            }
        }
    }
}

/// Budget prediction from the current spending pattern
#[derive(Debug, Clone, Serialize)]
pub struct BudgetPrediction {
    pub outcome: BudgetOutcome,
    pub projected_total: f64,
    pub projected_overspend: f64,
    pub daily_adjustment_needed: f64,
    /// 0-100, grows with the number of days that have spending
    pub confidence: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_percentages_sum_to_one() {
        let total: f64 = Category::ALL.iter().map(|c| c.default_pct()).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
        let err = "spa".parse::<Category>().unwrap_err();
        assert!(err.to_string().contains("Unknown category: spa"));
        assert!(err.to_string().contains("accommodation, food, activities, transport, shopping"));
    }

    #[test]
    fn test_priority_order() {
        assert!(CategoryPriority::Low < CategoryPriority::Medium);
        assert!(CategoryPriority::Medium < CategoryPriority::High);
        assert_eq!(Category::Shopping.priority(), CategoryPriority::Low);
    }

    #[test]
    fn test_priority_tag_parse() {
        let tag: PriorityTag = "backpacker_style".parse().unwrap();
        assert_eq!(tag.adjustment(), (Category::Accommodation, -0.15));
        assert!("sightseeing".parse::<PriorityTag>().is_err());
    }

    #[test]
    fn test_category_status() {
        let mut cat = BudgetCategory {
            category: Category::Food,
            default_pct: 0.25,
            allocated: 100.0,
            spent: 50.0,
            priority: CategoryPriority::High,
        };
        assert_eq!(cat.status(), CategoryStatus::OnTrack);
        cat.spent = 85.0;
        assert_eq!(cat.status(), CategoryStatus::AlmostSpent);
        cat.spent = 120.0;
        assert_eq!(cat.status(), CategoryStatus::OverBudget);
    }
}
