//! Travel budget planning
//! Category allocation, priority balancing, expense tracking and projection

pub mod manager;
pub mod types;

pub use manager::{allocation_lines, run_demo, Allocation, BudgetPlanner};
pub use types::{
    BudgetAlert, BudgetCategory, BudgetOutcome, BudgetPrediction, Category, CategoryPriority,
    CategoryStatus, Expense, PriorityTag, SpendingAnalysis, SpendingPace,
};
