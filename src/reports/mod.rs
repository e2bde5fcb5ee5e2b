//! Reports module for Tally
//!
//! Provides the ledger dashboard aggregation and the household budget
//! planner computations.

pub mod dashboard;
pub mod planner;

pub use dashboard::{by_category, by_date, total_spend, CategoryTotal, Dashboard, DashboardReport, DateTotal};
pub use planner::{Allocation, BudgetPlan, ExpenseBucket, HouseholdPlan, PlannerProfile, ALLOCATION_RATIOS};
