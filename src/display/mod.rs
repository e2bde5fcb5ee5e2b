//! Display formatting for terminal output
//!
//! Provides utilities for formatting the ledger, the dashboard, and planner
//! results for terminal display.

pub mod dashboard;
pub mod planner;
pub mod record;

pub use dashboard::format_dashboard;
pub use planner::{format_budget_plan, format_household_plan};
pub use record::format_ledger_table;
