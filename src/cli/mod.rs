//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the storage and report layers.

pub mod manage;
pub mod planner;
pub mod record;
pub mod report;

pub use manage::{handle_archive, handle_clear};
pub use planner::{handle_plan, PartnerArgs, PlanArgs};
pub use record::{handle_add, handle_list};
pub use report::handle_dashboard;
