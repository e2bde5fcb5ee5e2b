//! Core data models for Tally
//!
//! This module contains the data structures that represent the expense
//! tracking domain: money amounts, categories, records, and the ledger.

pub mod category;
pub mod ledger;
pub mod money;
pub mod record;

pub use category::{Category, CategoryParseError};
pub use ledger::Ledger;
pub use money::{Money, MoneyParseError};
pub use record::{Record, DATE_FORMAT};
