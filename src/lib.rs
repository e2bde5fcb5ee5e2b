//! Tally - Terminal expense ledger dashboard and household budget planner
//!
//! This library provides the core functionality for the Tally expense
//! tracker: a CSV-backed append-only ledger, pure aggregation over it
//! (total spend, spend by category, spend by date), and the household
//! budget planner computations.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, categories, records, the ledger)
//! - `storage`: CSV ledger store with atomic overwrites
//! - `reports`: Dashboard aggregation and planner computations
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use tally_cli::config::{paths::TallyPaths, settings::Settings};
//!
//! let paths = TallyPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::TallyError;
