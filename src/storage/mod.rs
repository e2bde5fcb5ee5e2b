//! Storage layer for Tally
//!
//! Provides the CSV ledger store with atomic full-file overwrites and
//! automatic directory creation.

pub mod csv_store;
pub mod file_io;

pub use csv_store::{CsvStore, LEDGER_HEADER};
pub use file_io::write_atomic;
