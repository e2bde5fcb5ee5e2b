//! Expense record CLI commands
//!
//! Implements the add and list commands: one full load → append → save
//! cycle per submission, with validation at the input boundary.

use chrono::NaiveDate;

use crate::display::format_ledger_table;
use crate::error::TallyResult;
use crate::models::{Record, DATE_FORMAT};
use crate::storage::CsvStore;

/// Add a new expense record
///
/// The submitted fields are validated before the ledger is touched; a
/// validation failure leaves the persisted ledger unchanged.
pub fn handle_add(
    store: &CsvStore,
    date: Option<String>,
    category: String,
    amount: String,
    notes: Option<String>,
    today: NaiveDate,
) -> TallyResult<()> {
    let date = date.unwrap_or_else(|| today.format(DATE_FORMAT).to_string());
    let record = Record::parse(&date, &category, &amount, notes.as_deref().unwrap_or(""))?;

    let mut ledger = store.load()?;
    ledger.append(record.clone());
    store.save(&ledger)?;

    println!("Expense added: {}", record);
    Ok(())
}

/// List ledger records, newest first
pub fn handle_list(store: &CsvStore, limit: Option<usize>) -> TallyResult<()> {
    let ledger = store.load()?;
    print!("{}", format_ledger_table(&ledger, limit));
    Ok(())
}
