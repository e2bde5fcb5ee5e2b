//! Ledger table display
//!
//! Renders the full ledger as a terminal table, newest records first.

use tabled::{Table, Tabled};

use crate::models::{Ledger, Record};

/// One row of the ledger table
#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Notes")]
    notes: String,
}

impl From<&Record> for RecordRow {
    fn from(record: &Record) -> Self {
        Self {
            date: record.date_string(),
            category: record.category.to_string(),
            amount: record.amount.to_string(),
            notes: record.notes.clone(),
        }
    }
}

/// Format the ledger as a table, newest records first
pub fn format_ledger_table(ledger: &Ledger, limit: Option<usize>) -> String {
    if ledger.is_empty() {
        return "No expenses yet. Add some with 'tally add'.\n".to_string();
    }

    let mut records: Vec<&Record> = ledger.iter().collect();
    records.sort_by(|a, b| b.date.cmp(&a.date));

    let rows: Vec<RecordRow> = records
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .map(RecordRow::from)
        .collect();

    let mut output = Table::new(rows).to_string();
    output.push('\n');
    output.push_str(&format!("{} record(s)\n", ledger.len()));
    output
}
