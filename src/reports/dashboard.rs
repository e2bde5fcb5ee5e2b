//! Ledger dashboard aggregation
//!
//! Pure functions over an in-memory ledger: total spend, spend grouped by
//! category, and spend grouped by date (ascending, for a monotonic
//! time-series rendering). No I/O, no mutation of the input. Aggregation
//! cannot fail on a well-formed ledger; malformed fields are rejected at
//! record construction, never here.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{Category, Ledger, Money};

/// Sum of all record amounts; an empty ledger sums to zero
pub fn total_spend(ledger: &Ledger) -> Money {
    ledger.iter().map(|r| r.amount).sum()
}

/// Spend grouped by category, ordered by category key
///
/// Categories with no records are absent, not zero-valued.
pub fn by_category(ledger: &Ledger) -> BTreeMap<Category, Money> {
    let mut totals = BTreeMap::new();
    for record in ledger {
        *totals.entry(record.category).or_insert_with(Money::zero) += record.amount;
    }
    totals
}

/// Spend grouped by date, ordered ascending by date
pub fn by_date(ledger: &Ledger) -> BTreeMap<NaiveDate, Money> {
    let mut totals = BTreeMap::new();
    for record in ledger {
        *totals.entry(record.date).or_insert_with(Money::zero) += record.amount;
    }
    totals
}

/// Spend for one category, with share of the total
#[derive(Debug, Clone)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Money,
    pub record_count: usize,
    /// Percentage of total spend
    pub percentage: f64,
}

/// Spend for one date
#[derive(Debug, Clone)]
pub struct DateTotal {
    pub date: NaiveDate,
    pub total: Money,
}

/// Aggregated dashboard data for a non-empty ledger
#[derive(Debug, Clone)]
pub struct DashboardReport {
    /// Total spend across all records
    pub total_spend: Money,
    /// Number of records in the ledger
    pub record_count: usize,
    /// Spend by category, ordered by category key
    pub by_category: Vec<CategoryTotal>,
    /// Spend by date, ascending
    pub by_date: Vec<DateTotal>,
}

/// Dashboard state handed to the presentation layer
///
/// An empty ledger is a distinct state, not a report full of zeroes: the
/// consumer must render an explicit empty-state message rather than an
/// empty chart.
#[derive(Debug, Clone)]
pub enum Dashboard {
    /// No records yet
    Empty,
    /// Aggregates over at least one record
    Ready(DashboardReport),
}

impl Dashboard {
    /// Aggregate the ledger into dashboard data
    pub fn generate(ledger: &Ledger) -> Self {
        if ledger.is_empty() {
            return Self::Empty;
        }

        let total = total_spend(ledger);

        let mut counts: BTreeMap<Category, usize> = BTreeMap::new();
        for record in ledger {
            *counts.entry(record.category).or_insert(0) += 1;
        }

        let by_category = by_category(ledger)
            .into_iter()
            .map(|(category, cat_total)| CategoryTotal {
                category,
                total: cat_total,
                record_count: counts.get(&category).copied().unwrap_or(0),
                percentage: cat_total.percent_of(total),
            })
            .collect();

        let by_date = by_date(ledger)
            .into_iter()
            .map(|(date, date_total)| DateTotal {
                date,
                total: date_total,
            })
            .collect();

        Self::Ready(DashboardReport {
            total_spend: total,
            record_count: ledger.len(),
            by_category,
            by_date,
        })
    }

    /// Check for the empty state
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}
