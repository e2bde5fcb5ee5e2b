//! Expense record model
//!
//! A record is one dated expense entry. Field constraints are enforced at
//! construction; a record is immutable once appended to the ledger.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{TallyError, TallyResult};

use super::category::Category;
use super::money::Money;

/// Date format used for parsing and serializing record dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One expense entry in the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Calendar date of the expense (no time-of-day component)
    pub date: NaiveDate,

    /// Expense category
    pub category: Category,

    /// Non-negative amount
    pub amount: Money,

    /// Optional free-text notes, no semantic meaning to aggregation
    #[serde(default)]
    pub notes: String,
}

impl Record {
    /// Create a new record, enforcing the non-negative amount invariant
    pub fn new(
        date: NaiveDate,
        category: Category,
        amount: Money,
        notes: impl Into<String>,
    ) -> TallyResult<Self> {
        if amount.is_negative() {
            return Err(TallyError::validation(
                "amount",
                format!("must not be negative (got {})", amount),
            ));
        }

        Ok(Self {
            date,
            category,
            amount,
            notes: notes.into(),
        })
    }

    /// Parse a record from raw textual fields
    ///
    /// This is the input boundary: each failure names the offending field.
    /// Downstream aggregation never re-validates.
    pub fn parse(date: &str, category: &str, amount: &str, notes: &str) -> TallyResult<Self> {
        let date = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT)
            .map_err(|_| TallyError::validation("date", format!("'{}' is not a valid date (expected YYYY-MM-DD)", date.trim())))?;

        let category = Category::from_str(category)
            .map_err(|e| TallyError::validation("category", e.to_string()))?;

        let amount = Money::parse(amount)
            .map_err(|_| TallyError::validation("amount", format!("'{}' is not a valid amount", amount.trim())))?;

        Self::new(date, category, amount, notes)
    }

    /// Format the date for storage and display
    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    /// Format the amount as a plain two-decimal string (no symbol)
    pub fn amount_string(&self) -> String {
        format!("{}.{:02}", self.amount.dollars(), self.amount.cents_part())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date_string(), self.category, self.amount)
    }
}
