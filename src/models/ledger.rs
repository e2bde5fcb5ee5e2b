//! Ledger model
//!
//! The ledger is the full ordered sequence of expense records. It only ever
//! grows: records are appended, never edited or deleted in place. Insertion
//! order is preserved through storage round-trips.

use super::record::Record;

/// An append-only ordered sequence of expense records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    records: Vec<Record>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record
    pub fn append(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the ledger has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Records as a slice, insertion order
    pub fn records(&self) -> &[Record] {
        &self.records
    }
}

impl FromIterator<Record> for Ledger {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
