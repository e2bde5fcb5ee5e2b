//! CSV ledger store
//!
//! Persists the ledger as a flat CSV file with a fixed header row. The file
//! path is an explicit constructor argument; there is no ambient path state.
//! A missing file is an empty ledger, not an error. Saves are full atomic
//! overwrites: last full write wins.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

use crate::error::{TallyError, TallyResult};
use crate::models::{Ledger, Record};

use super::file_io::write_atomic;

/// Fixed header row of the ledger file
pub const LEDGER_HEADER: [&str; 4] = ["Date", "Category", "Amount", "Notes"];

/// CSV-backed ledger store
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    /// Create a store for the given ledger file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The ledger file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full ledger from disk
    ///
    /// A missing file yields an empty ledger. An existing file with a wrong
    /// header or an unparseable row is a storage error.
    pub fn load(&self) -> TallyResult<Ledger> {
        if !self.path.exists() {
            return Ok(Ledger::new());
        }

        let file = File::open(&self.path).map_err(|e| {
            TallyError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
        })?;

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(file);

        let headers = reader.headers().map_err(|e| {
            TallyError::Storage(format!("Failed to read {}: {}", self.path.display(), e))
        })?;
        if headers != LEDGER_HEADER.as_slice() {
            return Err(TallyError::Storage(format!(
                "Header mismatch in {}: expected {:?}, found {:?}",
                self.path.display(),
                LEDGER_HEADER.join(","),
                headers.iter().collect::<Vec<_>>().join(",")
            )));
        }

        let mut ledger = Ledger::new();
        for (index, row) in reader.records().enumerate() {
            // Header is line 1, first data row is line 2
            let line = index + 2;
            let row = row.map_err(|e| {
                TallyError::Storage(format!(
                    "Failed to read {} line {}: {}",
                    self.path.display(),
                    line,
                    e
                ))
            })?;

            let record = Record::parse(
                row.get(0).unwrap_or(""),
                row.get(1).unwrap_or(""),
                row.get(2).unwrap_or(""),
                row.get(3).unwrap_or(""),
            )
            .map_err(|e| {
                TallyError::Storage(format!(
                    "Failed to parse {} line {}: {}",
                    self.path.display(),
                    line,
                    e
                ))
            })?;

            ledger.append(record);
        }

        Ok(ledger)
    }

    /// Save the full ledger to disk, atomically overwriting the file
    pub fn save(&self, ledger: &Ledger) -> TallyResult<()> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        writer.write_record(LEDGER_HEADER)?;
        for record in ledger {
            writer.write_record(&[
                record.date_string(),
                record.category.to_string(),
                record.amount_string(),
                record.notes.clone(),
            ])?;
        }

        let data = writer
            .into_inner()
            .map_err(|e| TallyError::Storage(format!("Failed to finish ledger write: {}", e)))?;

        write_atomic(&self.path, &data)
    }

    /// Overwrite the store with an empty ledger (header only)
    pub fn clear(&self) -> TallyResult<()> {
        self.save(&Ledger::new())
    }

    /// Move a non-empty ledger file aside to a month-stamped archive and
    /// leave an empty ledger behind
    ///
    /// Returns the archive path, or `None` when there was nothing to archive.
    pub fn archive(&self) -> TallyResult<Option<PathBuf>> {
        self.archive_for_date(Local::now().date_naive())
    }

    /// Archive with an explicit "today", naming the archive after its month
    pub fn archive_for_date(&self, today: NaiveDate) -> TallyResult<Option<PathBuf>> {
        // Header-only files count as empty
        if self.load()?.is_empty() {
            return Ok(None);
        }

        let archive_path = self.archive_path_for(today);
        fs::rename(&self.path, &archive_path).map_err(|e| {
            TallyError::Storage(format!(
                "Failed to archive {} to {}: {}",
                self.path.display(),
                archive_path.display(),
                e
            ))
        })?;

        self.clear()?;
        Ok(Some(archive_path))
    }

    /// Archive file name for the month of `date`, alongside the ledger file
    fn archive_path_for(&self, date: NaiveDate) -> PathBuf {
        let stem = self
            .path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("expenses");
        let name = format!("{}_{}.csv", stem, date.format("%Y_%m"));
        match self.path.parent() {
            Some(parent) => parent.join(name),
            None => PathBuf::from(name),
        }
    }
}
