//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::TallyError;

/// Write bytes to a file atomically (write to temp, then rename)
///
/// This ensures that the file is either completely written or not modified
/// at all: a failed write never leaves a partial ledger on disk.
pub fn write_atomic<P: AsRef<Path>>(path: P, data: &[u8]) -> Result<(), TallyError> {
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            TallyError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Create temp file in same directory (important for atomic rename)
    let temp_path = path.with_extension("csv.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| TallyError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(data)
        .map_err(|e| TallyError::Storage(format!("Failed to write data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| TallyError::Storage(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| TallyError::Storage(format!("Failed to sync data: {}", e)))?;

    // Atomic rename
    fs::rename(&temp_path, path).map_err(|e| {
        // Try to clean up temp file if rename fails
        let _ = fs::remove_file(&temp_path);
        TallyError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
