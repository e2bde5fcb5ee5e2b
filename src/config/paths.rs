//! Path management for Tally
//!
//! Provides XDG-compliant path resolution for configuration and ledger data.
//!
//! ## Path Resolution Order
//!
//! 1. `TALLY_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/tally` or `~/.config/tally`
//! 3. Windows: `%APPDATA%\tally`

use std::path::PathBuf;

use crate::error::TallyError;

/// Manages all paths used by Tally
#[derive(Debug, Clone)]
pub struct TallyPaths {
    /// Base directory for all Tally data
    base_dir: PathBuf,
}

impl TallyPaths {
    /// Create a new TallyPaths instance
    ///
    /// Path resolution:
    /// 1. `TALLY_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/tally` or `~/.config/tally`
    /// 3. Windows: `%APPDATA%\tally`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TallyError> {
        let base_dir = if let Ok(custom) = std::env::var("TALLY_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create TallyPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/tally/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/tally/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the ledger file (data/expenses.csv)
    pub fn ledger_file(&self) -> PathBuf {
        self.data_dir().join("expenses.csv")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), TallyError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TallyError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| TallyError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, TallyError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME")
                .map_err(|_| TallyError::Config("Could not determine home directory".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("tally"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, TallyError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| TallyError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("tally"))
}
