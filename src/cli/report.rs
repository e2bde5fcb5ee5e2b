//! Dashboard CLI command
//!
//! Renders the aggregate expense dashboard for the current ledger.

use crate::display::format_dashboard;
use crate::error::TallyResult;
use crate::reports::Dashboard;
use crate::storage::CsvStore;

/// Show the expense dashboard
pub fn handle_dashboard(store: &CsvStore) -> TallyResult<()> {
    let ledger = store.load()?;
    let dashboard = Dashboard::generate(&ledger);
    print!("{}", format_dashboard(&dashboard));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_dashboard_on_missing_ledger() {
        let temp_dir = TempDir::new().unwrap();
        let store = CsvStore::new(temp_dir.path().join("expenses.csv"));

        // Missing file is an empty ledger, not an error
        handle_dashboard(&store).unwrap();
    }
}
