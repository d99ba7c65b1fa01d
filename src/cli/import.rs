//! CSV import CLI command

use std::fs;
use std::path::Path;

use crate::error::{BalanceBeamError, BalanceBeamResult};
use crate::services::{parse_budget_csv, BudgetSession};
use crate::storage::KeyValueStore;

/// Import budget items from a CSV file, replacing the current item list
///
/// The import is atomic: any bad line aborts it and leaves the session
/// untouched.
pub fn handle_import<S: KeyValueStore>(store: &S, path: &Path) -> BalanceBeamResult<()> {
    let text = fs::read_to_string(path).map_err(|e| {
        BalanceBeamError::Io(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let items = parse_budget_csv(&text)?;
    if items.is_empty() {
        return Err(BalanceBeamError::Validation(
            "CSV file contains no budget items".into(),
        ));
    }

    let count = items.len();
    let mut session = BudgetSession::load(store)?;
    session.replace_items(items);
    session.save(store)?;

    println!("CSV Imported: {} items imported successfully", count);
    Ok(())
}
