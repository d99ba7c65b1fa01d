//! JSON export
//!
//! Exports a budget snapshot together with its computed totals: the snapshot
//! object with a `totals` object alongside its own fields.

use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{BalanceBeamError, BalanceBeamResult};
use crate::models::{BudgetSnapshot, Totals};

/// A snapshot plus its totals, in the export wire layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetExport {
    #[serde(flatten)]
    pub snapshot: BudgetSnapshot,
    pub totals: Totals,
}

impl BudgetExport {
    /// Build an export; refused when the snapshot has no items
    pub fn new(snapshot: BudgetSnapshot, totals: Totals) -> BalanceBeamResult<Self> {
        if snapshot.items.is_empty() {
            return Err(BalanceBeamError::EmptyBudget);
        }
        Ok(Self { snapshot, totals })
    }

    /// Write the export as pretty-printed JSON
    pub fn write_json<W: Write>(&self, writer: &mut W) -> BalanceBeamResult<()> {
        serde_json::to_writer_pretty(&mut *writer, self)?;
        writer
            .flush()
            .map_err(|e| BalanceBeamError::Export(format!("Failed to write export: {}", e)))?;
        Ok(())
    }
}
