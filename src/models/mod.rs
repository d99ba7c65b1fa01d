//! Core data models for BalanceBeam
//!
//! This module contains the data structures that represent the budgeting
//! domain: budget items, saved snapshots, and derived totals.

pub mod ids;
pub mod item;
pub mod snapshot;
pub mod totals;

pub use ids::{ItemId, SnapshotId};
pub use item::{validate_item, BudgetItem, FieldError, FieldErrors, ItemKind, ValidatedItem};
pub use snapshot::{BudgetSnapshot, ChartType};
pub use totals::Totals;
