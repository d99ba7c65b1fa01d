//! Business logic layer
//!
//! The editing session that user intents mutate, and the CSV import parser
//! that feeds it.

pub mod import;
pub mod session;

pub use import::{parse_budget_csv, CsvParseError, CsvParseReason};
pub use session::{BudgetSession, DEFAULT_COLOR_THEME};
