//! BalanceBeam - personal budget planning from the terminal
//!
//! This library provides the core functionality for BalanceBeam: a budget is
//! a list of income/expense line items with derived totals, a savings goal,
//! and chart display preferences. Budgets can be saved as named favorites,
//! imported from CSV text, and exported as JSON, a printable report, or a
//! shareable encoded link.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (items, snapshots, totals)
//! - `storage`: Key-value persistence (file-backed with atomic writes,
//!   in-memory for tests) and the favorites store
//! - `services`: The live editing session and the CSV import parser
//! - `export`: JSON export, printable report, share links
//! - `display`: Terminal output formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use balancebeam::services::BudgetSession;
//! use balancebeam::models::ItemKind;
//!
//! let mut session = BudgetSession::default();
//! session.add_item("Salary", "5000", ItemKind::Income)?;
//! let totals = session.totals();
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{BalanceBeamError, BalanceBeamResult};
