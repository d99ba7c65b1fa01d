//! Export functionality
//!
//! JSON export, the printable report, and shareable links. All three refuse
//! an empty budget.

pub mod json;
pub mod report;
pub mod share;

pub use json::BudgetExport;
pub use report::BudgetReport;
pub use share::{decode_share_param, encode_share_url, SharePayload};
