//! Budget item model
//!
//! Represents a single income or expense ledger entry, plus the field-level
//! validation applied to manual entry before an item is created.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ItemId;

/// Classification of a budget item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Money coming in
    #[default]
    Income,
    /// Money going out
    Expense,
}

impl ItemKind {
    /// Parse the exact wire form used by CSV import and the persisted layout
    ///
    /// Case-sensitive, no synonyms: only `income` and `expense` are accepted.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

/// A single budget ledger entry
///
/// Invariant: `category` is non-empty and trimmed, `amount` is finite and
/// strictly positive. Construct via [`BudgetItem::new`] after
/// [`validate_item`], or through the CSV import parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetItem {
    /// Unique identifier, stable for the item's lifetime
    pub id: ItemId,

    /// Category label (e.g., "Salary", "Rent")
    pub category: String,

    /// Amount, always positive; the kind carries the sign of the flow
    pub amount: f64,

    /// Income/expense classification
    #[serde(rename = "type")]
    pub kind: ItemKind,
}

impl BudgetItem {
    /// Create a new item with a fresh ID
    pub fn new(category: impl Into<String>, amount: f64, kind: ItemKind) -> Self {
        Self {
            id: ItemId::new(),
            category: category.into(),
            amount,
            kind,
        }
    }
}

/// Why a single input field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// The field was empty after trimming
    Required,
    /// The field was present but not a valid positive number
    Invalid,
}

/// Per-field validation failures, reported together rather than short-circuited
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub category: Option<FieldError>,
    pub amount: Option<FieldError>,
}

impl FieldErrors {
    /// True when no field failed
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.amount.is_none()
    }

    /// User-facing message per failed field, in display order
    pub fn messages(&self) -> Vec<(&'static str, &'static str)> {
        let mut messages = Vec::new();
        if let Some(err) = self.category {
            let msg = match err {
                FieldError::Required => "Category is required",
                FieldError::Invalid => "Please enter a valid category",
            };
            messages.push(("category", msg));
        }
        if let Some(err) = self.amount {
            let msg = match err {
                FieldError::Required => "Amount is required",
                FieldError::Invalid => "Please enter a valid positive number",
            };
            messages.push(("amount", msg));
        }
        messages
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .messages()
            .iter()
            .map(|(field, msg)| format!("{}: {}", field, msg))
            .collect();
        write!(f, "{}", rendered.join("; "))
    }
}

/// A category/amount pair that passed validation
///
/// The caller assigns the ID and kind tag when turning this into a
/// [`BudgetItem`].
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedItem {
    pub category: String,
    pub amount: f64,
}

/// Validate manual-entry input for a new budget item
///
/// Returns the trimmed category and parsed amount on success. On failure,
/// every invalid field is reported (a blank category and a bad amount
/// produce two errors in one result).
pub fn validate_item(category: &str, amount_text: &str) -> Result<ValidatedItem, FieldErrors> {
    let mut errors = FieldErrors::default();

    let category = category.trim();
    if category.is_empty() {
        errors.category = Some(FieldError::Required);
    }

    let amount_text = amount_text.trim();
    let mut amount = 0.0;
    if amount_text.is_empty() {
        errors.amount = Some(FieldError::Required);
    } else {
        match amount_text.parse::<f64>() {
            Ok(value) if value.is_finite() && value > 0.0 => amount = value,
            _ => errors.amount = Some(FieldError::Invalid),
        }
    }

    if errors.is_empty() {
        Ok(ValidatedItem {
            category: category.to_string(),
            amount,
        })
    } else {
        Err(errors)
    }
}
