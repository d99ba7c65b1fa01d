//! CSV import
//!
//! Parses raw `category,amount,type` text into budget items. The import is
//! atomic: the first bad line aborts the whole import and nothing is
//! returned. There is no header row handling — the first line is always
//! data — and repeated category/type pairs are kept as distinct items; both
//! are documented product decisions, not oversights.

use csv::ReaderBuilder;
use thiserror::Error;

use crate::models::{BudgetItem, ItemId, ItemKind};

/// Why a CSV line was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CsvParseReason {
    /// Fewer than three non-empty fields on the line
    #[error("missing field")]
    MissingField,
    /// Amount did not parse as a finite, strictly positive number
    #[error("invalid amount")]
    InvalidAmount,
    /// Type was not exactly `income` or `expense`
    #[error("invalid type")]
    InvalidType,
}

/// A rejected CSV line, citing its 1-based position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("line {line}: {reason}")]
pub struct CsvParseError {
    pub line: usize,
    pub reason: CsvParseReason,
}

impl CsvParseError {
    fn new(line: usize, reason: CsvParseReason) -> Self {
        Self { line, reason }
    }
}

/// Parse CSV text into a list of budget items
///
/// Each line holds three comma-separated fields: `category,amount,type`.
/// Fields are trimmed; extra fields past the third are ignored. Items are
/// returned in input order with deterministic `csv-<index>` IDs. Blank
/// lines are skipped.
pub fn parse_budget_csv(text: &str) -> Result<Vec<BudgetItem>, CsvParseError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(text.trim().as_bytes());

    let mut items = Vec::new();

    for (index, record) in reader.records().enumerate() {
        let line = index + 1;

        let record = record.map_err(|_| CsvParseError::new(line, CsvParseReason::MissingField))?;

        let category = record.get(0).unwrap_or_default();
        let amount_text = record.get(1).unwrap_or_default();
        let kind_text = record.get(2).unwrap_or_default();

        if category.is_empty() || amount_text.is_empty() || kind_text.is_empty() {
            return Err(CsvParseError::new(line, CsvParseReason::MissingField));
        }

        let amount = match amount_text.parse::<f64>() {
            Ok(value) if value.is_finite() && value > 0.0 => value,
            _ => return Err(CsvParseError::new(line, CsvParseReason::InvalidAmount)),
        };

        let kind = ItemKind::from_wire(kind_text)
            .ok_or_else(|| CsvParseError::new(line, CsvParseReason::InvalidType))?;

        items.push(BudgetItem {
            id: ItemId::for_csv_row(index),
            category: category.to_string(),
            amount,
            kind,
        });
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_items_in_order_with_csv_ids() {
        let items = parse_budget_csv("Salary,5000,income\nRent,1200,expense").unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id.as_str(), "csv-0");
        assert_eq!(items[0].category, "Salary");
        assert_eq!(items[0].amount, 5000.0);
        assert_eq!(items[0].kind, ItemKind::Income);
        assert_eq!(items[1].id.as_str(), "csv-1");
        assert_eq!(items[1].category, "Rent");
        assert_eq!(items[1].kind, ItemKind::Expense);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let items = parse_budget_csv("  Groceries , 400 , expense  ").unwrap();
        assert_eq!(items[0].category, "Groceries");
        assert_eq!(items[0].amount, 400.0);
    }

    #[test]
    fn test_surrounding_whitespace_on_text_is_ignored() {
        let items = parse_budget_csv("\n\nSalary,5000,income\n\n").unwrap();
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_missing_field_aborts_with_line_number() {
        let err = parse_budget_csv("Salary,5000,income\nRent,1200").unwrap_err();
        assert_eq!(err.line, 2);
        assert_eq!(err.reason, CsvParseReason::MissingField);
    }

    #[test]
    fn test_empty_field_is_missing() {
        let err = parse_budget_csv("Salary,,income").unwrap_err();
        assert_eq!(err.line, 1);
        assert_eq!(err.reason, CsvParseReason::MissingField);
    }

    #[test]
    fn test_negative_amount_is_invalid() {
        let err = parse_budget_csv("Rent,-50,expense").unwrap_err();
        assert_eq!(err.line, 1);
        assert_eq!(err.reason, CsvParseReason::InvalidAmount);
    }

    #[test]
    fn test_zero_and_non_numeric_amounts_are_invalid() {
        assert_eq!(
            parse_budget_csv("Rent,0,expense").unwrap_err().reason,
            CsvParseReason::InvalidAmount
        );
        assert_eq!(
            parse_budget_csv("Rent,lots,expense").unwrap_err().reason,
            CsvParseReason::InvalidAmount
        );
    }

    #[test]
    fn test_unknown_type_is_invalid() {
        let err = parse_budget_csv("Salary,5000,bonus").unwrap_err();
        assert_eq!(err.line, 1);
        assert_eq!(err.reason, CsvParseReason::InvalidType);
    }

    #[test]
    fn test_type_is_case_sensitive() {
        let err = parse_budget_csv("Salary,5000,Income").unwrap_err();
        assert_eq!(err.reason, CsvParseReason::InvalidType);
    }

    #[test]
    fn test_first_line_is_data_not_header() {
        // "Category,Amount,Type" is treated as a data line and rejected on
        // its amount field, not skipped as a header.
        let err = parse_budget_csv("Category,Amount,Type\nSalary,5000,income").unwrap_err();
        assert_eq!(err.line, 1);
        assert_eq!(err.reason, CsvParseReason::InvalidAmount);
    }

    #[test]
    fn test_error_aborts_whole_import() {
        let result = parse_budget_csv("Salary,5000,income\nRent,1200,rent\nOther,10,income");
        assert!(result.is_err());
    }

    #[test]
    fn test_duplicate_lines_stay_distinct() {
        let items = parse_budget_csv("Rent,1200,expense\nRent,1200,expense").unwrap();
        assert_eq!(items.len(), 2);
        assert_ne!(items[0].id, items[1].id);
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let items = parse_budget_csv("Salary,5000,income,note").unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].category, "Salary");
    }

    #[test]
    fn test_empty_text_yields_no_items() {
        assert!(parse_budget_csv("").unwrap().is_empty());
        assert!(parse_budget_csv("   \n  ").unwrap().is_empty());
    }

    #[test]
    fn test_sample_file_from_format_guide() {
        let text = "Salary,5000,income\nFreelance,1500,income\nRent,1200,expense\nGroceries,400,expense\nUtilities,200,expense";
        let items = parse_budget_csv(text).unwrap();
        assert_eq!(items.len(), 5);
        assert_eq!(items[4].id.as_str(), "csv-4");
    }

    #[test]
    fn test_error_display_names_line_and_reason() {
        let err = parse_budget_csv("Salary,5000,bonus").unwrap_err();
        assert_eq!(err.to_string(), "line 1: invalid type");
    }
}
