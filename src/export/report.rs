//! Printable budget report
//!
//! Renders the PDF export layout — title, generation date, financial
//! summary, and one line per item — as a paginated document. Page breaks
//! fall where the original layout ran out of vertical space: the first page
//! holds the summary plus seven item lines, follow-on pages hold seventeen.

use chrono::{DateTime, Utc};

use crate::display::{format_money, format_percent};
use crate::error::{BalanceBeamError, BalanceBeamResult};
use crate::models::{BudgetSnapshot, Totals};

/// Item lines that fit under the summary on the first page
const ITEMS_FIRST_PAGE: usize = 7;

/// Item lines per follow-on page
const ITEMS_PER_PAGE: usize = 17;

/// A paginated budget report
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetReport {
    pub pages: Vec<Vec<String>>,
}

impl BudgetReport {
    /// Build a report for a snapshot; refused when it has no items
    pub fn build(
        snapshot: &BudgetSnapshot,
        totals: &Totals,
        generated_at: DateTime<Utc>,
    ) -> BalanceBeamResult<Self> {
        if snapshot.items.is_empty() {
            return Err(BalanceBeamError::EmptyBudget);
        }

        let mut first_page = vec![
            snapshot.title.clone(),
            format!("Generated on: {}", generated_at.format("%Y-%m-%d")),
            String::new(),
            "Financial Summary".to_string(),
            format!("Total Income: {}", format_money(totals.total_income)),
            format!("Total Expenses: {}", format_money(totals.total_expenses)),
            format!("Net Income: {}", format_money(totals.net_income)),
            format!("Savings Goal: {}", format_money(snapshot.savings_goal)),
            format!(
                "Savings Progress: {}",
                format_percent(totals.savings_progress)
            ),
            String::new(),
            "Budget Items".to_string(),
        ];

        let item_lines: Vec<String> = snapshot
            .items
            .iter()
            .map(|item| {
                format!(
                    "{} ({}): {}",
                    item.category,
                    item.kind,
                    format_money(item.amount)
                )
            })
            .collect();

        let mut pages = Vec::new();
        let (head, tail) = item_lines.split_at(item_lines.len().min(ITEMS_FIRST_PAGE));
        first_page.extend(head.iter().cloned());
        pages.push(first_page);

        for chunk in tail.chunks(ITEMS_PER_PAGE) {
            pages.push(chunk.to_vec());
        }

        Ok(Self { pages })
    }

    /// Render the report as plain text, pages separated by form feeds
    pub fn to_text(&self) -> String {
        self.pages
            .iter()
            .map(|page| page.join("\n"))
            .collect::<Vec<_>>()
            .join("\n\u{c}\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetItem, ChartType, ItemKind};

    fn snapshot_with_n_items(n: usize) -> BudgetSnapshot {
        let items = (0..n)
            .map(|i| BudgetItem::new(format!("Category {}", i), 100.0, ItemKind::Expense))
            .collect();
        BudgetSnapshot::new("Report Budget", items, 1000.0, ChartType::Bar, vec![])
    }

    fn totals_for(snapshot: &BudgetSnapshot) -> Totals {
        Totals::from_items(&snapshot.items, snapshot.savings_goal)
    }

    #[test]
    fn test_report_header_and_summary() {
        let snapshot = snapshot_with_n_items(2);
        let report = BudgetReport::build(&snapshot, &totals_for(&snapshot), Utc::now()).unwrap();

        let first = &report.pages[0];
        assert_eq!(first[0], "Report Budget");
        assert!(first[1].starts_with("Generated on: "));
        assert!(first.contains(&"Financial Summary".to_string()));
        assert!(first.contains(&"Total Expenses: $200".to_string()));
        assert!(first.contains(&"Budget Items".to_string()));
    }

    #[test]
    fn test_item_line_layout() {
        let snapshot = BudgetSnapshot::new(
            "Budget",
            vec![BudgetItem::new("Rent", 1200.0, ItemKind::Expense)],
            1000.0,
            ChartType::Pie,
            vec![],
        );
        let report = BudgetReport::build(&snapshot, &totals_for(&snapshot), Utc::now()).unwrap();
        let text = report.to_text();
        assert!(text.contains("Rent (expense): $1,200"));
    }

    #[test]
    fn test_few_items_fit_on_one_page() {
        let snapshot = snapshot_with_n_items(7);
        let report = BudgetReport::build(&snapshot, &totals_for(&snapshot), Utc::now()).unwrap();
        assert_eq!(report.pages.len(), 1);
    }

    #[test]
    fn test_overflow_paginates() {
        let snapshot = snapshot_with_n_items(8);
        let report = BudgetReport::build(&snapshot, &totals_for(&snapshot), Utc::now()).unwrap();
        assert_eq!(report.pages.len(), 2);
        assert_eq!(report.pages[1].len(), 1);
    }

    #[test]
    fn test_follow_on_pages_hold_seventeen_lines() {
        // 7 on page one + 17 on page two + 1 on page three
        let snapshot = snapshot_with_n_items(25);
        let report = BudgetReport::build(&snapshot, &totals_for(&snapshot), Utc::now()).unwrap();
        assert_eq!(report.pages.len(), 3);
        assert_eq!(report.pages[1].len(), 17);
        assert_eq!(report.pages[2].len(), 1);
    }

    #[test]
    fn test_empty_snapshot_is_refused() {
        let empty = BudgetSnapshot::new("Empty", vec![], 1000.0, ChartType::Pie, vec![]);
        let totals = Totals::from_items(&[], 1000.0);
        assert!(matches!(
            BudgetReport::build(&empty, &totals, Utc::now()),
            Err(BalanceBeamError::EmptyBudget)
        ));
    }
}
