//! Budget display formatting
//!
//! Formats the current totals and the item list for terminal output.

use crate::models::{BudgetItem, Totals};

use super::{format_money, format_percent};

/// Format the aggregated totals as an aligned summary block
pub fn format_totals(totals: &Totals, savings_goal: f64) -> String {
    let rows = [
        ("Total Income", format_money(totals.total_income)),
        ("Total Expenses", format_money(totals.total_expenses)),
        ("Net Income", format_money(totals.net_income)),
        ("Savings Goal", format_money(savings_goal)),
        ("Savings Progress", format_percent(totals.savings_progress)),
    ];

    let label_width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

    let mut output = String::new();
    for (label, value) in rows {
        output.push_str(&format!("{:<label_width$}  {:>12}\n", label, value));
    }
    output
}

/// Format budget items as a table
pub fn format_item_list(items: &[BudgetItem]) -> String {
    if items.is_empty() {
        return "No budget items yet. Add one with `balancebeam add`.".to_string();
    }

    let id_width = items
        .iter()
        .map(|item| item.id.as_str().len())
        .max()
        .unwrap_or(2)
        .max(2);

    let category_width = items
        .iter()
        .map(|item| item.category.len())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<id_width$}  {:<category_width$}  {:<7}  {:>12}\n",
        "ID", "Category", "Type", "Amount",
    ));
    output.push_str(&format!(
        "{:-<id_width$}  {:-<category_width$}  {:-<7}  {:->12}\n",
        "", "", "", "",
    ));

    for item in items {
        output.push_str(&format!(
            "{:<id_width$}  {:<category_width$}  {:<7}  {:>12}\n",
            item.id.as_str(),
            item.category,
            item.kind.to_string(),
            format_money(item.amount),
        ));
    }

    output
}
