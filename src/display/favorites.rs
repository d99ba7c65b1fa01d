//! Favorites display formatting

use crate::models::BudgetSnapshot;

use super::format_money;

/// Format the saved snapshot collection as a table
pub fn format_favorites_list(snapshots: &[BudgetSnapshot]) -> String {
    if snapshots.is_empty() {
        return "No favorites saved yet. Save one with `balancebeam favorites save`.".to_string();
    }

    let id_width = snapshots
        .iter()
        .map(|s| s.id.as_str().len())
        .max()
        .unwrap_or(2)
        .max(2);

    let title_width = snapshots
        .iter()
        .map(|s| s.title.len())
        .max()
        .unwrap_or(5)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<id_width$}  {:<title_width$}  {:>5}  {:>12}  {:<10}\n",
        "ID", "Title", "Items", "Goal", "Saved",
    ));
    output.push_str(&format!(
        "{:-<id_width$}  {:-<title_width$}  {:->5}  {:->12}  {:-<10}\n",
        "", "", "", "", "",
    ));

    for snapshot in snapshots {
        output.push_str(&format!(
            "{:<id_width$}  {:<title_width$}  {:>5}  {:>12}  {:<10}\n",
            snapshot.id.as_str(),
            snapshot.title,
            snapshot.items.len(),
            format_money(snapshot.savings_goal),
            snapshot.created_at.format("%Y-%m-%d").to_string(),
        ));
    }

    output
}
