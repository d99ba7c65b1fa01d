//! Budget editing CLI commands
//!
//! Handlers for the commands that mutate or show the live editing session.

use crate::display::{format_item_list, format_totals};
use crate::error::{BalanceBeamError, BalanceBeamResult};
use crate::models::{ChartType, ItemId, ItemKind};
use crate::services::BudgetSession;
use crate::storage::KeyValueStore;

/// Add a budget item to the session
pub fn handle_add<S: KeyValueStore>(
    store: &S,
    category: &str,
    amount: &str,
    kind: ItemKind,
) -> BalanceBeamResult<()> {
    let mut session = BudgetSession::load(store)?;

    let item = match session.add_item(category, amount, kind) {
        Ok(item) => item.clone(),
        Err(errors) => {
            for (field, message) in errors.messages() {
                eprintln!("  {}: {}", field, message);
            }
            return Err(BalanceBeamError::Validation(errors.to_string()));
        }
    };

    session.save(store)?;
    println!("Item Added: {} added to {}", item.category, item.kind);
    Ok(())
}

/// Remove a budget item from the session by ID
pub fn handle_remove<S: KeyValueStore>(store: &S, id: &str) -> BalanceBeamResult<()> {
    let mut session = BudgetSession::load(store)?;

    if !session.remove_item(&ItemId::from_raw(id)) {
        return Err(BalanceBeamError::item_not_found(id));
    }

    session.save(store)?;
    println!("Item Removed: budget item has been removed");
    Ok(())
}

/// Show the current budget: totals, items, and display preferences
pub fn handle_show<S: KeyValueStore>(store: &S) -> BalanceBeamResult<()> {
    let session = BudgetSession::load(store)?;
    let totals = session.totals();

    println!("{}", session.title);
    println!("{}", "=".repeat(session.title.len().max(20)));
    println!();
    print!("{}", format_totals(&totals, session.savings_goal));
    println!();
    println!("{}", format_item_list(&session.items));
    println!(
        "Chart: {} | Colors: {}",
        session.chart_type,
        session.color_theme.join(", ")
    );
    Ok(())
}

/// Update session preferences (title, goal, chart type, color theme)
pub fn handle_set<S: KeyValueStore>(
    store: &S,
    title: Option<String>,
    goal: Option<f64>,
    chart: Option<ChartType>,
    theme: Option<String>,
) -> BalanceBeamResult<()> {
    let mut session = BudgetSession::load(store)?;
    let mut changed = false;

    if let Some(title) = title {
        let title = title.trim().to_string();
        if title.is_empty() {
            return Err(BalanceBeamError::Validation("Title is required".into()));
        }
        session.title = title;
        changed = true;
    }

    if let Some(goal) = goal {
        if !goal.is_finite() {
            return Err(BalanceBeamError::Validation(
                "Savings goal must be a number".into(),
            ));
        }
        session.savings_goal = goal;
        changed = true;
    }

    if let Some(chart) = chart {
        session.chart_type = chart;
        changed = true;
    }

    if let Some(theme) = theme {
        let colors: Vec<String> = theme
            .split(',')
            .map(|color| color.trim().to_string())
            .filter(|color| !color.is_empty())
            .collect();
        if colors.is_empty() {
            return Err(BalanceBeamError::Validation(
                "Color theme needs at least one color".into(),
            ));
        }
        session.color_theme = colors;
        changed = true;
    }

    if !changed {
        println!("Nothing to change. Pass --title, --goal, --chart, or --theme.");
        return Ok(());
    }

    session.save(store)?;
    println!("Budget settings updated");
    Ok(())
}

/// Reset the session to a fresh, empty budget
pub fn handle_clear<S: KeyValueStore>(store: &S) -> BalanceBeamResult<()> {
    BudgetSession::default().save(store)?;
    println!("Budget cleared");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_add_persists_item() {
        let store = MemoryStore::new();
        handle_add(&store, "Salary", "5000", ItemKind::Income).unwrap();

        let session = BudgetSession::load(&store).unwrap();
        assert_eq!(session.items.len(), 1);
        assert_eq!(session.items[0].category, "Salary");
    }

    #[test]
    fn test_add_rejects_invalid_input_without_persisting() {
        let store = MemoryStore::new();
        let err = handle_add(&store, "", "-5", ItemKind::Expense).unwrap_err();
        assert!(err.is_validation());

        assert!(BudgetSession::load(&store).unwrap().items.is_empty());
    }

    #[test]
    fn test_remove_unknown_id_is_not_found() {
        let store = MemoryStore::new();
        let err = handle_remove(&store, "no-such-id").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_remove_drops_item() {
        let store = MemoryStore::new();
        handle_add(&store, "Rent", "1200", ItemKind::Expense).unwrap();
        let id = BudgetSession::load(&store).unwrap().items[0].id.clone();

        handle_remove(&store, id.as_str()).unwrap();
        assert!(BudgetSession::load(&store).unwrap().items.is_empty());
    }

    #[test]
    fn test_set_updates_preferences() {
        let store = MemoryStore::new();
        handle_set(
            &store,
            Some("August".into()),
            Some(2000.0),
            Some(ChartType::Bar),
            Some("#111111, #222222".into()),
        )
        .unwrap();

        let session = BudgetSession::load(&store).unwrap();
        assert_eq!(session.title, "August");
        assert_eq!(session.savings_goal, 2000.0);
        assert_eq!(session.chart_type, ChartType::Bar);
        assert_eq!(session.color_theme, vec!["#111111", "#222222"]);
    }

    #[test]
    fn test_set_rejects_blank_title() {
        let store = MemoryStore::new();
        let err = handle_set(&store, Some("   ".into()), None, None, None).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_clear_resets_session() {
        let store = MemoryStore::new();
        handle_add(&store, "Salary", "5000", ItemKind::Income).unwrap();
        handle_clear(&store).unwrap();

        assert_eq!(
            BudgetSession::load(&store).unwrap(),
            BudgetSession::default()
        );
    }
}
