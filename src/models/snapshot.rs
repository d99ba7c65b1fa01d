//! Budget snapshot model
//!
//! A snapshot is a named, timestamped copy of a budget (items plus display
//! preferences) saved to the favorites collection. Snapshots are immutable
//! once saved: loading one copies its fields into the live editing state,
//! and re-saving creates a new snapshot with a fresh ID.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::SnapshotId;
use super::item::BudgetItem;

/// Chart style preference carried with a budget
///
/// Rendering is the chart engine's concern; this crate only stores and
/// round-trips the choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Bar,
    #[default]
    Pie,
    Line,
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bar => write!(f, "bar"),
            Self::Pie => write!(f, "pie"),
            Self::Line => write!(f, "line"),
        }
    }
}

/// A saved budget: items plus display preferences
///
/// Field names follow the persisted wire layout (`savingsGoal`, `chartType`,
/// `colorTheme`, `createdAt`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSnapshot {
    /// Unique identifier
    pub id: SnapshotId,

    /// Display title; not required to be unique across snapshots
    pub title: String,

    /// Items in insertion order at save time
    pub items: Vec<BudgetItem>,

    /// Savings target the net income is measured against
    pub savings_goal: f64,

    /// Preferred chart style
    pub chart_type: ChartType,

    /// Color palette for chart rendering
    pub color_theme: Vec<String>,

    /// When the snapshot was saved
    pub created_at: DateTime<Utc>,
}

impl BudgetSnapshot {
    /// Create a snapshot with a fresh ID, stamped now
    pub fn new(
        title: impl Into<String>,
        items: Vec<BudgetItem>,
        savings_goal: f64,
        chart_type: ChartType,
        color_theme: Vec<String>,
    ) -> Self {
        Self {
            id: SnapshotId::new(),
            title: title.into(),
            items,
            savings_goal,
            chart_type,
            color_theme,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::item::ItemKind;

    fn sample_snapshot() -> BudgetSnapshot {
        BudgetSnapshot::new(
            "Monthly Budget",
            vec![
                BudgetItem::new("Salary", 5000.0, ItemKind::Income),
                BudgetItem::new("Rent", 1200.0, ItemKind::Expense),
            ],
            1000.0,
            ChartType::Pie,
            vec!["#3B82F6".to_string(), "#EF4444".to_string()],
        )
    }

    #[test]
    fn test_snapshot_wire_layout_is_camel_case() {
        let json = serde_json::to_value(sample_snapshot()).unwrap();
        assert!(json.get("savingsGoal").is_some());
        assert!(json.get("chartType").is_some());
        assert!(json.get("colorTheme").is_some());
        assert!(json.get("createdAt").is_some());
        assert_eq!(json["chartType"], "pie");
    }

    #[test]
    fn test_snapshot_round_trip() {
        let snapshot = sample_snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let decoded: BudgetSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, snapshot);
    }

    #[test]
    fn test_new_snapshots_get_distinct_ids() {
        assert_ne!(sample_snapshot().id, sample_snapshot().id);
    }

    #[test]
    fn test_chart_type_display() {
        assert_eq!(ChartType::Bar.to_string(), "bar");
        assert_eq!(ChartType::Line.to_string(), "line");
    }
}
