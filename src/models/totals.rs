//! Budget aggregation
//!
//! Computes the derived totals (income, expenses, net, savings progress)
//! from a list of budget items. Pure arithmetic; never persisted on its own,
//! only embedded in exports.

use serde::{Deserialize, Serialize};

use super::item::{BudgetItem, ItemKind};

/// Derived totals for a set of budget items
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    /// Sum of amounts over income items
    pub total_income: f64,

    /// Sum of amounts over expense items
    pub total_expenses: f64,

    /// Income minus expenses; may be negative
    pub net_income: f64,

    /// Net income as a percentage of the savings goal, clamped at 100
    ///
    /// A goal of zero (or less) reports 0% rather than propagating a
    /// division-by-zero result to consumers.
    pub savings_progress: f64,
}

impl Totals {
    /// Aggregate totals from items and a savings goal
    ///
    /// Pure function of its inputs; sums are commutative, so the result is
    /// invariant under permutation of the item list.
    pub fn from_items(items: &[BudgetItem], savings_goal: f64) -> Self {
        let total_income: f64 = items
            .iter()
            .filter(|item| item.kind == ItemKind::Income)
            .map(|item| item.amount)
            .sum();

        let total_expenses: f64 = items
            .iter()
            .filter(|item| item.kind == ItemKind::Expense)
            .map(|item| item.amount)
            .sum();

        let net_income = total_income - total_expenses;

        let savings_progress = if savings_goal > 0.0 {
            (net_income / savings_goal * 100.0).min(100.0)
        } else {
            0.0
        };

        Self {
            total_income,
            total_expenses,
            net_income,
            savings_progress,
        }
    }
}
