//! Live budget editing session
//!
//! The in-memory budget being edited: title, item list, savings goal, and
//! chart preferences. User intents (add item, remove item, import, load a
//! favorite) mutate the session; totals are recomputed on every read. The
//! session persists under its own storage key so edits compose across CLI
//! invocations; a missing or corrupt payload loads as the default session.

use serde::{Deserialize, Serialize};

use crate::error::BalanceBeamResult;
use crate::models::{
    validate_item, BudgetItem, BudgetSnapshot, ChartType, FieldErrors, ItemId, ItemKind, Totals,
};
use crate::storage::{KeyValueStore, SESSION_KEY};

/// Default chart palette, one color per rendered category slot
pub const DEFAULT_COLOR_THEME: [&str; 5] =
    ["#3B82F6", "#EF4444", "#10B981", "#F59E0B", "#8B5CF6"];

fn default_title() -> String {
    "My Budget".to_string()
}

fn default_savings_goal() -> f64 {
    1000.0
}

fn default_color_theme() -> Vec<String> {
    DEFAULT_COLOR_THEME.iter().map(|s| s.to_string()).collect()
}

/// The budget currently being edited
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSession {
    /// Budget title used when saving and exporting
    #[serde(default = "default_title")]
    pub title: String,

    /// Current budget items in insertion order
    #[serde(default)]
    pub items: Vec<BudgetItem>,

    /// Savings target the net income is measured against
    #[serde(default = "default_savings_goal")]
    pub savings_goal: f64,

    /// Preferred chart style
    #[serde(default)]
    pub chart_type: ChartType,

    /// Chart color palette
    #[serde(default = "default_color_theme")]
    pub color_theme: Vec<String>,
}

impl Default for BudgetSession {
    fn default() -> Self {
        Self {
            title: default_title(),
            items: Vec::new(),
            savings_goal: default_savings_goal(),
            chart_type: ChartType::default(),
            color_theme: default_color_theme(),
        }
    }
}

impl BudgetSession {
    /// Load the session from the store, or the default session when no prior
    /// data exists or the payload does not decode
    pub fn load<S: KeyValueStore>(store: &S) -> BalanceBeamResult<Self> {
        let Some(payload) = store.get(SESSION_KEY)? else {
            return Ok(Self::default());
        };
        Ok(serde_json::from_str(&payload).unwrap_or_default())
    }

    /// Persist the session to the store
    pub fn save<S: KeyValueStore>(&self, store: &S) -> BalanceBeamResult<()> {
        let payload = serde_json::to_string(self)?;
        store.set(SESSION_KEY, &payload)
    }

    /// Validate the input fields and append a new item
    ///
    /// Returns a reference to the created item, or every failed field at
    /// once when validation rejects the input.
    pub fn add_item(
        &mut self,
        category: &str,
        amount_text: &str,
        kind: ItemKind,
    ) -> Result<&BudgetItem, FieldErrors> {
        let validated = validate_item(category, amount_text)?;
        self.items
            .push(BudgetItem::new(validated.category, validated.amount, kind));
        Ok(self.items.last().expect("item was just pushed"))
    }

    /// Remove the item with the given ID; returns whether anything was removed
    pub fn remove_item(&mut self, id: &ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| &item.id != id);
        self.items.len() != before
    }

    /// Replace the whole item list (CSV import path)
    pub fn replace_items(&mut self, items: Vec<BudgetItem>) {
        self.items = items;
    }

    /// Compute the current totals
    pub fn totals(&self) -> Totals {
        Totals::from_items(&self.items, self.savings_goal)
    }

    /// Copy a saved snapshot's fields into the session
    ///
    /// The snapshot is copied by value: later edits to the session never
    /// reach back into the favorites collection.
    pub fn load_snapshot(&mut self, snapshot: &BudgetSnapshot) {
        self.title = snapshot.title.clone();
        self.items = snapshot.items.clone();
        self.savings_goal = snapshot.savings_goal;
        self.chart_type = snapshot.chart_type;
        self.color_theme = snapshot.color_theme.clone();
    }

    /// Freeze the session into a new snapshot with a fresh ID, stamped now
    ///
    /// Re-saving a previously loaded budget therefore creates a distinct
    /// favorites entry rather than updating the original in place.
    pub fn to_snapshot(&self) -> BudgetSnapshot {
        BudgetSnapshot::new(
            self.title.clone(),
            self.items.clone(),
            self.savings_goal,
            self.chart_type,
            self.color_theme.clone(),
        )
    }
}
