//! Favorites store
//!
//! Persists the collection of saved budget snapshots as a single serialized
//! list under one storage key. Every operation is a whole-collection
//! read-modify-write; there is no incremental persistence and no
//! update-in-place for a saved snapshot.

use crate::error::{BalanceBeamError, BalanceBeamResult};
use crate::models::{BudgetSnapshot, SnapshotId};

use super::kv::KeyValueStore;
use super::FAVORITES_KEY;

/// Repository for saved budget snapshots over an injected key-value store
pub struct FavoritesStore<'a, S: KeyValueStore> {
    store: &'a S,
}

impl<'a, S: KeyValueStore> FavoritesStore<'a, S> {
    /// Create a favorites store over the given backend
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Return all saved snapshots, oldest first
    ///
    /// A missing key or a payload that fails to decode is treated as "no
    /// favorites" rather than an error.
    pub fn load_all(&self) -> BalanceBeamResult<Vec<BudgetSnapshot>> {
        let Some(payload) = self.store.get(FAVORITES_KEY)? else {
            return Ok(Vec::new());
        };
        Ok(serde_json::from_str(&payload).unwrap_or_default())
    }

    /// Look up a single snapshot by ID
    pub fn get(&self, id: &SnapshotId) -> BalanceBeamResult<Option<BudgetSnapshot>> {
        Ok(self
            .load_all()?
            .into_iter()
            .find(|snapshot| &snapshot.id == id))
    }

    /// Append a snapshot to the collection and persist the whole list
    ///
    /// Saving a snapshot with no items is refused and leaves the collection
    /// unchanged.
    pub fn save(&self, snapshot: &BudgetSnapshot) -> BalanceBeamResult<()> {
        if snapshot.items.is_empty() {
            return Err(BalanceBeamError::EmptyBudget);
        }

        let mut snapshots = self.load_all()?;
        snapshots.push(snapshot.clone());
        self.write_all(&snapshots)
    }

    /// Remove the snapshot with the given ID, if present
    ///
    /// Removing an absent ID is a no-op, not an error.
    pub fn remove(&self, id: &SnapshotId) -> BalanceBeamResult<()> {
        let mut snapshots = self.load_all()?;
        snapshots.retain(|snapshot| &snapshot.id != id);
        self.write_all(&snapshots)
    }

    fn write_all(&self, snapshots: &[BudgetSnapshot]) -> BalanceBeamResult<()> {
        let payload = serde_json::to_string(snapshots)?;
        self.store.set(FAVORITES_KEY, &payload)
    }
}
