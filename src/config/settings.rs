//! User settings for BalanceBeam
//!
//! The persisted preferences object. It currently carries a single flag
//! (whether chart animations are enabled) and is stored under its own key in
//! the key-value store; a missing or corrupt payload falls back to defaults.

use serde::{Deserialize, Serialize};

use crate::error::BalanceBeamResult;
use crate::storage::{KeyValueStore, SETTINGS_KEY};

/// User settings for BalanceBeam
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Whether chart animations are enabled
    #[serde(rename = "isAnimated", default = "default_animated")]
    pub is_animated: bool,
}

fn default_animated() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self { is_animated: true }
    }
}

impl Settings {
    /// Load settings from the store, falling back to defaults when the key is
    /// missing or the payload does not decode
    pub fn load<S: KeyValueStore>(store: &S) -> BalanceBeamResult<Self> {
        let Some(payload) = store.get(SETTINGS_KEY)? else {
            return Ok(Self::default());
        };
        Ok(serde_json::from_str(&payload).unwrap_or_default())
    }

    /// Persist settings to the store
    pub fn save<S: KeyValueStore>(&self, store: &S) -> BalanceBeamResult<()> {
        let payload = serde_json::to_string(self)?;
        store.set(SETTINGS_KEY, &payload)
    }
}
