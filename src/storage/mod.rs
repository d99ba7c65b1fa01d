//! Storage layer for BalanceBeam
//!
//! All persisted state flows through a string key-value store with atomic
//! file-backed writes. Three keys are in use: the favorites collection, the
//! user settings object, and the live editing session.

pub mod favorites;
pub mod kv;

pub use favorites::FavoritesStore;
pub use kv::{FileStore, KeyValueStore, MemoryStore};

/// Storage key for the serialized list of saved snapshots
pub const FAVORITES_KEY: &str = "balancebeam-favorites";

/// Storage key for the serialized preferences object
pub const SETTINGS_KEY: &str = "balancebeam-settings";

/// Storage key for the live editing session carried between runs
pub const SESSION_KEY: &str = "balancebeam-session";
