//! Key-value persistence backends
//!
//! All persisted state goes through the [`KeyValueStore`] trait: a string
//! store keyed by name, mirroring the browser-local storage the data layout
//! was designed for. The file-backed implementation writes atomically so a
//! crash never leaves a half-written payload; the in-memory implementation
//! substitutes for it in tests.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::BalanceBeamError;

/// String key-value store used for all persisted state
pub trait KeyValueStore {
    /// Read the value for a key, or `None` if the key has never been written
    fn get(&self, key: &str) -> Result<Option<String>, BalanceBeamError>;

    /// Write the value for a key, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), BalanceBeamError>;

    /// Remove a key; removing an absent key is not an error
    fn remove(&self, key: &str) -> Result<(), BalanceBeamError>;
}

/// File-backed store: one `<key>.json` file per key under the data directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at the given directory
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, BalanceBeamError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }

        let value = fs::read_to_string(&path).map_err(|e| {
            BalanceBeamError::Storage(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Ok(Some(value))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BalanceBeamError> {
        let path = self.path_for(key);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                BalanceBeamError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        // Write to a temp file in the same directory, then rename, so the
        // stored value is either the old payload or the new one in full.
        let temp_path = path.with_extension("json.tmp");

        let file = File::create(&temp_path)
            .map_err(|e| BalanceBeamError::Storage(format!("Failed to create temp file: {}", e)))?;

        let mut writer = BufWriter::new(file);
        writer
            .write_all(value.as_bytes())
            .map_err(|e| BalanceBeamError::Storage(format!("Failed to write data: {}", e)))?;
        writer
            .flush()
            .map_err(|e| BalanceBeamError::Storage(format!("Failed to flush data: {}", e)))?;
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| BalanceBeamError::Storage(format!("Failed to sync data: {}", e)))?;

        fs::rename(&temp_path, &path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            BalanceBeamError::Storage(format!("Failed to rename temp file: {}", e))
        })?;

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), BalanceBeamError> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(&path).map_err(|e| {
                BalanceBeamError::Storage(format!("Failed to remove {}: {}", path.display(), e))
            })?;
        }
        Ok(())
    }
}

/// In-memory store for tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, BalanceBeamError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| BalanceBeamError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BalanceBeamError> {
        let mut entries = self.entries.write().map_err(|e| {
            BalanceBeamError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), BalanceBeamError> {
        let mut entries = self.entries.write().map_err(|e| {
            BalanceBeamError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        entries.remove(key);
        Ok(())
    }
}
