//! Path management for BalanceBeam
//!
//! Provides XDG-compliant path resolution for the data directory.
//!
//! ## Path Resolution Order
//!
//! 1. `BALANCEBEAM_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/balancebeam` or `~/.config/balancebeam`
//! 3. Windows: `%APPDATA%\balancebeam`

use std::path::PathBuf;

use crate::error::BalanceBeamError;

/// Manages all paths used by BalanceBeam
#[derive(Debug, Clone)]
pub struct BalanceBeamPaths {
    /// Base directory for all BalanceBeam data
    base_dir: PathBuf,
}

impl BalanceBeamPaths {
    /// Create a new BalanceBeamPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, BalanceBeamError> {
        let base_dir = if let Ok(custom) = std::env::var("BALANCEBEAM_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create BalanceBeamPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/balancebeam/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory where the key-value store lives
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), BalanceBeamError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BalanceBeamError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| BalanceBeamError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, BalanceBeamError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
    Ok(config_base.join("balancebeam"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, BalanceBeamError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| BalanceBeamError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("balancebeam"))
}
