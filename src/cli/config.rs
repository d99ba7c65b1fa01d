//! Configuration CLI command

use crate::config::{BalanceBeamPaths, Settings};
use crate::error::BalanceBeamResult;
use crate::storage::KeyValueStore;

/// Show the current configuration, optionally toggling the animation flag
pub fn handle_config<S: KeyValueStore>(
    store: &S,
    paths: &BalanceBeamPaths,
    animations: Option<bool>,
) -> BalanceBeamResult<()> {
    let mut settings = Settings::load(store)?;

    if let Some(enabled) = animations {
        settings.is_animated = enabled;
        settings.save(store)?;
        println!(
            "Chart animations {}",
            if enabled { "enabled" } else { "disabled" }
        );
    }

    println!("Data directory: {}", paths.data_dir().display());
    println!(
        "Chart animations: {}",
        if settings.is_animated { "on" } else { "off" }
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use tempfile::TempDir;

    #[test]
    fn test_toggle_animations_persists() {
        let store = MemoryStore::new();
        let dir = TempDir::new().unwrap();
        let paths = BalanceBeamPaths::with_base_dir(dir.path().to_path_buf());

        handle_config(&store, &paths, Some(false)).unwrap();
        assert!(!Settings::load(&store).unwrap().is_animated);

        handle_config(&store, &paths, Some(true)).unwrap();
        assert!(Settings::load(&store).unwrap().is_animated);
    }
}
