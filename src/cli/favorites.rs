//! Favorites CLI commands

use clap::Subcommand;

use crate::display::format_favorites_list;
use crate::error::{BalanceBeamError, BalanceBeamResult};
use crate::models::SnapshotId;
use crate::services::BudgetSession;
use crate::storage::{FavoritesStore, KeyValueStore};

/// Favorites subcommands
#[derive(Subcommand, Debug)]
pub enum FavoritesCommands {
    /// Save the current budget to favorites
    Save,

    /// List saved favorites
    List,

    /// Load a favorite into the current budget
    Load {
        /// Snapshot ID
        id: String,
    },

    /// Remove a favorite
    Remove {
        /// Snapshot ID
        id: String,
    },
}

/// Handle a favorites command
pub fn handle_favorites_command<S: KeyValueStore>(
    store: &S,
    cmd: FavoritesCommands,
) -> BalanceBeamResult<()> {
    let favorites = FavoritesStore::new(store);

    match cmd {
        FavoritesCommands::Save => {
            let session = BudgetSession::load(store)?;
            let snapshot = session.to_snapshot();
            favorites.save(&snapshot)?;
            println!(
                "Budget Saved: \"{}\" has been saved to favorites (ID {})",
                snapshot.title, snapshot.id
            );
        }

        FavoritesCommands::List => {
            let snapshots = favorites.load_all()?;
            println!("{}", format_favorites_list(&snapshots));
        }

        FavoritesCommands::Load { id } => {
            let id = SnapshotId::from_raw(id);
            let snapshot = favorites
                .get(&id)?
                .ok_or_else(|| BalanceBeamError::snapshot_not_found(id.to_string()))?;

            let mut session = BudgetSession::load(store)?;
            session.load_snapshot(&snapshot);
            session.save(store)?;
            println!("Budget Loaded: \"{}\" has been loaded", snapshot.title);
        }

        FavoritesCommands::Remove { id } => {
            let id = SnapshotId::from_raw(id);
            if favorites.get(&id)?.is_none() {
                println!("No favorite found with ID {} (nothing removed)", id);
                return Ok(());
            }
            favorites.remove(&id)?;
            println!("Favorite Removed: budget has been removed from favorites");
        }
    }

    Ok(())
}
