//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod config;
pub mod export;
pub mod favorites;
pub mod import;

pub use budget::{handle_add, handle_clear, handle_remove, handle_set, handle_show};
pub use config::handle_config;
pub use export::{handle_export_command, ExportCommands};
pub use favorites::{handle_favorites_command, FavoritesCommands};
pub use import::handle_import;
