use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use balancebeam::cli::{
    handle_add, handle_clear, handle_config, handle_export_command, handle_favorites_command,
    handle_import, handle_remove, handle_set, handle_show, ExportCommands, FavoritesCommands,
};
use balancebeam::config::BalanceBeamPaths;
use balancebeam::models::{ChartType, ItemKind};
use balancebeam::storage::FileStore;

#[derive(Parser)]
#[command(
    name = "balancebeam",
    version,
    about = "Personal budget planning from the terminal",
    long_about = "BalanceBeam tracks income and expense items, computes totals and \
                  savings progress, saves named budget favorites, imports items from \
                  CSV, and exports budgets as JSON, printable reports, or share links."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a budget item
    Add {
        /// Category label (e.g., "Salary", "Rent")
        category: String,
        /// Amount (a positive number)
        #[arg(allow_negative_numbers = true)]
        amount: String,
        /// Item type
        #[arg(value_enum)]
        kind: ItemKind,
    },

    /// Remove a budget item by ID
    Remove {
        /// Item ID (shown by `show`)
        id: String,
    },

    /// Show the current budget with totals
    Show,

    /// Update budget settings
    Set {
        /// Budget title
        #[arg(long)]
        title: Option<String>,
        /// Savings goal
        #[arg(long)]
        goal: Option<f64>,
        /// Chart type
        #[arg(long, value_enum)]
        chart: Option<ChartType>,
        /// Comma-separated color theme (e.g., "#3B82F6,#EF4444")
        #[arg(long)]
        theme: Option<String>,
    },

    /// Reset the current budget
    Clear,

    /// Import budget items from a CSV file (category,amount,type per line)
    Import {
        /// Path to CSV file
        file: PathBuf,
    },

    /// Saved budget favorites
    #[command(subcommand)]
    Favorites(FavoritesCommands),

    /// Export the current budget
    #[command(subcommand)]
    Export(ExportCommands),

    /// Show current configuration and paths
    Config {
        /// Enable or disable chart animations
        #[arg(long)]
        animations: Option<bool>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = BalanceBeamPaths::new()?;
    paths.ensure_directories()?;
    let store = FileStore::new(paths.data_dir());

    match cli.command {
        Commands::Add {
            category,
            amount,
            kind,
        } => handle_add(&store, &category, &amount, kind)?,
        Commands::Remove { id } => handle_remove(&store, &id)?,
        Commands::Show => handle_show(&store)?,
        Commands::Set {
            title,
            goal,
            chart,
            theme,
        } => handle_set(&store, title, goal, chart, theme)?,
        Commands::Clear => handle_clear(&store)?,
        Commands::Import { file } => handle_import(&store, &file)?,
        Commands::Favorites(cmd) => handle_favorites_command(&store, cmd)?,
        Commands::Export(cmd) => handle_export_command(&store, cmd)?,
        Commands::Config { animations } => handle_config(&store, &paths, animations)?,
    }

    Ok(())
}
