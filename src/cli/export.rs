//! CLI commands for data export
//!
//! Exports the current budget as JSON or a printable report, or prints a
//! shareable link.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use chrono::Utc;
use clap::Subcommand;

use crate::error::{BalanceBeamError, BalanceBeamResult};
use crate::export::{encode_share_url, BudgetExport, BudgetReport, SharePayload};
use crate::services::BudgetSession;
use crate::storage::KeyValueStore;

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export the current budget (with totals) as JSON
    Json {
        /// Output file path (defaults to the budget title)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the current budget as a paginated printable report
    Report {
        /// Output file path (defaults to the budget title)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print a shareable link encoding the current budget
    Share {
        /// Base URL the share parameter is appended to
        #[arg(long, default_value = "https://balancebeam.app")]
        base_url: String,
    },
}

/// Handle an export command
pub fn handle_export_command<S: KeyValueStore>(
    store: &S,
    cmd: ExportCommands,
) -> BalanceBeamResult<()> {
    let session = BudgetSession::load(store)?;
    let totals = session.totals();

    match cmd {
        ExportCommands::Json { output } => {
            let path = output.unwrap_or_else(|| title_file_name(&session.title, "json"));
            let export = BudgetExport::new(session.to_snapshot(), totals)?;

            let file = File::create(&path).map_err(|e| {
                BalanceBeamError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            export.write_json(&mut BufWriter::new(file))?;

            println!("JSON Exported: budget saved to {}", path.display());
        }

        ExportCommands::Report { output } => {
            let path = output.unwrap_or_else(|| title_file_name(&session.title, "txt"));
            let snapshot = session.to_snapshot();
            let report = BudgetReport::build(&snapshot, &totals, Utc::now())?;

            std::fs::write(&path, report.to_text()).map_err(|e| {
                BalanceBeamError::Export(format!("Failed to write {}: {}", path.display(), e))
            })?;

            println!(
                "Report Exported: {} page(s) saved to {}",
                report.pages.len(),
                path.display()
            );
        }

        ExportCommands::Share { base_url } => {
            let payload = SharePayload {
                title: session.title.clone(),
                items: session.items.clone(),
                totals,
            };
            let url = encode_share_url(&base_url, &payload)?;
            println!("{}", url);
        }
    }

    Ok(())
}

/// Derive an output file name from the budget title
fn title_file_name(title: &str, extension: &str) -> PathBuf {
    let stem: String = title.split_whitespace().collect::<Vec<_>>().join("_");
    let stem = if stem.is_empty() {
        "budget".to_string()
    } else {
        stem
    };
    PathBuf::from(format!("{}.{}", stem, extension))
}
