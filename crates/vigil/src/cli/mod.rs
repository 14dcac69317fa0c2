//! CLI argument parsing and command dispatch.
//!
//! This module provides the command-line interface for vigil using clap's
//! derive API. Each command has its own argument struct with validation and
//! helpful error messages.
//!
//! # Commands
//!
//! - `report`: Filtered, sorted, paginated attendance table with totals
//! - `totals`: Aggregate counts for the filtered set
//! - `export`: CSV export of the filtered, sorted set
//! - `info`: Session and data-source information
//!
//! # Global Flags
//!
//! - `--json`: Output in JSON format (applies to all commands)
//! - `--data`: JSONL data file overriding the configured source
//!
//! # Example
//!
//! ```bash
//! vigil report --type regular --sort score -d desc
//! vigil report -q maria --last 30 --page 2
//! vigil totals --location "Santuário Principal"
//! vigil export --from 2025-09-01 --to 2025-09-30 -o september.csv
//! ```

mod args;
mod execute;
pub(crate) mod types;
mod validators;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

// Re-export argument structs
pub use args::{ExportArgs, FilterArgs, InfoArgs, ReportArgs, SortArgs, TotalsArgs};

// Re-export types
pub use types::{FrequencyBucketArg, SortDirectionArg, VisitorTypeArg};

// Re-export validators for external use
pub use validators::{parse_date, parse_page, parse_page_size, parse_sort_field};

use crate::app::App;
use crate::output::OutputMode;

/// Vigil - attendance report engine
///
/// Query presence-event records: filter, sort, paginate, aggregate, and
/// export to CSV. Records come from a JSONL data file or, with no
/// configuration at all, a built-in sample dataset.
#[derive(Parser, Debug)]
#[command(name = "vigil")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// JSONL data file overriding the configured record source
    #[arg(long, global = true, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show the attendance report table
    ///
    /// Applies the filter criteria, sorts when a sort field is given, and
    /// shows one page of results with aggregate totals for the whole
    /// filtered set.
    Report(ReportArgs),

    /// Show aggregate totals for the filtered set
    ///
    /// Counts per visitor type plus unresolved identities, computed over
    /// the records matching the filter criteria.
    Totals(TotalsArgs),

    /// Export the filtered, sorted records as CSV
    ///
    /// Writes a complete document (header plus one row per record) to a
    /// file or, when no output file is given, to stdout.
    Export(ExportArgs),

    /// Show session information
    ///
    /// Displays the record source, counts, load warnings, and the event
    /// date span.
    Info(InfoArgs),
}

impl Cli {
    /// Parse command-line arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Execute the parsed command.
    ///
    /// # Errors
    ///
    /// Returns an error when the session cannot be loaded or the command
    /// fails.
    pub async fn execute(self) -> Result<()> {
        let mode = if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };

        let working_dir = std::env::current_dir()?;
        let app = App::load(&working_dir, self.data.as_deref()).await?;

        match &self.command {
            Commands::Report(args) => execute::execute_report(&app, args, mode),
            Commands::Totals(args) => execute::execute_totals(&app, args, mode),
            Commands::Export(args) => execute::execute_export(&app, args, mode).await,
            Commands::Info(args) => execute::execute_info(&app, args, mode),
        }
    }
}
