//! CLI argument structs for all commands.
//!
//! Each command has its own argument struct with clap derive attributes
//! for parsing and validation. The filter flags shared by `report`,
//! `totals`, and `export` live in [`FilterArgs`] and are flattened into
//! each command.

use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

use super::types::{FrequencyBucketArg, SortDirectionArg, VisitorTypeArg};
use super::validators::{parse_date, parse_page, parse_page_size, parse_sort_field};
use crate::domain::SortField;

/// Filter flags shared by the querying commands
#[derive(Parser, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Free-text search against name or person ID (case-insensitive substring)
    #[arg(short = 'q', long)]
    pub search: Option<String>,

    /// Filter by exact venue label ("all" or empty means no filter)
    #[arg(short, long)]
    pub location: Option<String>,

    /// Filter by visitor type
    #[arg(short = 't', long = "type", value_enum)]
    pub visitor_type: Option<VisitorTypeArg>,

    /// Filter by attendance-frequency bucket
    #[arg(short, long, value_enum)]
    pub frequency: Option<FrequencyBucketArg>,

    /// Earliest event date to include (inclusive)
    #[arg(long, value_parser = parse_date)]
    pub from: Option<NaiveDate>,

    /// Latest event date to include (inclusive)
    #[arg(long, value_parser = parse_date)]
    pub to: Option<NaiveDate>,

    /// Quick preset: only events from the last N days (conflicts with --from/--to)
    #[arg(long, value_name = "DAYS", conflicts_with_all = ["from", "to"])]
    pub last: Option<u64>,
}

/// Sort flags shared by `report` and `export`
#[derive(Parser, Debug, Clone, Default)]
pub struct SortArgs {
    /// Sort field (id, name, type, location, date, time, count, score, last-seen)
    ///
    /// When omitted, records keep their source order.
    #[arg(short, long, value_parser = parse_sort_field)]
    pub sort: Option<SortField>,

    /// Sort direction
    #[arg(short = 'd', long, value_enum, default_value = "asc")]
    pub direction: SortDirectionArg,
}

/// Arguments for the `report` command
#[derive(Parser, Debug, Clone)]
pub struct ReportArgs {
    /// Filter flags
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Sort flags
    #[command(flatten)]
    pub sort: SortArgs,

    /// 1-based page number
    #[arg(short, long, value_parser = parse_page, default_value = "1")]
    pub page: u32,

    /// Records per page (overrides the configured default)
    #[arg(long, value_parser = parse_page_size)]
    pub page_size: Option<usize>,
}

/// Arguments for the `totals` command
#[derive(Parser, Debug, Clone)]
pub struct TotalsArgs {
    /// Filter flags
    #[command(flatten)]
    pub filter: FilterArgs,
}

/// Arguments for the `export` command
#[derive(Parser, Debug, Clone)]
pub struct ExportArgs {
    /// Filter flags
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Sort flags
    #[command(flatten)]
    pub sort: SortArgs,

    /// Output file; omit to write the CSV document to stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `info` command
#[derive(Parser, Debug, Clone)]
pub struct InfoArgs {}
