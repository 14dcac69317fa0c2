//! Output formatting for CLI commands.
//!
//! This module provides utilities for formatting command output in both
//! human-readable text format and JSON format for programmatic use.
//!
//! Submodules:
//! - [`color`]: Color and styling helpers (semantic colors, badges)

pub mod color;

use std::env;
use std::io::{self, Write};

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::QueryState;
use crate::engine::{Page, Totals};

use color::{bold, colorize_frequency, colorize_id, dimmed};

// ============================================================================
// Output Configuration
// ============================================================================

const DEFAULT_TERMINAL_WIDTH: u16 = 80;
const DEFAULT_MAX_CONTENT_WIDTH: usize = 100;

/// Configuration for output formatting.
///
/// Holds settings that control how output is formatted, including content
/// width limits, ASCII fallback mode, and color output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Maximum content width for the report table and wrapped text.
    pub max_width: usize,
    /// Whether to use ASCII-only characters instead of Unicode.
    pub use_ascii: bool,
    /// Whether to use colors in output.
    pub use_colors: bool,
}

impl OutputConfig {
    /// Create a new OutputConfig with explicit values.
    #[must_use]
    pub fn new(max_width: usize, use_ascii: bool, use_colors: bool) -> Self {
        Self {
            max_width,
            use_ascii,
            use_colors,
        }
    }

    /// Create an OutputConfig by reading from environment variables.
    ///
    /// Reads:
    /// - `VIGIL_MAX_WIDTH`: Maximum content width (default: 100)
    /// - `VIGIL_ASCII`: Set to "1" or "true" for ASCII-only output (default: false)
    /// - `NO_COLOR`: Standard env var to disable colors (any value disables colors)
    /// - `VIGIL_COLOR`: Set to "0" or "false" to disable colors (default: true)
    #[must_use]
    pub fn from_env() -> Self {
        let max_width = match env::var("VIGIL_MAX_WIDTH") {
            Ok(s) if !s.is_empty() => match s.parse() {
                Ok(width) => width,
                Err(_) => {
                    tracing::warn!(
                        env_var = "VIGIL_MAX_WIDTH",
                        value = %s,
                        default = DEFAULT_MAX_CONTENT_WIDTH,
                        "Invalid value, using default"
                    );
                    DEFAULT_MAX_CONTENT_WIDTH
                }
            },
            _ => DEFAULT_MAX_CONTENT_WIDTH,
        };

        let use_ascii = match env::var("VIGIL_ASCII") {
            Ok(v) if v == "1" || v.eq_ignore_ascii_case("true") => true,
            Ok(v) if v == "0" || v.eq_ignore_ascii_case("false") || v.is_empty() => false,
            Ok(v) => {
                tracing::warn!(
                    env_var = "VIGIL_ASCII",
                    value = %v,
                    "Invalid value (expected '1', 'true', '0', or 'false'), using default"
                );
                false
            }
            Err(_) => false,
        };

        // Respect NO_COLOR standard (https://no-color.org/)
        // Also support VIGIL_COLOR for explicit control
        let use_colors = env::var("NO_COLOR").is_err()
            && env::var("VIGIL_COLOR")
                .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
                .unwrap_or(true);

        Self {
            max_width,
            use_ascii,
            use_colors,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_CONTENT_WIDTH,
            use_ascii: false,
            use_colors: true,
        }
    }
}

// ============================================================================
// Terminal Width Detection
// ============================================================================

/// Get the current terminal width, falling back to default if detection fails.
fn get_terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(DEFAULT_TERMINAL_WIDTH as usize)
}

/// Output format mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text format
    Text,
    /// JSON format for programmatic use
    Json,
}

// ============================================================================
// Public Dispatch Functions
// ============================================================================

/// Print any serializable value as pretty JSON.
///
/// # Errors
///
/// Returns an error if serialization or writing to stdout fails.
pub fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(handle, "{json}")
}

/// Print a report page with its totals footer.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn print_report(page: &Page, totals: &Totals, state: &QueryState, mode: OutputMode) -> io::Result<()> {
    match mode {
        OutputMode::Json => print_json(&serde_json::json!({
            "records": page.records,
            "page": page.page,
            "total_pages": page.total_pages,
            "total_records": page.total_records,
            "totals": totals,
        })),
        OutputMode::Text => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            let config = OutputConfig::from_env();
            print_report_text(&mut handle, page, totals, state, &config)
        }
    }
}

/// Print aggregate totals on their own.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn print_totals(totals: &Totals, mode: OutputMode) -> io::Result<()> {
    match mode {
        OutputMode::Json => print_json(totals),
        OutputMode::Text => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            let config = OutputConfig::from_env();
            print_totals_text(&mut handle, totals, &config)
        }
    }
}

/// Summary of the loaded session, for the `info` command.
#[derive(Debug, Serialize)]
pub struct SessionInfo {
    /// Where the records came from.
    pub source: String,
    /// Number of records loaded.
    pub records: usize,
    /// Number of records skipped with warnings during load.
    pub load_warnings: usize,
    /// Records per report page.
    pub page_size: usize,
    /// Earliest event date in the set, if any records exist.
    pub first_event_date: Option<NaiveDate>,
    /// Latest event date in the set, if any records exist.
    pub last_event_date: Option<NaiveDate>,
}

/// Print session information.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn print_info(info: &SessionInfo, mode: OutputMode) -> io::Result<()> {
    match mode {
        OutputMode::Json => print_json(info),
        OutputMode::Text => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            let config = OutputConfig::from_env();

            writeln!(handle, "{}", bold("Vigil Session", &config))?;
            writeln!(handle, "{}", bold("=============", &config))?;
            writeln!(handle)?;
            writeln!(handle, "Source:     {}", color::info(&info.source, &config))?;
            writeln!(handle, "Records:    {}", info.records)?;
            if info.load_warnings > 0 {
                writeln!(
                    handle,
                    "Warnings:   {}",
                    color::warning(&info.load_warnings.to_string(), &config)
                )?;
            }
            writeln!(handle, "Page size:  {}", info.page_size)?;
            if let (Some(first), Some(last)) = (info.first_event_date, info.last_event_date) {
                writeln!(handle, "Event span: {first} to {last}")?;
            }
            Ok(())
        }
    }
}

// ============================================================================
// Text Rendering
// ============================================================================

/// Table column order for the text report.
const TABLE_COLUMNS: [&str; 8] = [
    "ID", "Name", "Type", "Location", "Date", "Time", "Score", "Freq",
];

/// Per-column width cap, keeping the table inside a typical terminal.
const COLUMN_CAPS: [usize; 8] = [10, 22, 12, 22, 10, 5, 5, 6];

fn print_report_text<W: Write>(
    w: &mut W,
    page: &Page,
    totals: &Totals,
    state: &QueryState,
    config: &OutputConfig,
) -> io::Result<()> {
    let width = config.max_width.min(get_terminal_width());

    // Active filter/sort summary line, wrapped to the content width.
    let summary = describe_state(state);
    if !summary.is_empty() {
        for line in textwrap::wrap(&summary, width) {
            writeln!(w, "{}", dimmed(&line, config))?;
        }
        writeln!(w)?;
    }

    if page.records.is_empty() {
        writeln!(w, "No records on this page.")?;
    } else {
        // Plain cells first; widths are computed on the uncolored text so
        // escape codes never skew the padding.
        let rows: Vec<[String; 8]> = page
            .records
            .iter()
            .map(|r| {
                [
                    r.person_id.to_string(),
                    r.name.clone(),
                    r.visitor_type.to_string(),
                    r.location.clone(),
                    r.event_date.format("%Y-%m-%d").to_string(),
                    r.event_time.format("%H:%M").to_string(),
                    format!("{:.1}", r.match_score),
                    r.frequency_bucket().to_string(),
                ]
            })
            .collect();

        let mut widths = [0usize; 8];
        for (i, header) in TABLE_COLUMNS.iter().enumerate() {
            widths[i] = header.chars().count();
        }
        for row in &rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count()).min(COLUMN_CAPS[i]);
            }
        }

        let header_line = TABLE_COLUMNS
            .iter()
            .enumerate()
            .map(|(i, h)| pad(h, widths[i], config))
            .collect::<Vec<_>>()
            .join("  ");
        writeln!(w, "{}", bold(&header_line, config))?;

        for (row, record) in rows.iter().zip(&page.records) {
            let mut cells: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(i, cell)| pad(cell, widths[i], config))
                .collect();
            cells[0] = colorize_id(&cells[0], config);
            cells[7] = colorize_frequency(record.frequency_bucket(), config);
            writeln!(w, "{}", cells.join("  "))?;
        }
    }

    writeln!(w)?;
    writeln!(
        w,
        "Showing {} of {} records (page {} of {})",
        page.records.len(),
        page.total_records,
        page.page,
        page.total_pages
    )?;
    print_totals_text(w, totals, config)
}

fn print_totals_text<W: Write>(w: &mut W, totals: &Totals, config: &OutputConfig) -> io::Result<()> {
    writeln!(
        w,
        "{} {} regular, {} new, {} visitor, {} first-time convert, {} unknown identity",
        bold("Totals:", config),
        totals.regular,
        totals.new,
        totals.visitor,
        totals.first_time_convert,
        totals.unknown_names,
    )
}

/// One-line description of the active criteria and sort, empty when the
/// state imposes nothing.
fn describe_state(state: &QueryState) -> String {
    let criteria = state.criteria();
    let mut parts = Vec::new();

    if let Some(search) = &criteria.search {
        parts.push(format!("search=\"{search}\""));
    }
    if let Some(location) = &criteria.location {
        parts.push(format!("location=\"{location}\""));
    }
    if let Some(visitor_type) = criteria.visitor_type {
        parts.push(format!("type={visitor_type}"));
    }
    if let Some(frequency) = criteria.frequency {
        parts.push(format!("frequency={frequency}"));
    }
    match (criteria.date_from, criteria.date_to) {
        (Some(from), Some(to)) => parts.push(format!("date={from}..{to}")),
        (Some(from), None) => parts.push(format!("date>={from}")),
        (None, Some(to)) => parts.push(format!("date<={to}")),
        (None, None) => {}
    }
    if let Some((field, direction)) = state.sort() {
        parts.push(format!("sort={field} {direction}"));
    }

    if parts.is_empty() {
        String::new()
    } else {
        format!("Filters: {}", parts.join(", "))
    }
}

/// Pad or truncate a cell to an exact width (in chars).
fn pad(cell: &str, width: usize, config: &OutputConfig) -> String {
    let count = cell.chars().count();
    if count <= width {
        let mut padded = cell.to_string();
        padded.extend(std::iter::repeat_n(' ', width - count));
        return padded;
    }

    let ellipsis = if config.use_ascii { "..." } else { "…" };
    let keep = width.saturating_sub(ellipsis.chars().count());
    let mut truncated: String = cell.chars().take(keep).collect();
    truncated.push_str(ellipsis);
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RecordCriteria, SortField};
    use crate::engine::{apply_filters, compute_totals, paginate};
    use crate::source::sample_records;

    fn plain() -> OutputConfig {
        OutputConfig::new(100, true, false)
    }

    #[test]
    fn pad_fills_short_cells() {
        assert_eq!(pad("abc", 5, &plain()), "abc  ");
    }

    #[test]
    fn pad_truncates_long_cells_with_ellipsis() {
        assert_eq!(pad("abcdefgh", 5, &plain()), "ab...");
        let unicode = OutputConfig::new(100, false, false);
        assert_eq!(pad("abcdefgh", 5, &unicode), "abcd…");
    }

    #[test]
    fn describe_state_is_empty_for_defaults() {
        assert_eq!(describe_state(&QueryState::new()), "");
    }

    #[test]
    fn describe_state_lists_active_constraints() {
        let mut state = QueryState::new();
        state.set_criteria(RecordCriteria {
            search: Some("maria".to_string()),
            ..RecordCriteria::default()
        });
        state.toggle_sort(SortField::MatchScore);

        let summary = describe_state(&state);
        assert!(summary.contains("search=\"maria\""));
        assert!(summary.contains("sort=score asc"));
    }

    #[test]
    fn report_text_renders_header_and_footer() {
        let records = sample_records();
        let matched = apply_filters(&records, &RecordCriteria::default());
        let totals = compute_totals(&matched, "unknown");
        let page = paginate(&matched, 1, 10);

        let mut buffer = Vec::new();
        print_report_text(&mut buffer, &page, &totals, &QueryState::new(), &plain()).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("ID"));
        assert!(text.contains("João Silva"));
        assert!(text.contains("Showing 5 of 5 records (page 1 of 1)"));
        assert!(text.contains("3 regular"));
    }

    #[test]
    fn empty_page_renders_placeholder() {
        let totals = compute_totals(&[], "unknown");
        let page = paginate(&[], 1, 10);

        let mut buffer = Vec::new();
        print_report_text(&mut buffer, &page, &totals, &QueryState::new(), &plain()).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("No records on this page."));
        assert!(text.contains("Showing 0 of 0 records (page 1 of 1)"));
    }
}
