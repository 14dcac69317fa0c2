//! Command execution logic.
//!
//! This module contains the implementation of all CLI commands. Each
//! command builds a [`QueryState`] from its arguments, runs the pure
//! engine pipeline over the session's records, and hands the result to the
//! output layer.

use anyhow::Result;
use chrono::{Days, Utc};

use super::args::{ExportArgs, FilterArgs, InfoArgs, ReportArgs, SortArgs, TotalsArgs};
use crate::app::App;
use crate::domain::{selector, AttendanceRecord, QueryState, RecordCriteria, SortDirection};
use crate::engine;
use crate::output::{self, OutputMode, SessionInfo};

/// Build filter criteria from CLI flags.
///
/// Categorical selectors go through [`selector`] so that "all" and empty
/// values mean "no filter", exactly like an unset flag. Free-text search is
/// only dropped when blank; searching for the literal text "all" is valid.
fn criteria_from_args(filter: &FilterArgs) -> RecordCriteria {
    let (date_from, date_to) = match filter.last {
        Some(days) => {
            let today = Utc::now().date_naive();
            (today.checked_sub_days(Days::new(days)), Some(today))
        }
        None => (filter.from, filter.to),
    };

    RecordCriteria {
        search: filter
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToString::to_string),
        location: filter.location.as_deref().and_then(selector),
        visitor_type: filter.visitor_type.map(Into::into),
        date_from,
        date_to,
        frequency: filter.frequency.map(Into::into),
    }
}

/// Build the full query state for a command invocation.
fn state_from_args(filter: &FilterArgs, sort: &SortArgs, page: u32) -> QueryState {
    let mut state = QueryState::new();
    state.set_criteria(criteria_from_args(filter));
    state.set_sort(
        sort.sort
            .map(|field| (field, SortDirection::from(sort.direction))),
    );
    // After set_criteria so the explicit page survives the reset.
    state.set_page(page);
    state
}

/// Run the filter -> sort pipeline for a state.
fn filtered_and_ordered(app: &App, state: &QueryState) -> Vec<AttendanceRecord> {
    let matched = engine::apply_filters(app.records(), state.criteria());
    match state.sort() {
        Some((field, direction)) => engine::apply_sort(matched, field, direction),
        None => matched,
    }
}

/// Execute the report command
pub fn execute_report(app: &App, args: &ReportArgs, mode: OutputMode) -> Result<()> {
    let state = state_from_args(&args.filter, &args.sort, args.page);
    let page_size = args.page_size.unwrap_or_else(|| app.page_size());

    let matched = engine::apply_filters(app.records(), state.criteria());
    let totals = engine::compute_totals(&matched, app.unknown_name());
    let ordered = match state.sort() {
        Some((field, direction)) => engine::apply_sort(matched, field, direction),
        None => matched,
    };
    let page = engine::paginate(&ordered, state.page(), page_size);

    output::print_report(&page, &totals, &state, mode)?;
    Ok(())
}

/// Execute the totals command
pub fn execute_totals(app: &App, args: &TotalsArgs, mode: OutputMode) -> Result<()> {
    let mut state = QueryState::new();
    state.set_criteria(criteria_from_args(&args.filter));

    let matched = engine::apply_filters(app.records(), state.criteria());
    let totals = engine::compute_totals(&matched, app.unknown_name());

    output::print_totals(&totals, mode)?;
    Ok(())
}

/// Execute the export command
pub async fn execute_export(app: &App, args: &ExportArgs, mode: OutputMode) -> Result<()> {
    let state = state_from_args(&args.filter, &args.sort, 1);
    let ordered = filtered_and_ordered(app, &state);
    let document = engine::export_rows(&ordered);

    match &args.output {
        Some(path) => {
            let file = tokio::fs::File::create(path).await?;
            let mut writer = vigil_csv::CsvWriter::new(file);
            writer.write_document(&document).await?;
            writer.flush().await?;

            match mode {
                OutputMode::Json => output::print_json(&serde_json::json!({
                    "exported": ordered.len(),
                    "path": path.display().to_string(),
                }))?,
                OutputMode::Text => {
                    println!("Exported {} records to {}", ordered.len(), path.display());
                }
            }
        }
        None => {
            // The document goes to stdout verbatim so it can be piped; the
            // --json flag has nothing to add here.
            print!("{document}");
        }
    }
    Ok(())
}

/// Execute the info command
pub fn execute_info(app: &App, _args: &InfoArgs, mode: OutputMode) -> Result<()> {
    let info = SessionInfo {
        source: app.source().to_string(),
        records: app.records().len(),
        load_warnings: app.warnings().len(),
        page_size: app.page_size(),
        first_event_date: app.records().iter().map(|r| r.event_date).min(),
        last_event_date: app.records().iter().map(|r| r.event_date).max(),
    };

    output::print_info(&info, mode)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::{SortDirectionArg, VisitorTypeArg};
    use crate::domain::{SortField, VisitorType};

    #[test]
    fn selector_flags_normalize_all_and_empty() {
        let filter = FilterArgs {
            location: Some("all".to_string()),
            ..FilterArgs::default()
        };
        assert_eq!(criteria_from_args(&filter).location, None);

        let filter = FilterArgs {
            location: Some("  ".to_string()),
            ..FilterArgs::default()
        };
        assert_eq!(criteria_from_args(&filter).location, None);

        let filter = FilterArgs {
            location: Some("Auditório".to_string()),
            ..FilterArgs::default()
        };
        assert_eq!(
            criteria_from_args(&filter).location,
            Some("Auditório".to_string())
        );
    }

    #[test]
    fn search_keeps_the_literal_all() {
        let filter = FilterArgs {
            search: Some("all".to_string()),
            ..FilterArgs::default()
        };
        assert_eq!(criteria_from_args(&filter).search, Some("all".to_string()));

        let filter = FilterArgs {
            search: Some("   ".to_string()),
            ..FilterArgs::default()
        };
        assert_eq!(criteria_from_args(&filter).search, None);
    }

    #[test]
    fn last_preset_builds_an_inclusive_range_ending_today() {
        let filter = FilterArgs {
            last: Some(7),
            ..FilterArgs::default()
        };
        let criteria = criteria_from_args(&filter);

        let today = Utc::now().date_naive();
        assert_eq!(criteria.date_to, Some(today));
        assert_eq!(criteria.date_from, today.checked_sub_days(Days::new(7)));
    }

    #[test]
    fn state_keeps_explicit_page_and_sort() {
        let filter = FilterArgs {
            visitor_type: Some(VisitorTypeArg::Regular),
            ..FilterArgs::default()
        };
        let sort = SortArgs {
            sort: Some(SortField::MatchScore),
            direction: SortDirectionArg::Descending,
        };

        let state = state_from_args(&filter, &sort, 3);
        assert_eq!(state.page(), 3);
        assert_eq!(
            state.sort(),
            Some((SortField::MatchScore, SortDirection::Descending))
        );
        assert_eq!(
            state.criteria().visitor_type,
            Some(VisitorType::Regular)
        );
    }
}
