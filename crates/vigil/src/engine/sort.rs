//! Stable, type-aware sorting over a single record field.

use std::cmp::Ordering;

use crate::domain::{AttendanceRecord, SortDirection, SortField};

/// Sort records by one field in the given direction.
///
/// The sort is stable: records with equal keys keep their relative input
/// order, in both directions. String fields compare case-insensitively;
/// date, time, and numeric fields compare in natural order. The direction
/// is an explicit parameter; toggling on repeated clicks is the caller's
/// state transition (see [`QueryState::toggle_sort`]), which keeps this
/// function pure.
///
/// [`SortField`] is a closed enum, so a field outside the record schema is
/// unrepresentable here; unknown field names are rejected when parsed.
///
/// [`QueryState::toggle_sort`]: crate::domain::QueryState::toggle_sort
#[must_use]
pub fn apply_sort(
    mut records: Vec<AttendanceRecord>,
    field: SortField,
    direction: SortDirection,
) -> Vec<AttendanceRecord> {
    tracing::debug!(%field, %direction, count = records.len(), "sorting records");

    records.sort_by(|a, b| {
        let ordering = compare(a, b, field);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    records
}

/// Compare two records on a field, ascending.
fn compare(a: &AttendanceRecord, b: &AttendanceRecord, field: SortField) -> Ordering {
    match field {
        SortField::PersonId => case_insensitive(a.person_id.as_str(), b.person_id.as_str()),
        SortField::Name => case_insensitive(&a.name, &b.name),
        SortField::VisitorType => a.visitor_type.to_string().cmp(&b.visitor_type.to_string()),
        SortField::Location => case_insensitive(&a.location, &b.location),
        SortField::EventDate => a.event_date.cmp(&b.event_date),
        SortField::EventTime => a.event_time.cmp(&b.event_time),
        SortField::RecentCount => a.recent_attendance_count.cmp(&b.recent_attendance_count),
        // total_cmp gives a total order over f64; validate() keeps NaN and
        // infinities out of loaded data anyway.
        SortField::MatchScore => a.match_score.total_cmp(&b.match_score),
        // Absent previous-attendance dates sort before any present date.
        SortField::LastAttendance => a.last_attendance_date.cmp(&b.last_attendance_date),
    }
}

fn case_insensitive(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
