//! Filtering: the AND of all supplied criteria.

use crate::domain::{AttendanceRecord, RecordCriteria};

/// Select the records matching every supplied criterion.
///
/// The result is a subsequence of `records`: relative order is preserved
/// and the input is never mutated. With no criteria supplied the result
/// equals the input, so filtering is idempotent.
///
/// Matching rules:
/// - `search`: case-insensitive substring match against name OR person ID
/// - `location`, `visitor_type`, `frequency`: exact equality
/// - `date_from`/`date_to`: inclusive bounds on the event date; an absent
///   bound imposes no constraint
///
/// An inverted date range (`from` after `to`) matches nothing. No date can
/// satisfy both bounds, so the empty result falls out of the comparison
/// rather than being a special case.
#[must_use]
pub fn apply_filters(
    records: &[AttendanceRecord],
    criteria: &RecordCriteria,
) -> Vec<AttendanceRecord> {
    if criteria.is_empty() {
        return records.to_vec();
    }

    let search = criteria.search.as_deref().map(str::to_lowercase);

    let matched: Vec<AttendanceRecord> = records
        .iter()
        .filter(|record| matches(record, criteria, search.as_deref()))
        .cloned()
        .collect();

    tracing::debug!(
        input = records.len(),
        matched = matched.len(),
        "applied filter criteria"
    );

    matched
}

fn matches(record: &AttendanceRecord, criteria: &RecordCriteria, search: Option<&str>) -> bool {
    if let Some(needle) = search {
        let name_hit = record.name.to_lowercase().contains(needle);
        let id_hit = record.person_id.as_str().to_lowercase().contains(needle);
        if !name_hit && !id_hit {
            return false;
        }
    }

    if let Some(location) = &criteria.location {
        if record.location != *location {
            return false;
        }
    }

    if let Some(visitor_type) = criteria.visitor_type {
        if record.visitor_type != visitor_type {
            return false;
        }
    }

    if let Some(frequency) = criteria.frequency {
        if record.frequency_bucket() != frequency {
            return false;
        }
    }

    if let Some(from) = criteria.date_from {
        if record.event_date < from {
            return false;
        }
    }

    if let Some(to) = criteria.date_to {
        if record.event_date > to {
            return false;
        }
    }

    true
}
