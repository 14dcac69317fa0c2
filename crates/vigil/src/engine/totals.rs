//! Aggregate totals over the filtered record set.

use serde::Serialize;

use crate::domain::{AttendanceRecord, VisitorType};

/// Counts grouped by visitor type, plus unresolved identities.
///
/// Totals are always computed from the *filtered* set, so the summary cards
/// agree with the table the user is looking at rather than with the whole
/// dataset. The per-type counts always sum to `total`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    /// Number of records in the filtered set.
    pub total: usize,

    /// Records classified as regular members.
    pub regular: usize,

    /// Records classified as new members.
    pub new: usize,

    /// Records classified as visitors.
    pub visitor: usize,

    /// Records classified as first-time converts.
    pub first_time_convert: usize,

    /// Records whose name equals the unknown-identity sentinel.
    pub unknown_names: usize,
}

/// Compute totals for a filtered set in a single pass.
///
/// `unknown_name` is the deployment's unresolved-identity sentinel
/// (configurable, defaults to [`DEFAULT_UNKNOWN_NAME`]).
///
/// [`DEFAULT_UNKNOWN_NAME`]: crate::domain::DEFAULT_UNKNOWN_NAME
#[must_use]
pub fn compute_totals(matched: &[AttendanceRecord], unknown_name: &str) -> Totals {
    matched.iter().fold(Totals::default(), |mut totals, record| {
        totals.total += 1;
        match record.visitor_type {
            VisitorType::Regular => totals.regular += 1,
            VisitorType::New => totals.new += 1,
            VisitorType::Visitor => totals.visitor += 1,
            VisitorType::FirstTimeConvert => totals.first_time_convert += 1,
        }
        if record.name == unknown_name {
            totals.unknown_names += 1;
        }
        totals
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RecordCriteria, DEFAULT_UNKNOWN_NAME};
    use crate::engine::apply_filters;
    use crate::source::sample_records;

    #[test]
    fn per_type_counts_sum_to_total() {
        let records = sample_records();
        let totals = compute_totals(&records, DEFAULT_UNKNOWN_NAME);

        assert_eq!(totals.total, records.len());
        assert_eq!(
            totals.regular + totals.new + totals.visitor + totals.first_time_convert,
            totals.total
        );
    }

    #[test]
    fn totals_reflect_the_filtered_set_not_the_source() {
        let records = sample_records();
        let criteria = RecordCriteria {
            visitor_type: Some(crate::domain::VisitorType::Regular),
            ..RecordCriteria::default()
        };

        let matched = apply_filters(&records, &criteria);
        let totals = compute_totals(&matched, DEFAULT_UNKNOWN_NAME);

        assert_eq!(totals.total, 3);
        assert_eq!(totals.regular, 3);
        assert_eq!(totals.new, 0);
        assert_eq!(totals.visitor, 0);
        assert_eq!(totals.first_time_convert, 0);
    }

    #[test]
    fn unknown_names_are_counted_against_the_sentinel() {
        let mut records = sample_records();
        records[1].name = DEFAULT_UNKNOWN_NAME.to_string();
        records[3].name = DEFAULT_UNKNOWN_NAME.to_string();

        let totals = compute_totals(&records, DEFAULT_UNKNOWN_NAME);
        assert_eq!(totals.unknown_names, 2);

        // A different deployment sentinel counts nothing here.
        let totals = compute_totals(&records, "desconhecido");
        assert_eq!(totals.unknown_names, 0);
    }

    #[test]
    fn empty_set_has_zero_totals() {
        assert_eq!(
            compute_totals(&[], DEFAULT_UNKNOWN_NAME),
            Totals::default()
        );
    }
}
