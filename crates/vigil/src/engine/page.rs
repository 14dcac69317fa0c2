//! Page slicing over an ordered result set.

use crate::domain::AttendanceRecord;

/// One page of an ordered result set, plus the page count.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Records on the requested page, in order. Empty when the requested
    /// page lies beyond the last page.
    pub records: Vec<AttendanceRecord>,

    /// Total number of pages, at least 1 even for an empty result set.
    pub total_pages: u32,

    /// The requested 1-based page number, clamped up to 1.
    pub page: u32,

    /// Size of the full (unpaginated) result set.
    pub total_records: usize,
}

/// Slice out one page of `ordered`.
///
/// `total_pages` is `ceil(len / page_size)` with a floor of 1, so an empty
/// result set still reports one (empty) page. A page number beyond the end
/// yields an empty slice, never an error; callers are expected to reset to
/// page 1 when the criteria change, but the engine does not fault when
/// they don't.
///
/// # Panics
///
/// Panics if `page_size` is 0.
#[must_use]
pub fn paginate(ordered: &[AttendanceRecord], page: u32, page_size: usize) -> Page {
    assert!(page_size > 0, "page_size must be at least 1");

    let page = page.max(1);
    let total_pages = u32::try_from(ordered.len().div_ceil(page_size))
        .unwrap_or(u32::MAX)
        .max(1);

    let start = (page as usize - 1).saturating_mul(page_size);
    let records = if start >= ordered.len() {
        Vec::new()
    } else {
        let end = (start + page_size).min(ordered.len());
        ordered[start..end].to_vec()
    };

    Page {
        records,
        total_pages,
        page,
        total_records: ordered.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PersonId, Period, VisitorType};
    use chrono::{NaiveDate, NaiveTime};

    fn records(n: usize) -> Vec<AttendanceRecord> {
        (0..n)
            .map(|i| AttendanceRecord {
                person_id: PersonId::new(format!("FP{i:03}")),
                name: format!("Person {i}"),
                visitor_type: VisitorType::Regular,
                last_attendance_date: None,
                recent_attendance_count: 0,
                event_id: "EV-1".to_string(),
                location: "Auditório".to_string(),
                event_date: NaiveDate::from_ymd_opt(2025, 9, 21).unwrap(),
                event_time: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
                period: Period::Morning,
                is_first_event: false,
                match_score: 90.0,
                face_clip_link: None,
            })
            .collect()
    }

    #[test]
    fn twenty_three_records_make_three_pages_of_ten() {
        let all = records(23);

        let page3 = paginate(&all, 3, 10);
        assert_eq!(page3.total_pages, 3);
        assert_eq!(page3.records.len(), 3);

        let page4 = paginate(&all, 4, 10);
        assert_eq!(page4.total_pages, 3);
        assert!(page4.records.is_empty());
    }

    #[test]
    fn empty_set_still_has_one_page() {
        let page = paginate(&[], 1, 10);
        assert_eq!(page.total_pages, 1);
        assert!(page.records.is_empty());
        assert_eq!(page.total_records, 0);
    }

    #[test]
    fn exact_multiple_has_no_trailing_page() {
        let all = records(20);
        assert_eq!(paginate(&all, 1, 10).total_pages, 2);
        assert_eq!(paginate(&all, 2, 10).records.len(), 10);
        assert!(paginate(&all, 3, 10).records.is_empty());
    }

    #[test]
    fn concatenated_pages_reconstruct_the_input() {
        let all = records(23);
        let total_pages = paginate(&all, 1, 10).total_pages;

        let mut rebuilt = Vec::new();
        for page in 1..=total_pages {
            rebuilt.extend(paginate(&all, page, 10).records);
        }
        assert_eq!(rebuilt, all);
    }

    #[test]
    fn page_zero_is_treated_as_page_one() {
        let all = records(5);
        assert_eq!(paginate(&all, 0, 10), paginate(&all, 1, 10));
    }

    #[test]
    #[should_panic(expected = "page_size must be at least 1")]
    fn zero_page_size_is_a_programming_error() {
        let _ = paginate(&[], 1, 0);
    }
}
