//! CSV serialization of an ordered result set.
//!
//! Produces document *content* only; delivery (file write, stdout) is the
//! caller's concern, via [`vigil_csv::CsvWriter`]. The output is
//! byte-stable for identical input, which keeps golden-file tests honest.

use vigil_csv::format_row;

use crate::domain::AttendanceRecord;

/// Export column order, matching the report table's display order.
pub const EXPORT_HEADER: [&str; 13] = [
    "person_id",
    "name",
    "visitor_type",
    "last_attendance_date",
    "recent_attendance_count",
    "event_id",
    "location",
    "event_date",
    "event_time",
    "period",
    "is_first_event",
    "match_score",
    "face_clip_link",
];

/// Serialize an ordered record set into a CSV document.
///
/// The header row is always present, in [`EXPORT_HEADER`] order; an empty
/// input yields a header-only document. Every field of every record is
/// serialized: dates as ISO-8601 (`YYYY-MM-DD`), times as `HH:MM`, and
/// absent optional values as empty fields.
#[must_use]
pub fn export_rows(ordered: &[AttendanceRecord]) -> String {
    let mut document = format_row(&EXPORT_HEADER);
    for record in ordered {
        document.push_str(&format_row(&record_fields(record)));
    }

    tracing::debug!(rows = ordered.len(), bytes = document.len(), "exported records");
    document
}

fn record_fields(record: &AttendanceRecord) -> [String; 13] {
    [
        record.person_id.to_string(),
        record.name.clone(),
        record.visitor_type.to_string(),
        record
            .last_attendance_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
        record.recent_attendance_count.to_string(),
        record.event_id.clone(),
        record.location.clone(),
        record.event_date.format("%Y-%m-%d").to_string(),
        record.event_time.format("%H:%M").to_string(),
        record.period.to_string(),
        record.is_first_event.to_string(),
        record.match_score.to_string(),
        record.face_clip_link.clone().unwrap_or_default(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PersonId, Period, VisitorType};
    use chrono::{NaiveDate, NaiveTime};

    fn record() -> AttendanceRecord {
        AttendanceRecord {
            person_id: PersonId::new("FP002"),
            name: "Maria Santos".to_string(),
            visitor_type: VisitorType::Visitor,
            last_attendance_date: None,
            recent_attendance_count: 1,
            event_id: "EV-2025-0920-B".to_string(),
            location: "Sala de Oração".to_string(),
            event_date: NaiveDate::from_ymd_opt(2025, 9, 20).unwrap(),
            event_time: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
            period: Period::Evening,
            is_first_event: true,
            match_score: 95.4,
            face_clip_link: None,
        }
    }

    #[test]
    fn empty_set_exports_header_only() {
        let document = export_rows(&[]);
        assert_eq!(
            document,
            "person_id,name,visitor_type,last_attendance_date,recent_attendance_count,\
             event_id,location,event_date,event_time,period,is_first_event,match_score,\
             face_clip_link\n"
        );
    }

    #[test]
    fn absent_values_serialize_as_empty_fields() {
        let document = export_rows(&[record()]);
        let data_row = document.lines().nth(1).unwrap();
        assert_eq!(
            data_row,
            "FP002,Maria Santos,visitor,,1,EV-2025-0920-B,Sala de Oração,2025-09-20,19:00,evening,true,95.4,"
        );
    }

    #[test]
    fn export_is_byte_stable() {
        let records = vec![record(), record()];
        assert_eq!(export_rows(&records), export_rows(&records));
    }

    #[test]
    fn fields_with_commas_are_quoted() {
        let mut r = record();
        r.location = "Sala 1, Anexo".to_string();
        let document = export_rows(&[r]);
        assert!(document.contains("\"Sala 1, Anexo\""));
    }

    #[test]
    fn one_data_row_per_record() {
        let records = vec![record(), record(), record()];
        let document = export_rows(&records);
        assert_eq!(document.lines().count(), 4);
        assert!(document.ends_with('\n'));
    }
}
