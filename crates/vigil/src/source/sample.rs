//! Built-in demo dataset.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};

use super::{LoadWarning, RecordSource};
use crate::domain::{AttendanceRecord, Period, PersonId, VisitorType};
use crate::error::Result;

/// Record source backed by the built-in demo dataset.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleSource;

#[async_trait]
impl RecordSource for SampleSource {
    async fn load(&self) -> Result<(Vec<AttendanceRecord>, Vec<LoadWarning>)> {
        Ok((sample_records(), Vec::new()))
    }

    fn describe(&self) -> String {
        "built-in sample data".to_string()
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid literal date")
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid literal time")
}

/// The built-in demo record set.
///
/// Five records over four venues and a weekend of events, covering every
/// frequency bucket, a first-time attendee without a previous date, and a
/// mix of visitor types.
#[must_use]
pub fn sample_records() -> Vec<AttendanceRecord> {
    vec![
        AttendanceRecord {
            person_id: PersonId::new("FP001"),
            name: "João Silva".to_string(),
            visitor_type: VisitorType::Regular,
            last_attendance_date: Some(date(2025, 9, 14)),
            recent_attendance_count: 11,
            event_id: "EV-2025-0921-A".to_string(),
            location: "Santuário Principal".to_string(),
            event_date: date(2025, 9, 21),
            event_time: time(9, 30),
            period: Period::Morning,
            is_first_event: false,
            match_score: 98.2,
            face_clip_link: Some("https://clips.example/fp001/ev-0921.jpg".to_string()),
        },
        AttendanceRecord {
            person_id: PersonId::new("FP002"),
            name: "Maria Santos".to_string(),
            visitor_type: VisitorType::Visitor,
            last_attendance_date: None,
            recent_attendance_count: 1,
            event_id: "EV-2025-0920-B".to_string(),
            location: "Sala de Oração".to_string(),
            event_date: date(2025, 9, 20),
            event_time: time(19, 0),
            period: Period::Evening,
            is_first_event: true,
            match_score: 95.4,
            face_clip_link: None,
        },
        AttendanceRecord {
            person_id: PersonId::new("FP003"),
            name: "Pedro Costa".to_string(),
            visitor_type: VisitorType::Regular,
            last_attendance_date: Some(date(2025, 9, 7)),
            recent_attendance_count: 5,
            event_id: "EV-2025-0921-A".to_string(),
            location: "Santuário Principal".to_string(),
            event_date: date(2025, 9, 21),
            event_time: time(9, 30),
            period: Period::Morning,
            is_first_event: false,
            match_score: 92.7,
            face_clip_link: Some("https://clips.example/fp003/ev-0921.jpg".to_string()),
        },
        AttendanceRecord {
            person_id: PersonId::new("FP004"),
            name: "Ana Oliveira".to_string(),
            visitor_type: VisitorType::FirstTimeConvert,
            last_attendance_date: Some(date(2025, 9, 14)),
            recent_attendance_count: 4,
            event_id: "EV-2025-0921-C".to_string(),
            location: "Sala 1".to_string(),
            event_date: date(2025, 9, 21),
            event_time: time(10, 30),
            period: Period::Morning,
            is_first_event: false,
            match_score: 97.1,
            face_clip_link: None,
        },
        AttendanceRecord {
            person_id: PersonId::new("FP005"),
            name: "Carlos Mendes".to_string(),
            visitor_type: VisitorType::Regular,
            last_attendance_date: Some(date(2025, 8, 31)),
            recent_attendance_count: 2,
            event_id: "EV-2025-0919-D".to_string(),
            location: "Auditório".to_string(),
            event_date: date(2025, 9, 19),
            event_time: time(20, 0),
            period: Period::Evening,
            is_first_event: false,
            match_score: 91.5,
            face_clip_link: Some("https://clips.example/fp005/ev-0919.jpg".to_string()),
        },
    ]
}
