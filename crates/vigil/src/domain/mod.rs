//! Domain types for attendance reporting.
//!
//! This module contains the core domain types for the vigil report engine:
//! the attendance record itself, the closed enums it references, the filter
//! criteria, and the presentation-side query state.

use crate::error::Error;
use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lower bound of a valid match score.
pub const MATCH_SCORE_MIN: f64 = 0.0;

/// Upper bound of a valid match score.
pub const MATCH_SCORE_MAX: f64 = 100.0;

/// Trailing window, in days, over which `recent_attendance_count` is kept.
pub const RECENT_WINDOW_DAYS: u32 = 90;

/// Minimum attendance count (within the trailing window) for the High bucket.
pub const HIGH_FREQUENCY_MIN: u32 = 8;

/// Minimum attendance count (within the trailing window) for the Medium bucket.
pub const MEDIUM_FREQUENCY_MIN: u32 = 3;

/// Default sentinel used for records whose identity was not resolved.
pub const DEFAULT_UNKNOWN_NAME: &str = "unknown";

/// Identifier for a person
///
/// Unique per person, not per record: one person accumulates many
/// attendance records over time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonId(pub String);

impl PersonId {
    /// Create a new person ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The ID as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PersonId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for PersonId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Visitor classification (closed set per deployment)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitorType {
    /// Regular member
    Regular,

    /// New member
    New,

    /// Visitor
    Visitor,

    /// First-time convert
    #[serde(rename = "first_time_convert")]
    FirstTimeConvert,
}

impl fmt::Display for VisitorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Regular => write!(f, "regular"),
            Self::New => write!(f, "new"),
            Self::Visitor => write!(f, "visitor"),
            Self::FirstTimeConvert => write!(f, "first_time_convert"),
        }
    }
}

/// Time-of-day band of an event
///
/// Derivable from the event time but stored separately, since deployments
/// may label events against local service schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// Before noon
    Morning,

    /// Noon to 18:00
    Afternoon,

    /// 18:00 onwards
    Evening,
}

impl Period {
    /// Derive the period from a time of day.
    #[must_use]
    pub fn from_time(time: NaiveTime) -> Self {
        match time.hour() {
            0..=11 => Self::Morning,
            12..=17 => Self::Afternoon,
            _ => Self::Evening,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Morning => write!(f, "morning"),
            Self::Afternoon => write!(f, "afternoon"),
            Self::Evening => write!(f, "evening"),
        }
    }
}

/// Coarse attendance-frequency classification
///
/// Derived from `recent_attendance_count` over the trailing
/// [`RECENT_WINDOW_DAYS`] window: High at [`HIGH_FREQUENCY_MIN`] or more,
/// Medium at [`MEDIUM_FREQUENCY_MIN`] or more, Low below that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrequencyBucket {
    /// Attends most gatherings
    High,

    /// Attends occasionally
    Medium,

    /// Rarely seen
    Low,
}

impl FrequencyBucket {
    /// Classify a recent attendance count.
    #[must_use]
    pub fn from_count(count: u32) -> Self {
        if count >= HIGH_FREQUENCY_MIN {
            Self::High
        } else if count >= MEDIUM_FREQUENCY_MIN {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

impl fmt::Display for FrequencyBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
        }
    }
}

/// One detected-attendance event tied to a person and an event occurrence
///
/// Records are supplied wholesale by a data source at load time and treated
/// as read-only for the session; the engine never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Identifier of the recognized person
    pub person_id: PersonId,

    /// Display name; may be the "unknown identity" sentinel
    pub name: String,

    /// Visitor classification
    pub visitor_type: VisitorType,

    /// Previous attendance date; absent for first-time attendees
    pub last_attendance_date: Option<NaiveDate>,

    /// Attendance count within the trailing window
    pub recent_attendance_count: u32,

    /// Identifier of the gathering occurrence
    pub event_id: String,

    /// Free-form venue label
    pub location: String,

    /// Date of the event
    pub event_date: NaiveDate,

    /// Time of day of the event
    pub event_time: NaiveTime,

    /// Time-of-day band of the event
    pub period: Period,

    /// Whether this is the person's first recorded event
    pub is_first_event: bool,

    /// Identity-match confidence, 0-100
    pub match_score: f64,

    /// URI of the evidence image crop, when available
    pub face_clip_link: Option<String>,
}

impl AttendanceRecord {
    /// Validate the record's invariants.
    ///
    /// Applied at the loading boundary; records that fail validation are
    /// skipped with a warning rather than poisoning the session.
    ///
    /// # Errors
    ///
    /// Returns a human-readable description of the first violated invariant.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if !self.match_score.is_finite() {
            return Err(format!("match_score is not finite: {}", self.match_score));
        }
        if !(MATCH_SCORE_MIN..=MATCH_SCORE_MAX).contains(&self.match_score) {
            return Err(format!(
                "match_score {} outside [{MATCH_SCORE_MIN}, {MATCH_SCORE_MAX}]",
                self.match_score
            ));
        }
        if self.person_id.as_str().is_empty() {
            return Err("person_id is empty".to_string());
        }
        Ok(())
    }

    /// Frequency bucket derived from the recent attendance count.
    #[must_use]
    pub fn frequency_bucket(&self) -> FrequencyBucket {
        FrequencyBucket::from_count(self.recent_attendance_count)
    }
}

/// Filter criteria for querying attendance records
///
/// Every field is optional; an absent field imposes no constraint. UI-side
/// sentinel values ("" and "all") never reach this struct: they are
/// normalized by [`selector`] at the boundary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordCriteria {
    /// Case-insensitive substring match against name or person ID
    pub search: Option<String>,

    /// Exact venue label
    pub location: Option<String>,

    /// Visitor classification
    pub visitor_type: Option<VisitorType>,

    /// Inclusive lower bound on the event date
    pub date_from: Option<NaiveDate>,

    /// Inclusive upper bound on the event date
    pub date_to: Option<NaiveDate>,

    /// Attendance-frequency bucket
    pub frequency: Option<FrequencyBucket>,
}

impl RecordCriteria {
    /// True when no constraint is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Normalize a raw categorical selector into an optional constraint.
///
/// The two historical report variants used different "no filter" sentinels
/// (empty string in one, the literal "all" in the other). Both mean the
/// same thing and both map to `None` here; anything else is a real value.
#[must_use]
pub fn selector(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// A sortable attribute of [`AttendanceRecord`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortField {
    /// Person ID (string, case-insensitive)
    PersonId,

    /// Name (string, case-insensitive)
    Name,

    /// Visitor classification
    VisitorType,

    /// Venue label (string, case-insensitive)
    Location,

    /// Event date
    EventDate,

    /// Event time of day
    EventTime,

    /// Recent attendance count
    RecentCount,

    /// Match confidence
    MatchScore,

    /// Previous attendance date (absent dates sort first ascending)
    LastAttendance,
}

impl SortField {
    /// The field's canonical CLI/config token.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PersonId => "id",
            Self::Name => "name",
            Self::VisitorType => "type",
            Self::Location => "location",
            Self::EventDate => "date",
            Self::EventTime => "time",
            Self::RecentCount => "count",
            Self::MatchScore => "score",
            Self::LastAttendance => "last-seen",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortField {
    type Err = Error;

    /// Parse a sort field token.
    ///
    /// An unknown token is a configuration error, reported here at the
    /// boundary so that the engine itself never sees an invalid field.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" | "person-id" => Ok(Self::PersonId),
            "name" => Ok(Self::Name),
            "type" | "visitor-type" => Ok(Self::VisitorType),
            "location" => Ok(Self::Location),
            "date" | "event-date" => Ok(Self::EventDate),
            "time" | "event-time" => Ok(Self::EventTime),
            "count" | "recent-count" => Ok(Self::RecentCount),
            "score" | "match-score" => Ok(Self::MatchScore),
            "last-seen" | "last-attendance" => Ok(Self::LastAttendance),
            other => Err(Error::UnknownSortField(other.to_string())),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first
    #[default]
    Ascending,

    /// Largest first
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => write!(f, "asc"),
            Self::Descending => write!(f, "desc"),
        }
    }
}

/// Presentation-side query state
///
/// Owned by the caller, never by the engine: the engine is a pure function
/// of (records, state). Mutation goes exclusively through the methods below
/// so the state can never be partially updated; in particular, changing the
/// criteria always resets the page to 1, and sort toggling follows the
/// asc -> desc -> asc convention on a repeated field.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState {
    criteria: RecordCriteria,
    sort: Option<(SortField, SortDirection)>,
    page: u32,
}

impl QueryState {
    /// Create a query state with no constraints, no sort, page 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            criteria: RecordCriteria::default(),
            sort: None,
            page: 1,
        }
    }

    /// The active filter criteria.
    #[must_use]
    pub fn criteria(&self) -> &RecordCriteria {
        &self.criteria
    }

    /// The active sort, if any. `None` means pass-through order.
    #[must_use]
    pub fn sort(&self) -> Option<(SortField, SortDirection)> {
        self.sort
    }

    /// The current 1-based page number.
    #[must_use]
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Replace the criteria, resetting the page to 1.
    ///
    /// A new filter must never leave the user on a page that only existed
    /// in the previous result set.
    pub fn set_criteria(&mut self, criteria: RecordCriteria) {
        self.criteria = criteria;
        self.page = 1;
    }

    /// Toggle sorting on a field.
    ///
    /// Repeating the current field flips the direction; a new field starts
    /// ascending.
    pub fn toggle_sort(&mut self, field: SortField) {
        self.sort = match self.sort {
            Some((current, direction)) if current == field => {
                Some((field, direction.flipped()))
            }
            _ => Some((field, SortDirection::Ascending)),
        };
    }

    /// Set an explicit sort, or clear it with `None`.
    pub fn set_sort(&mut self, sort: Option<(SortField, SortDirection)>) {
        self.sort = sort;
    }

    /// Move to the given 1-based page.
    ///
    /// Page 0 is clamped to 1; pages past the end are left to the engine,
    /// which yields an empty slice rather than an error.
    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_treats_empty_and_all_as_no_filter() {
        assert_eq!(selector(""), None);
        assert_eq!(selector("   "), None);
        assert_eq!(selector("all"), None);
        assert_eq!(selector("All"), None);
        assert_eq!(selector("ALL"), None);
        assert_eq!(selector("Auditório"), Some("Auditório".to_string()));
    }

    #[test]
    fn period_boundaries() {
        let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
        assert_eq!(Period::from_time(t(0, 0)), Period::Morning);
        assert_eq!(Period::from_time(t(11, 59)), Period::Morning);
        assert_eq!(Period::from_time(t(12, 0)), Period::Afternoon);
        assert_eq!(Period::from_time(t(17, 59)), Period::Afternoon);
        assert_eq!(Period::from_time(t(18, 0)), Period::Evening);
        assert_eq!(Period::from_time(t(23, 59)), Period::Evening);
    }

    #[test]
    fn frequency_bucket_thresholds() {
        assert_eq!(FrequencyBucket::from_count(0), FrequencyBucket::Low);
        assert_eq!(FrequencyBucket::from_count(2), FrequencyBucket::Low);
        assert_eq!(FrequencyBucket::from_count(3), FrequencyBucket::Medium);
        assert_eq!(FrequencyBucket::from_count(7), FrequencyBucket::Medium);
        assert_eq!(FrequencyBucket::from_count(8), FrequencyBucket::High);
    }

    #[test]
    fn sort_field_parses_known_tokens() {
        assert_eq!("score".parse::<SortField>().unwrap(), SortField::MatchScore);
        assert_eq!("DATE".parse::<SortField>().unwrap(), SortField::EventDate);
        assert_eq!(
            "last-seen".parse::<SortField>().unwrap(),
            SortField::LastAttendance
        );
    }

    #[test]
    fn sort_field_rejects_unknown_tokens() {
        let err = "priority".parse::<SortField>().unwrap_err();
        assert!(matches!(err, Error::UnknownSortField(ref f) if f == "priority"));
    }

    #[test]
    fn toggle_sort_flips_on_repeat_and_resets_on_new_field() {
        let mut state = QueryState::new();
        assert_eq!(state.sort(), None);

        state.toggle_sort(SortField::Name);
        assert_eq!(state.sort(), Some((SortField::Name, SortDirection::Ascending)));

        state.toggle_sort(SortField::Name);
        assert_eq!(state.sort(), Some((SortField::Name, SortDirection::Descending)));

        state.toggle_sort(SortField::Name);
        assert_eq!(state.sort(), Some((SortField::Name, SortDirection::Ascending)));

        state.toggle_sort(SortField::MatchScore);
        assert_eq!(
            state.sort(),
            Some((SortField::MatchScore, SortDirection::Ascending))
        );
    }

    #[test]
    fn new_criteria_reset_the_page() {
        let mut state = QueryState::new();
        state.set_page(4);
        assert_eq!(state.page(), 4);

        state.set_criteria(RecordCriteria {
            location: Some("Auditório".to_string()),
            ..RecordCriteria::default()
        });
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn page_zero_is_clamped_to_one() {
        let mut state = QueryState::new();
        state.set_page(0);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn validate_rejects_out_of_range_scores() {
        let mut record = test_record();
        assert!(record.validate().is_ok());

        record.match_score = 100.5;
        assert!(record.validate().is_err());

        record.match_score = -1.0;
        assert!(record.validate().is_err());

        record.match_score = f64::NAN;
        assert!(record.validate().is_err());
    }

    fn test_record() -> AttendanceRecord {
        AttendanceRecord {
            person_id: PersonId::new("FP001"),
            name: "João Silva".to_string(),
            visitor_type: VisitorType::Regular,
            last_attendance_date: NaiveDate::from_ymd_opt(2025, 9, 14),
            recent_attendance_count: 11,
            event_id: "EV-2025-0921-A".to_string(),
            location: "Santuário Principal".to_string(),
            event_date: NaiveDate::from_ymd_opt(2025, 9, 21).unwrap(),
            event_time: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
            period: Period::Morning,
            is_first_event: false,
            match_score: 98.0,
            face_clip_link: None,
        }
    }
}
