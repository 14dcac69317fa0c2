//! CLI input validation functions.
//!
//! These validators are used by clap's `value_parser` attribute to validate
//! user input at parse time, providing immediate feedback for invalid values.

use chrono::NaiveDate;

use crate::domain::SortField;

/// Parse an ISO-8601 date (`YYYY-MM-DD`).
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| format!("Invalid date '{s}'. Expected format: YYYY-MM-DD (e.g., 2025-09-21)"))
}

/// Parse a sort field token.
///
/// Delegates to the domain parser so that an unknown field is reported the
/// same way regardless of whether it arrives via CLI or configuration.
pub fn parse_sort_field(s: &str) -> Result<SortField, String> {
    s.parse::<SortField>().map_err(|e| e.to_string())
}

/// Parse a 1-based page number.
pub fn parse_page(s: &str) -> Result<u32, String> {
    let page: u32 = s
        .trim()
        .parse()
        .map_err(|_| format!("Invalid page number '{s}'"))?;
    if page == 0 {
        return Err("Page numbers start at 1".to_string());
    }
    Ok(page)
}

/// Parse a per-page record count.
pub fn parse_page_size(s: &str) -> Result<usize, String> {
    let size: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("Invalid page size '{s}'"))?;
    if size == 0 {
        return Err("Page size must be at least 1".to_string());
    }
    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SortField;

    #[test]
    fn parses_iso_dates() {
        assert_eq!(
            parse_date("2025-09-21").unwrap(),
            NaiveDate::from_ymd_opt(2025, 9, 21).unwrap()
        );
        assert!(parse_date("21/09/2025").is_err());
        assert!(parse_date("2025-13-01").is_err());
    }

    #[test]
    fn rejects_unknown_sort_fields_with_the_field_name() {
        let err = parse_sort_field("priority").unwrap_err();
        assert!(err.contains("priority"));
        assert_eq!(parse_sort_field("score").unwrap(), SortField::MatchScore);
    }

    #[test]
    fn page_numbers_start_at_one() {
        assert_eq!(parse_page("3").unwrap(), 3);
        assert!(parse_page("0").is_err());
        assert!(parse_page("-1").is_err());
    }

    #[test]
    fn page_size_must_be_positive() {
        assert_eq!(parse_page_size("25").unwrap(), 25);
        assert!(parse_page_size("0").is_err());
    }
}
