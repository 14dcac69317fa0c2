//! Pure CSV field and row formatting.
//!
//! Quoting follows RFC 4180: a field is quoted when it contains the
//! delimiter, a double quote, or a line break; embedded double quotes are
//! doubled. Everything else passes through unchanged, so formatting the
//! same input always yields the same bytes.

/// The field delimiter used throughout vigil exports.
pub const DELIMITER: char = ',';

/// Returns true when a field must be wrapped in double quotes.
#[must_use]
pub fn needs_quoting(field: &str) -> bool {
    field.contains(DELIMITER) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Quote a single field if required, doubling embedded quotes.
///
/// Fields that need no quoting are returned as-is. An empty string stays an
/// empty field (two adjacent delimiters in the row), never a quoted empty.
#[must_use]
pub fn quote_field(field: &str) -> String {
    if needs_quoting(field) {
        let escaped = field.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        field.to_string()
    }
}

/// Format one row: quoted fields joined by the delimiter, terminated by `\n`.
///
/// The trailing newline is part of the row so that concatenating rows
/// yields a well-formed document with no special last-line handling.
#[must_use]
pub fn format_row<S: AsRef<str>>(fields: &[S]) -> String {
    let mut row = fields
        .iter()
        .map(|f| quote_field(f.as_ref()))
        .collect::<Vec<_>>()
        .join(",");
    row.push('\n');
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("plain", false)]
    #[case("", false)]
    #[case("with space", false)]
    #[case("a,b", true)]
    #[case("say \"hi\"", true)]
    #[case("line\nbreak", true)]
    #[case("carriage\rreturn", true)]
    fn detects_fields_that_need_quoting(#[case] field: &str, #[case] expected: bool) {
        assert_eq!(needs_quoting(field), expected);
    }

    #[test]
    fn plain_field_is_unchanged() {
        assert_eq!(quote_field("Maria Santos"), "Maria Santos");
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        assert_eq!(quote_field("the \"main\" hall"), "\"the \"\"main\"\" hall\"");
    }

    #[test]
    fn comma_field_is_quoted() {
        assert_eq!(quote_field("Room 1, Annex"), "\"Room 1, Annex\"");
    }

    #[test]
    fn row_ends_with_newline() {
        assert_eq!(format_row(&["a", "b", "c"]), "a,b,c\n");
    }

    #[test]
    fn empty_fields_stay_empty() {
        assert_eq!(format_row(&["a", "", "c"]), "a,,c\n");
    }

    #[test]
    fn formatting_is_byte_stable() {
        let fields = ["FP002", "Maria Santos", "Sala de Oração"];
        assert_eq!(format_row(&fields), format_row(&fields));
    }
}
