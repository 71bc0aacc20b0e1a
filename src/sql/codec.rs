//! Scalar value to SQL literal codec.
//!
//! Total over the supported value domain: unsupported types arrive as
//! [`SqlValue::Other`] text and fall back to string quoting, so formatting
//! never fails. Branch order matters: booleans must not reach the numeric
//! branch, and NULL wins over everything.

use crate::db::value::SqlValue;

/// Format a single scalar as a SQL literal.
pub fn format_value(value: &SqlValue) -> String {
    match value {
        SqlValue::Null => "NULL".to_string(),
        SqlValue::Text(s) => quote_text(s),
        SqlValue::Bool(true) => "TRUE".to_string(),
        SqlValue::Bool(false) => "FALSE".to_string(),
        // Rust's native Display is round-trip safe for both integer widths
        // and floats, so the textual form is used verbatim.
        SqlValue::Int(v) => v.to_string(),
        SqlValue::Float(v) => v.to_string(),
        SqlValue::Timestamp(ts) => format!("'{}'", ts.format("%Y-%m-%dT%H:%M:%S%.f")),
        SqlValue::TimestampTz(ts) => format!("'{}'", ts.to_rfc3339()),
        SqlValue::Date(d) => format!("'{}'", d.format("%Y-%m-%d")),
        SqlValue::Other(s) => quote_text(s),
    }
}

/// Single-quote a string, doubling embedded quotes and backslashes.
///
/// Both substitutions happen in one pass over the input, so a doubled quote
/// can never be re-escaped by the backslash rule (and vice versa).
fn quote_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for ch in s.chars() {
        match ch {
            '\'' => out.push_str("''"),
            '\\' => out.push_str("\\\\"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    #[test]
    fn test_null() {
        assert_eq!(format_value(&SqlValue::Null), "NULL");
    }

    #[test]
    fn test_text_plain() {
        assert_eq!(format_value(&SqlValue::Text("Alice".into())), "'Alice'");
    }

    #[test]
    fn test_text_quote_doubling() {
        assert_eq!(format_value(&SqlValue::Text("a'b".into())), "'a''b'");
        assert_eq!(format_value(&SqlValue::Text("''".into())), "''''''");
    }

    #[test]
    fn test_text_backslash_doubling() {
        assert_eq!(format_value(&SqlValue::Text("a\\b".into())), "'a\\\\b'");
    }

    #[test]
    fn test_escapes_do_not_cascade() {
        // A quote next to a backslash: each is escaped once, independently.
        assert_eq!(format_value(&SqlValue::Text("\\'".into())), "'\\\\'''");
    }

    #[test]
    fn test_booleans_uppercase() {
        assert_eq!(format_value(&SqlValue::Bool(true)), "TRUE");
        assert_eq!(format_value(&SqlValue::Bool(false)), "FALSE");
    }

    #[test]
    fn test_numbers_unquoted() {
        assert_eq!(format_value(&SqlValue::Int(42)), "42");
        assert_eq!(format_value(&SqlValue::Int(-7)), "-7");
        assert_eq!(format_value(&SqlValue::Float(3.5)), "3.5");
        assert_eq!(format_value(&SqlValue::Float(0.1)), "0.1");
    }

    #[test]
    fn test_timestamp_iso8601() {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        assert_eq!(
            format_value(&SqlValue::Timestamp(ts)),
            "'2024-03-15T10:30:00'"
        );
    }

    #[test]
    fn test_timestamptz_keeps_offset() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap();
        assert_eq!(
            format_value(&SqlValue::TimestampTz(ts)),
            "'2024-03-15T10:30:00+00:00'"
        );
    }

    #[test]
    fn test_date() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(format_value(&SqlValue::Date(d)), "'2024-03-15'");
    }

    #[test]
    fn test_other_falls_back_to_text_quoting() {
        assert_eq!(format_value(&SqlValue::Other("12.50".into())), "'12.50'");
        assert_eq!(
            format_value(&SqlValue::Other("it's".into())),
            "'it''s'"
        );
    }
}
