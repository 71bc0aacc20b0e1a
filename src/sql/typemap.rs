//! Catalog type descriptor to SQL type syntax.
//!
//! `information_schema.columns` reports verbose type names ("character
//! varying") with length/precision split into separate columns; DDL wants
//! the compact parameterized spelling back.

/// Map a catalog type descriptor to its SQL type syntax. Pure and total:
/// anything unrecognized passes through uppercased.
pub fn map_type(
    data_type: &str,
    max_length: Option<i32>,
    precision: Option<i32>,
    scale: Option<i32>,
) -> String {
    match (data_type, max_length, precision, scale) {
        ("character varying", Some(len), _, _) => format!("VARCHAR({})", len),
        ("character", Some(len), _, _) => format!("CHAR({})", len),
        ("numeric", _, Some(p), Some(s)) => format!("NUMERIC({},{})", p, s),
        ("numeric", _, Some(p), None) => format!("NUMERIC({})", p),
        ("timestamp without time zone", ..) => "TIMESTAMP".to_string(),
        ("timestamp with time zone", ..) => "TIMESTAMPTZ".to_string(),
        _ => data_type.to_uppercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_varchar_with_length() {
        assert_eq!(
            map_type("character varying", Some(50), None, None),
            "VARCHAR(50)"
        );
    }

    #[test]
    fn test_varchar_without_length_passes_through() {
        assert_eq!(
            map_type("character varying", None, None, None),
            "CHARACTER VARYING"
        );
    }

    #[test]
    fn test_char_with_length() {
        assert_eq!(map_type("character", Some(3), None, None), "CHAR(3)");
    }

    #[test]
    fn test_numeric_with_precision_and_scale() {
        assert_eq!(map_type("numeric", None, Some(10), Some(2)), "NUMERIC(10,2)");
    }

    #[test]
    fn test_numeric_with_precision_only() {
        assert_eq!(map_type("numeric", None, Some(10), None), "NUMERIC(10)");
    }

    #[test]
    fn test_bare_numeric_passes_through() {
        assert_eq!(map_type("numeric", None, None, None), "NUMERIC");
    }

    #[test]
    fn test_timestamps() {
        assert_eq!(
            map_type("timestamp without time zone", None, None, None),
            "TIMESTAMP"
        );
        assert_eq!(
            map_type("timestamp with time zone", None, None, None),
            "TIMESTAMPTZ"
        );
    }

    #[test]
    fn test_fallback_uppercases() {
        assert_eq!(map_type("integer", None, None, None), "INTEGER");
        assert_eq!(map_type("boolean", None, None, None), "BOOLEAN");
        assert_eq!(
            map_type("double precision", None, None, None),
            "DOUBLE PRECISION"
        );
        assert_eq!(map_type("uuid", None, None, None), "UUID");
    }
}
