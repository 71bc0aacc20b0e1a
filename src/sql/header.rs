//! SQL document header.

use chrono::Local;

/// Session-configuration preamble emitted at the top of every document.
/// Mirrors what pg_dump sets so the file replays cleanly on a fresh server.
const SET_PREAMBLE: &str = "SET statement_timeout = 0;\n\
SET lock_timeout = 0;\n\
SET client_encoding = 'UTF-8';\n\
SET standard_conforming_strings = on;\n\
SET check_function_bodies = false;\n\
SET client_min_messages = warning;\n";

/// Generate the standard header for an exported SQL document.
pub fn sql_header(database_name: &str) -> String {
    format!(
        "-- PostgreSQL backup\n\
         -- Database: {}\n\
         -- Date: {}\n\
         -- Generated by {} v{}\n\
         \n\
         {}\n",
        database_name,
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        SET_PREAMBLE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_names_database() {
        let header = sql_header("sales");
        assert!(header.starts_with("-- PostgreSQL backup\n"));
        assert!(header.contains("-- Database: sales\n"));
    }

    #[test]
    fn test_header_carries_set_preamble() {
        let header = sql_header("sales");
        assert!(header.contains("SET statement_timeout = 0;"));
        assert!(header.contains("SET standard_conforming_strings = on;"));
        assert!(header.contains("SET client_min_messages = warning;"));
    }

    #[test]
    fn test_header_ends_with_blank_line() {
        assert!(sql_header("x").ends_with(";\n\n"));
    }
}
