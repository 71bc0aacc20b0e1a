//! Decoded scalar values and the catalog-type classification that drives
//! both the SELECT list and row decoding.
//!
//! Types with a native decoding (booleans, integers, floats, text,
//! timestamps, dates) are fetched as-is. Everything else (numeric, uuid,
//! json, bytea, arrays, user-defined types) is cast to text server-side and
//! carried as [`SqlValue::Other`], which the literal codec quotes as a
//! string. That keeps the pipeline total without enumerating every
//! PostgreSQL type.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use sqlx::Row;
use sqlx::postgres::PgRow;
use tracing::warn;

use crate::sql::escape_identifier;

/// A single decoded scalar, ready for literal formatting.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Timestamp(NaiveDateTime),
    TimestampTz(DateTime<Utc>),
    Date(NaiveDate),
    /// Server-side text rendering of a type with no native decoding.
    Other(String),
}

/// How a column's values are fetched and decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Bool,
    Int,
    Float,
    Text,
    Timestamp,
    TimestampTz,
    Date,
    Other,
}

/// Classify an `information_schema` data_type string.
pub fn classify_type(data_type: &str) -> ValueKind {
    match data_type.to_lowercase().as_str() {
        "boolean" => ValueKind::Bool,
        "smallint" | "integer" | "bigint" => ValueKind::Int,
        "real" | "double precision" => ValueKind::Float,
        "text" | "character varying" | "character" => ValueKind::Text,
        "timestamp without time zone" => ValueKind::Timestamp,
        "timestamp with time zone" => ValueKind::TimestampTz,
        "date" => ValueKind::Date,
        _ => ValueKind::Other,
    }
}

/// SELECT-list expression for a column: the escaped name, with a text cast
/// appended when the type has no native decoding.
pub fn select_expr(column_name: &str, kind: ValueKind) -> String {
    let escaped = escape_identifier(column_name);
    match kind {
        ValueKind::Other => format!("{}::text", escaped),
        _ => escaped,
    }
}

/// Decode one cell from a fetched row. Never fails: a cell that cannot be
/// decoded degrades to NULL with a warning rather than aborting the export.
pub fn decode_value(row: &PgRow, idx: usize, kind: ValueKind) -> SqlValue {
    match kind {
        ValueKind::Bool => match row.try_get::<Option<bool>, _>(idx) {
            Ok(Some(v)) => SqlValue::Bool(v),
            Ok(None) => SqlValue::Null,
            Err(e) => decode_failed(idx, "bool", &e),
        },
        ValueKind::Int => decode_integer(row, idx),
        ValueKind::Float => decode_float(row, idx),
        ValueKind::Text => match row.try_get::<Option<String>, _>(idx) {
            Ok(Some(v)) => SqlValue::Text(v),
            Ok(None) => SqlValue::Null,
            Err(e) => decode_failed(idx, "text", &e),
        },
        ValueKind::Timestamp => match row.try_get::<Option<NaiveDateTime>, _>(idx) {
            Ok(Some(v)) => SqlValue::Timestamp(v),
            Ok(None) => SqlValue::Null,
            Err(e) => decode_failed(idx, "timestamp", &e),
        },
        ValueKind::TimestampTz => match row.try_get::<Option<DateTime<Utc>>, _>(idx) {
            Ok(Some(v)) => SqlValue::TimestampTz(v),
            Ok(None) => SqlValue::Null,
            Err(e) => decode_failed(idx, "timestamptz", &e),
        },
        ValueKind::Date => match row.try_get::<Option<NaiveDate>, _>(idx) {
            Ok(Some(v)) => SqlValue::Date(v),
            Ok(None) => SqlValue::Null,
            Err(e) => decode_failed(idx, "date", &e),
        },
        ValueKind::Other => match row.try_get::<Option<String>, _>(idx) {
            Ok(Some(v)) => SqlValue::Other(v),
            Ok(None) => SqlValue::Null,
            Err(e) => decode_failed(idx, "text-cast", &e),
        },
    }
}

/// Integer columns arrive as whichever width the server chose; try the
/// widest first and narrow down.
fn decode_integer(row: &PgRow, idx: usize) -> SqlValue {
    if let Ok(v) = row.try_get::<Option<i64>, _>(idx) {
        return v.map_or(SqlValue::Null, SqlValue::Int);
    }
    if let Ok(v) = row.try_get::<Option<i32>, _>(idx) {
        return v.map_or(SqlValue::Null, |n| SqlValue::Int(n.into()));
    }
    match row.try_get::<Option<i16>, _>(idx) {
        Ok(v) => v.map_or(SqlValue::Null, |n| SqlValue::Int(n.into())),
        Err(e) => decode_failed(idx, "integer", &e),
    }
}

fn decode_float(row: &PgRow, idx: usize) -> SqlValue {
    if let Ok(v) = row.try_get::<Option<f64>, _>(idx) {
        return v.map_or(SqlValue::Null, SqlValue::Float);
    }
    match row.try_get::<Option<f32>, _>(idx) {
        Ok(v) => v.map_or(SqlValue::Null, |n| SqlValue::Float(n.into())),
        Err(e) => decode_failed(idx, "float", &e),
    }
}

fn decode_failed(idx: usize, expected: &str, error: &sqlx::Error) -> SqlValue {
    warn!(
        column_index = idx,
        expected,
        error = %error,
        "Could not decode cell, exporting NULL"
    );
    SqlValue::Null
}
