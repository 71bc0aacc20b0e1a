//! Data model for catalog metadata and export units.
//!
//! Catalog rows are decoded once at the query boundary into these typed
//! records; the exporters never touch raw driver rows for metadata.

use serde::Serialize;

use crate::sql::identifier::escape_identifier;

/// A column as described by `information_schema.columns`, in ordinal order.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDescriptor {
    pub name: String,
    /// Catalog type name, e.g. "character varying" or "integer".
    pub data_type: String,
    pub max_length: Option<i32>,
    pub is_nullable: bool,
    /// Raw default expression text, e.g. "nextval('users_id_seq'::regclass)".
    pub default: Option<String>,
    pub numeric_precision: Option<i32>,
    pub numeric_scale: Option<i32>,
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            max_length: None,
            is_nullable: true,
            default: None,
            numeric_precision: None,
            numeric_scale: None,
        }
    }

    pub fn not_null(mut self) -> Self {
        self.is_nullable = false;
        self
    }

    pub fn with_max_length(mut self, len: i32) -> Self {
        self.max_length = Some(len);
        self
    }

    pub fn with_default(mut self, expr: impl Into<String>) -> Self {
        self.default = Some(expr.into());
        self
    }

    pub fn with_numeric(mut self, precision: i32, scale: Option<i32>) -> Self {
        self.numeric_precision = Some(precision);
        self.numeric_scale = scale;
        self
    }
}

/// Constraint kind as reported by `pg_constraint.contype`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    PrimaryKey,
    Unique,
    Check,
    ForeignKey,
    /// Anything else (exclusion, trigger constraints). Dropped from DDL output.
    Other,
}

impl ConstraintKind {
    /// Parse the single-letter `contype` code.
    pub fn parse(code: &str) -> Self {
        match code {
            "p" => Self::PrimaryKey,
            "u" => Self::Unique,
            "c" => Self::Check,
            "f" => Self::ForeignKey,
            _ => Self::Other,
        }
    }

    /// Only p/u/c/f constraints are reproduced in the CREATE TABLE body.
    pub fn is_exported(self) -> bool {
        !matches!(self, Self::Other)
    }
}

/// A table constraint with its dialect-native definition text.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintDescriptor {
    pub name: String,
    pub kind: ConstraintKind,
    /// Output of pg_get_constraintdef(), e.g. "PRIMARY KEY (id)".
    pub definition: String,
}

impl ConstraintDescriptor {
    pub fn new(
        name: impl Into<String>,
        kind: ConstraintKind,
        definition: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            definition: definition.into(),
        }
    }
}

/// Schema-qualified table identity. The name pair is the lookup key
/// everywhere; uniqueness within a schema is assumed, not verified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    pub schema: String,
    pub name: String,
}

impl TableRef {
    pub fn new(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            name: name.into(),
        }
    }

    /// Escaped `schema.table` reference for use in emitted SQL.
    pub fn qualified(&self) -> String {
        format!(
            "{}.{}",
            escape_identifier(&self.schema),
            escape_identifier(&self.name)
        )
    }
}

impl std::fmt::Display for TableRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.schema, self.name)
    }
}

/// One page of a table scan. Tuples are aligned positionally with the
/// column list the page was fetched with; discarded after serialization.
#[derive(Debug, Clone, Default)]
pub struct RowBatch {
    pub rows: Vec<Vec<crate::db::value::SqlValue>>,
}

impl RowBatch {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// (column, sequence) pair derived from a nextval() column default.
/// Drives the CREATE SEQUENCE / SET DEFAULT statements emitted after the
/// table body, since the sequence name is only known once defaults parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceBinding {
    /// Escaped column name, ready for DDL.
    pub column: String,
    pub sequence: String,
}

/// Basic per-table information for the --list-tables summary output.
#[derive(Debug, Clone, Serialize)]
pub struct TableSummary {
    pub name: String,
    pub schema: String,
    pub rows: i64,
}
