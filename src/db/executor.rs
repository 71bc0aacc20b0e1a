//! Query executor interface and its PostgreSQL implementation.
//!
//! The exporters consume the [`QueryExecutor`] trait rather than a pool
//! directly, so the export logic can be exercised against a mock catalog in
//! tests. Catalog SQL lives as constants in the `queries` submodule.
//!
//! One executor instance is owned exclusively for the duration of an export
//! call; the exporters never issue concurrent queries against it.

use sqlx::{PgPool, Row};
use tracing::debug;

use crate::db::value::{ValueKind, classify_type, decode_value, select_expr};
use crate::error::ExportResult;
use crate::models::{ColumnDescriptor, ConstraintDescriptor, ConstraintKind, RowBatch, TableRef};

/// Capability the exporters need from the database: catalog lookups plus
/// counted, paginated scans of user tables.
#[allow(async_fn_in_trait)]
pub trait QueryExecutor {
    /// List base-table names in a schema, ordered by name.
    async fn list_tables(&self, schema: &str) -> ExportResult<Vec<String>>;

    /// Fetch column descriptors in ordinal order. Empty when the table is
    /// unknown; that is the caller's signal, not an error.
    async fn fetch_columns(&self, table: &TableRef) -> ExportResult<Vec<ColumnDescriptor>>;

    /// Fetch constraint descriptors for a table (may be empty).
    async fn fetch_constraints(&self, table: &TableRef)
    -> ExportResult<Vec<ConstraintDescriptor>>;

    /// Count the rows in a table.
    async fn count_rows(&self, table: &TableRef) -> ExportResult<i64>;

    /// Fetch one page of rows, positionally aligned with `columns`.
    /// Row order follows the underlying scan; no ORDER BY is imposed.
    async fn fetch_page(
        &self,
        table: &TableRef,
        columns: &[ColumnDescriptor],
        limit: i64,
        offset: i64,
    ) -> ExportResult<RowBatch>;
}

// =============================================================================
// Catalog SQL
// =============================================================================

mod queries {
    pub const LIST_TABLES: &str = r#"
        SELECT table_name::text
        FROM information_schema.tables
        WHERE table_schema = $1
        AND table_type = 'BASE TABLE'
        ORDER BY table_name
        "#;

    pub const FETCH_COLUMNS: &str = r#"
        SELECT
            column_name::text,
            data_type::text,
            character_maximum_length::int,
            is_nullable::text,
            column_default::text,
            numeric_precision::int,
            numeric_scale::int
        FROM information_schema.columns
        WHERE table_schema = $1 AND table_name = $2
        ORDER BY ordinal_position
        "#;

    pub const FETCH_CONSTRAINTS: &str = r#"
        SELECT
            conname::text,
            contype::text,
            pg_get_constraintdef(oid) AS definition
        FROM pg_constraint
        WHERE conrelid = (
            SELECT oid FROM pg_class
            WHERE relname = $2
            AND relnamespace = (SELECT oid FROM pg_namespace WHERE nspname = $1)
        )
        ORDER BY contype
        "#;
}

// =============================================================================
// PostgreSQL implementation
// =============================================================================

/// [`QueryExecutor`] backed by an sqlx connection pool.
pub struct PgExecutor {
    pool: PgPool,
}

impl PgExecutor {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Close the underlying pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

impl QueryExecutor for PgExecutor {
    async fn list_tables(&self, schema: &str) -> ExportResult<Vec<String>> {
        let rows = sqlx::query(queries::LIST_TABLES)
            .bind(schema)
            .fetch_all(&self.pool)
            .await?;

        let tables: Vec<String> = rows.iter().map(|row| row.get(0)).collect();
        debug!(count = tables.len(), schema, "Listed tables");
        Ok(tables)
    }

    async fn fetch_columns(&self, table: &TableRef) -> ExportResult<Vec<ColumnDescriptor>> {
        let rows = sqlx::query(queries::FETCH_COLUMNS)
            .bind(&table.schema)
            .bind(&table.name)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .iter()
            .map(|row| {
                let nullable: String = row.get(3);
                ColumnDescriptor {
                    name: row.get(0),
                    data_type: row.get(1),
                    max_length: row.get(2),
                    is_nullable: nullable == "YES",
                    default: row.get(4),
                    numeric_precision: row.get(5),
                    numeric_scale: row.get(6),
                }
            })
            .collect())
    }

    async fn fetch_constraints(
        &self,
        table: &TableRef,
    ) -> ExportResult<Vec<ConstraintDescriptor>> {
        let rows = sqlx::query(queries::FETCH_CONSTRAINTS)
            .bind(&table.schema)
            .bind(&table.name)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .iter()
            .map(|row| {
                let code: String = row.get(1);
                ConstraintDescriptor {
                    name: row.get(0),
                    kind: ConstraintKind::parse(&code),
                    definition: row.get(2),
                }
            })
            .collect())
    }

    async fn count_rows(&self, table: &TableRef) -> ExportResult<i64> {
        // Identifier-escaped, not parameterized: table names cannot be bound.
        let sql = format!("SELECT COUNT(*) FROM {}", table.qualified());
        let count: i64 = sqlx::query_scalar(&sql).fetch_one(&self.pool).await?;
        Ok(count)
    }

    async fn fetch_page(
        &self,
        table: &TableRef,
        columns: &[ColumnDescriptor],
        limit: i64,
        offset: i64,
    ) -> ExportResult<RowBatch> {
        let kinds: Vec<ValueKind> = columns
            .iter()
            .map(|c| classify_type(&c.data_type))
            .collect();
        let select_list: Vec<String> = columns
            .iter()
            .zip(&kinds)
            .map(|(c, &kind)| select_expr(&c.name, kind))
            .collect();

        let sql = format!(
            "SELECT {} FROM {} LIMIT {} OFFSET {}",
            select_list.join(", "),
            table.qualified(),
            limit,
            offset,
        );

        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        debug!(table = %table, offset, rows = rows.len(), "Fetched page");

        Ok(RowBatch {
            rows: rows
                .iter()
                .map(|row| {
                    kinds
                        .iter()
                        .enumerate()
                        .map(|(idx, &kind)| decode_value(row, idx, kind))
                        .collect()
                })
                .collect(),
        })
    }
}
