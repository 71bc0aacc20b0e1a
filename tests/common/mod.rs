//! Shared in-memory executor for integration tests.
#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use pg_exporter::db::{QueryExecutor, SqlValue};
use pg_exporter::error::{ExportError, ExportResult};
use pg_exporter::export::ProgressReporter;
use pg_exporter::models::{ColumnDescriptor, ConstraintDescriptor, RowBatch, TableRef};

/// One table's worth of canned catalog metadata and rows.
pub struct MockTable {
    pub name: String,
    pub columns: Vec<ColumnDescriptor>,
    pub constraints: Vec<ConstraintDescriptor>,
    pub rows: Vec<Vec<SqlValue>>,
}

impl MockTable {
    pub fn new(name: &str, columns: Vec<ColumnDescriptor>) -> Self {
        Self {
            name: name.to_string(),
            columns,
            constraints: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn with_constraints(mut self, constraints: Vec<ConstraintDescriptor>) -> Self {
        self.constraints = constraints;
        self
    }

    pub fn with_rows(mut self, rows: Vec<Vec<SqlValue>>) -> Self {
        self.rows = rows;
        self
    }
}

/// [`QueryExecutor`] over canned tables, with per-table failure injection.
#[derive(Default)]
pub struct MockExecutor {
    pub tables: Vec<MockTable>,
    pub fail_columns_for: HashSet<String>,
    pub fail_count_for: HashSet<String>,
    pub fail_list: bool,
}

impl MockExecutor {
    pub fn new(tables: Vec<MockTable>) -> Self {
        Self {
            tables,
            ..Default::default()
        }
    }

    fn find(&self, name: &str) -> Option<&MockTable> {
        self.tables.iter().find(|t| t.name == name)
    }
}

impl QueryExecutor for MockExecutor {
    async fn list_tables(&self, _schema: &str) -> ExportResult<Vec<String>> {
        if self.fail_list {
            return Err(ExportError::connection(
                "connection reset",
                "Check that the server is running",
            ));
        }
        Ok(self.tables.iter().map(|t| t.name.clone()).collect())
    }

    async fn fetch_columns(&self, table: &TableRef) -> ExportResult<Vec<ColumnDescriptor>> {
        if self.fail_columns_for.contains(&table.name) {
            return Err(ExportError::metadata(&table.name, "permission denied"));
        }
        Ok(self
            .find(&table.name)
            .map(|t| t.columns.clone())
            .unwrap_or_default())
    }

    async fn fetch_constraints(
        &self,
        table: &TableRef,
    ) -> ExportResult<Vec<ConstraintDescriptor>> {
        Ok(self
            .find(&table.name)
            .map(|t| t.constraints.clone())
            .unwrap_or_default())
    }

    async fn count_rows(&self, table: &TableRef) -> ExportResult<i64> {
        if self.fail_count_for.contains(&table.name) {
            return Err(ExportError::data(&table.name, "relation vanished"));
        }
        Ok(self.find(&table.name).map(|t| t.rows.len() as i64).unwrap_or(0))
    }

    async fn fetch_page(
        &self,
        table: &TableRef,
        _columns: &[ColumnDescriptor],
        limit: i64,
        offset: i64,
    ) -> ExportResult<RowBatch> {
        let rows = self
            .find(&table.name)
            .map(|t| {
                t.rows
                    .iter()
                    .skip(offset as usize)
                    .take(limit as usize)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(RowBatch { rows })
    }
}

/// Progress reporter that records every message for assertions.
#[derive(Default)]
pub struct RecordingProgress {
    pub messages: Mutex<Vec<String>>,
}

impl ProgressReporter for RecordingProgress {
    fn report(&self, message: &str) {
        self.messages
            .lock()
            .expect("progress mutex poisoned")
            .push(message.to_string());
    }
}

/// A two-column users table with the given rows.
pub fn users_table(rows: Vec<Vec<SqlValue>>) -> MockTable {
    MockTable::new(
        "users",
        vec![
            ColumnDescriptor::new("id", "integer").not_null(),
            ColumnDescriptor::new("name", "character varying").with_max_length(50),
        ],
    )
    .with_rows(rows)
}
