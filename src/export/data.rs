//! Table data (DML) export.
//!
//! Rows are paged with LIMIT/OFFSET so memory stays bounded by the batch
//! size; each fetched page becomes one multi-row INSERT. As with structure,
//! a failing table degrades to a comment and the export moves on.

use tracing::{info, warn};

use crate::db::QueryExecutor;
use crate::error::ExportResult;
use crate::export::progress::{ProgressReporter, TracingProgress};
use crate::models::{TableRef, TableSummary};
use crate::sql::{escape_identifier, format_value};

const DATA_BANNER: &str = "-- =============================================\n\
                           -- TABLE DATA\n\
                           -- =============================================\n\n";

/// Tables at or below this row count export silently; larger ones report
/// progress after each page.
pub const PROGRESS_ROW_THRESHOLD: i64 = 1000;

/// Emits multi-row INSERT statements, one batch per statement.
pub struct DataExporter<'a, E: QueryExecutor> {
    executor: &'a E,
    progress: &'a dyn ProgressReporter,
}

impl<'a, E: QueryExecutor> DataExporter<'a, E> {
    pub fn new(executor: &'a E) -> Self {
        Self {
            executor,
            progress: &TracingProgress,
        }
    }

    pub fn with_progress(executor: &'a E, progress: &'a dyn ProgressReporter) -> Self {
        Self { executor, progress }
    }

    /// Export the data of every table in the schema (or the named subset).
    pub async fn export_all(
        &self,
        schema: &str,
        tables: Option<&[String]>,
        batch_size: i64,
    ) -> ExportResult<String> {
        let names = match tables {
            Some(names) => names.to_vec(),
            None => self.executor.list_tables(schema).await?,
        };
        info!(tables = names.len(), schema, batch_size, "Exporting table data");

        let mut out = String::from(DATA_BANNER);
        for name in &names {
            let table = TableRef::new(schema, name);
            match self.export_table(&table, batch_size).await {
                Ok(dml) => out.push_str(&dml),
                Err(e) => {
                    warn!(table = %table, error = %e, "Data export failed");
                    out.push_str(&format!("-- Error exporting data from {}: {}\n\n", name, e));
                }
            }
        }
        Ok(out)
    }

    /// Export one table's rows as batched INSERTs.
    pub async fn export_table(&self, table: &TableRef, batch_size: i64) -> ExportResult<String> {
        let qualified = table.qualified();
        let total = self.executor.count_rows(table).await?;
        if total == 0 {
            return Ok(format!("-- No data in {}\n\n", qualified));
        }

        let columns = self.executor.fetch_columns(table).await?;
        let column_list: Vec<String> = columns
            .iter()
            .map(|c| escape_identifier(&c.name))
            .collect();

        let mut out = format!("-- Data for {} ({} rows)\n", qualified, total);
        let mut offset: i64 = 0;
        while offset < total {
            let batch = self
                .executor
                .fetch_page(table, &columns, batch_size, offset)
                .await?;
            if !batch.is_empty() {
                let tuples: Vec<String> = batch
                    .rows
                    .iter()
                    .map(|row| {
                        let values: Vec<String> = row.iter().map(format_value).collect();
                        format!("    ({})", values.join(", "))
                    })
                    .collect();
                out.push_str(&format!(
                    "INSERT INTO {} ({}) VALUES\n{};\n\n",
                    qualified,
                    column_list.join(", "),
                    tuples.join(",\n")
                ));
            }

            offset += batch_size;
            if total > PROGRESS_ROW_THRESHOLD {
                let done = offset.min(total);
                let pct = done as f64 / total as f64 * 100.0;
                self.progress.report(&format!(
                    "{}: {}/{} rows ({:.1}%)",
                    table.name, done, total, pct
                ));
            }
        }

        Ok(out)
    }

    /// Row counts for every table in the schema, for summary listings.
    pub async fn table_summaries(&self, schema: &str) -> ExportResult<Vec<TableSummary>> {
        let names = self.executor.list_tables(schema).await?;
        let mut summaries = Vec::with_capacity(names.len());
        for name in names {
            let table = TableRef::new(schema, &name);
            let rows = self.row_count(&table).await;
            summaries.push(TableSummary {
                name,
                schema: schema.to_string(),
                rows,
            });
        }
        Ok(summaries)
    }

    /// Best-effort row count; unreadable tables report zero.
    async fn row_count(&self, table: &TableRef) -> i64 {
        match self.executor.count_rows(table).await {
            Ok(count) => count,
            Err(e) => {
                warn!(table = %table, error = %e, "Row count failed");
                0
            }
        }
    }
}
