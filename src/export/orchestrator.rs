//! Top-level export orchestration: header, structure section, data section.

use clap::ValueEnum;
use tracing::info;

use crate::db::QueryExecutor;
use crate::error::ExportResult;
use crate::export::data::DataExporter;
use crate::export::progress::{ProgressReporter, TracingProgress};
use crate::export::structure::StructureExporter;
use crate::sql::sql_header;

/// Which sections of the document to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportMode {
    /// DDL only.
    Structure,
    /// INSERTs only.
    Data,
    /// DDL followed by INSERTs.
    Both,
}

impl std::fmt::Display for ExportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Structure => "structure",
            Self::Data => "data",
            Self::Both => "both",
        };
        write!(f, "{}", name)
    }
}

/// Assembles a complete SQL document from the section exporters.
pub struct Exporter<'a, E: QueryExecutor> {
    executor: &'a E,
    database: String,
    schema: String,
    batch_size: i64,
    progress: &'a dyn ProgressReporter,
}

impl<'a, E: QueryExecutor> Exporter<'a, E> {
    pub fn new(executor: &'a E, database: impl Into<String>) -> Self {
        Self {
            executor,
            database: database.into(),
            schema: "public".to_string(),
            batch_size: 1000,
            progress: &TracingProgress,
        }
    }

    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = schema.into();
        self
    }

    pub fn batch_size(mut self, batch_size: i64) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn progress(mut self, progress: &'a dyn ProgressReporter) -> Self {
        self.progress = progress;
        self
    }

    /// Produce the full document: header, then the requested sections.
    /// Structure always precedes data so the file replays in order.
    pub async fn export(
        &self,
        mode: ExportMode,
        tables: Option<&[String]>,
    ) -> ExportResult<String> {
        info!(database = %self.database, schema = %self.schema, %mode, "Starting export");

        let mut out = sql_header(&self.database);

        if matches!(mode, ExportMode::Structure | ExportMode::Both) {
            let structure = StructureExporter::new(self.executor);
            out.push_str(&structure.export_all(&self.schema, tables).await?);
        }

        if matches!(mode, ExportMode::Data | ExportMode::Both) {
            let data = DataExporter::with_progress(self.executor, self.progress);
            out.push_str(&data.export_all(&self.schema, tables, self.batch_size).await?);
        }

        info!(bytes = out.len(), "Export complete");
        Ok(out)
    }
}
