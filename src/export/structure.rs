//! Table structure (DDL) export.
//!
//! Per-table metadata failures are absorbed as SQL comments so one broken
//! table never sinks the rest of the document; only table discovery itself
//! is allowed to fail the export.

use tracing::{info, warn};

use crate::db::QueryExecutor;
use crate::error::ExportResult;
use crate::models::{ColumnDescriptor, ConstraintDescriptor, SequenceBinding, TableRef};
use crate::sql::{escape_identifier, map_type};

const STRUCTURE_BANNER: &str = "-- =============================================\n\
                                -- TABLE STRUCTURE\n\
                                -- =============================================\n\n";

/// Emits DROP/CREATE TABLE statements plus sequence restoration.
pub struct StructureExporter<'a, E: QueryExecutor> {
    executor: &'a E,
}

impl<'a, E: QueryExecutor> StructureExporter<'a, E> {
    pub fn new(executor: &'a E) -> Self {
        Self { executor }
    }

    /// Export the structure of every table in the schema (or the named
    /// subset), one failure-isolated section per table.
    pub async fn export_all(
        &self,
        schema: &str,
        tables: Option<&[String]>,
    ) -> ExportResult<String> {
        let names = match tables {
            Some(names) => names.to_vec(),
            None => self.executor.list_tables(schema).await?,
        };
        info!(tables = names.len(), schema, "Exporting table structure");

        let mut out = String::from(STRUCTURE_BANNER);
        for name in &names {
            let table = TableRef::new(schema, name);
            match self.export_table(&table).await {
                Ok(ddl) => out.push_str(&ddl),
                Err(e) => {
                    warn!(table = %table, error = %e, "Structure export failed");
                    out.push_str(&format!(
                        "-- Error obtaining structure of {}: {}\n\n",
                        name, e
                    ));
                }
            }
        }
        Ok(out)
    }

    /// Export one table's DDL. A table with no catalog columns produces a
    /// comment rather than an empty CREATE TABLE.
    pub async fn export_table(&self, table: &TableRef) -> ExportResult<String> {
        let columns = self.executor.fetch_columns(table).await?;
        if columns.is_empty() {
            return Ok(format!(
                "-- Structure could not be obtained for {}\n\n",
                table.name
            ));
        }
        let constraints = self.executor.fetch_constraints(table).await?;
        Ok(build_create_table(table, &columns, &constraints))
    }
}

/// Render the full DDL block for a table: drop, create, and any sequence
/// restoration statements. Pure; all catalog data is already in hand.
pub fn build_create_table(
    table: &TableRef,
    columns: &[ColumnDescriptor],
    constraints: &[ConstraintDescriptor],
) -> String {
    let qualified = table.qualified();
    let mut sequences: Vec<SequenceBinding> = Vec::new();
    let mut lines: Vec<String> = Vec::with_capacity(columns.len() + constraints.len());

    for col in columns {
        let escaped = escape_identifier(&col.name);
        let mut line = format!(
            "    {} {}",
            escaped,
            map_type(
                &col.data_type,
                col.max_length,
                col.numeric_precision,
                col.numeric_scale
            )
        );
        if !col.is_nullable {
            line.push_str(" NOT NULL");
        }
        if let Some(default) = &col.default {
            if default.contains("nextval") {
                // Sequence-backed default: bind it after the table body so
                // CREATE SEQUENCE precedes the SET DEFAULT.
                if let Some(sequence) = extract_sequence_name(default) {
                    sequences.push(SequenceBinding {
                        column: escaped.clone(),
                        sequence,
                    });
                }
            } else {
                line.push_str(&format!(" DEFAULT {}", default));
            }
        }
        lines.push(line);
    }

    for constraint in constraints {
        if constraint.kind.is_exported() {
            lines.push(format!(
                "    CONSTRAINT {} {}",
                constraint.name, constraint.definition
            ));
        }
    }

    let mut out = format!(
        "-- Table: {}.{}\n",
        table.schema,
        escape_identifier(&table.name)
    );
    out.push_str(&format!("DROP TABLE IF EXISTS {} CASCADE;\n", qualified));
    out.push_str(&format!("CREATE TABLE {} (\n", qualified));
    out.push_str(&lines.join(",\n"));
    out.push_str("\n);\n\n");

    for binding in &sequences {
        out.push_str(&format!(
            "-- Sequence for {}\n\
             CREATE SEQUENCE IF NOT EXISTS {};\n\
             ALTER TABLE {} ALTER COLUMN {} SET DEFAULT nextval('{}');\n\n",
            binding.column, binding.sequence, qualified, binding.column, binding.sequence
        ));
    }

    out
}

/// Pull the sequence name out of a nextval() default expression: the text
/// between the first pair of single quotes, regclass cast and all else
/// discarded.
fn extract_sequence_name(default: &str) -> Option<String> {
    default
        .split('\'')
        .nth(1)
        .map(|s| s.trim_end_matches("::regclass").to_string())
}
