//! pg-exporter: export a PostgreSQL database's schema and data to a single
//! portable SQL file.
//!
//! The pipeline is metadata-driven: catalog queries describe each table,
//! pure formatting code turns the metadata and paged row data into DDL and
//! batched INSERT statements, and the orchestrator assembles the sections
//! behind a dated header. Per-table failures degrade to SQL comments so a
//! partially broken database still exports everything readable.

pub mod config;
pub mod db;
pub mod error;
pub mod export;
pub mod models;
pub mod output;
pub mod sql;

pub use config::Config;
pub use db::{PgExecutor, QueryExecutor, SqlValue};
pub use error::{ExportError, ExportResult};
pub use export::{ExportMode, Exporter};
