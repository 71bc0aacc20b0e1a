//! Export pipeline: structure and data section exporters plus the
//! orchestrator that assembles the final document.

pub mod data;
pub mod orchestrator;
pub mod progress;
pub mod structure;

pub use data::{DataExporter, PROGRESS_ROW_THRESHOLD};
pub use orchestrator::{ExportMode, Exporter};
pub use progress::{NullProgress, ProgressReporter, TracingProgress};
pub use structure::StructureExporter;
