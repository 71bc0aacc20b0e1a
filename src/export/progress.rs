//! Progress reporting seam for long-running data exports.

use tracing::info;

/// Receives human-readable progress messages during a data export.
pub trait ProgressReporter: Send + Sync {
    fn report(&self, message: &str);
}

/// Default reporter: forwards messages to the log.
pub struct TracingProgress;

impl ProgressReporter for TracingProgress {
    fn report(&self, message: &str) {
        info!("{}", message);
    }
}

/// Discards all progress messages.
pub struct NullProgress;

impl ProgressReporter for NullProgress {
    fn report(&self, _message: &str) {}
}
