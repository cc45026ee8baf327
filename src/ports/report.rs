//! Report port: Trait for serializing a rendered report.

use std::path::PathBuf;

/// Trait for writing the rendered report document.
///
/// Write failure is surfaced to the caller, never retried.
pub trait ReportSink {
    /// Error type for report operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Write the rendered report and return the path it landed at.
    ///
    /// # Errors
    /// Returns error if the destination is unwritable.
    fn write(&self, contents: &str) -> Result<PathBuf, Self::Error>;
}
