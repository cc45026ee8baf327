//! Text report adapter: Implementation of ReportSink.
//!
//! Serializes the rendered report to a file. Failure is surfaced to the
//! caller as a failed download, never retried.

use std::path::{Path, PathBuf};

use crate::ports::ReportSink;

/// Error type for report operations.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Failed to write report to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Writes reports as plain text files.
pub struct TextReportWriter {
    path: PathBuf,
}

impl TextReportWriter {
    /// Create a writer targeting the given path.
    #[must_use]
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The destination path reports are written to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportSink for TextReportWriter {
    type Error = ReportError;

    fn write(&self, contents: &str) -> Result<PathBuf, ReportError> {
        std::fs::write(&self.path, contents).map_err(|source| ReportError::Write {
            path: self.path.clone(),
            source,
        })?;

        tracing::info!("Wrote report to {:?} ({} bytes)", self.path, contents.len());
        Ok(self.path.clone())
    }
}
