//! Report output and run summaries.

mod writer;

use serde::Serialize;
use std::path::PathBuf;

pub use writer::write_report;

/// Outcome of one successful extraction run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Lines written to the report
    pub keyframes: usize,
    /// Closed frame blocks seen in the probe output
    pub frames: usize,
    /// Frame blocks discarded because they were never closed
    pub incomplete_blocks: usize,
    pub elapsed_ms: u64,
}

impl ExtractionSummary {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
