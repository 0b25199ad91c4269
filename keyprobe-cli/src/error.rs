// ============================================================================
// keyprobe-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Result alias and exit codes
//
// The CLI reuses CoreError. Each pipeline stage exits with its own status so
// scripts can tell a missing ffprobe from an unwritable report.

// ---- Internal crate imports ----
use keyprobe_core::{CoreError, CoreResult, Stage};

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;

/// Exit status for configuration errors and a failed run summary.
pub const EXIT_FAILURE: i32 = 1;
/// Exit status when ffprobe could not produce a report.
pub const EXIT_PROBE_FAILED: i32 = 3;
/// Exit status when the frame report was rejected (strict mode).
pub const EXIT_FILTER_FAILED: i32 = 4;
/// Exit status when the report could not be written.
pub const EXIT_WRITE_FAILED: i32 = 5;

/// Maps an error to the process exit status for its stage.
#[must_use]
pub fn exit_code(error: &CoreError) -> i32 {
    match error.stage() {
        Stage::Config | Stage::Summary => EXIT_FAILURE,
        Stage::Probe => EXIT_PROBE_FAILED,
        Stage::Filter => EXIT_FILTER_FAILED,
        Stage::Write => EXIT_WRITE_FAILED,
    }
}
