// ============================================================================
// keyprobe-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Custom Error Types for the Keyprobe Core Library
//
// Every failure in the probe -> filter -> write pipeline is surfaced as a
// CoreError. Nothing is swallowed: a failed ffprobe run, a discarded frame
// block in strict mode, and an unwritable report all reach the caller.
//
// KEY COMPONENTS:
// - CoreError: variants grouped by pipeline stage
// - CoreResult: result alias used across the crate
// - Helper constructors for command failures

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;

use thiserror::Error;

/// Pipeline stage an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Config,
    Probe,
    Filter,
    Write,
    /// Reporting the run summary after the report file is written
    Summary,
}

impl Stage {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Config => "config",
            Stage::Probe => "probe",
            Stage::Filter => "filter",
            Stage::Write => "write",
            Stage::Summary => "summary",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced by the keyprobe core library.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Required dependency not found: {0}")]
    DependencyNotFound(String),

    #[error("Failed to start {command}: {source}")]
    CommandStart {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("{command} exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("{command} timed out after {:.3}s", .timeout.as_secs_f64())]
    CommandTimeout { command: String, timeout: Duration },

    #[error("{count} frame block(s) were opened but never closed")]
    IncompleteFrames { count: usize },

    #[error("Failed to read raw probe report {}: {source}", .path.display())]
    RawReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write report {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize summary: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CoreError {
    /// Returns the pipeline stage that produced this error.
    #[must_use]
    pub fn stage(&self) -> Stage {
        match self {
            CoreError::Config(_) => Stage::Config,
            // Raw I/O errors only come from waiting on and reading the probe process.
            CoreError::Io(_)
            | CoreError::DependencyNotFound(_)
            | CoreError::CommandStart { .. }
            | CoreError::CommandFailed { .. }
            | CoreError::CommandTimeout { .. }
            | CoreError::RawReadError { .. } => Stage::Probe,
            CoreError::IncompleteFrames { .. } => Stage::Filter,
            CoreError::OutputWrite { .. } => Stage::Write,
            CoreError::Serialize(_) => Stage::Summary,
        }
    }
}

/// Result type for keyprobe core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Maps a spawn failure to `DependencyNotFound` or `CommandStart`.
pub fn command_start_error(command: impl Into<String>, source: io::Error) -> CoreError {
    let command = command.into();
    if source.kind() == io::ErrorKind::NotFound {
        CoreError::DependencyNotFound(command)
    } else {
        CoreError::CommandStart { command, source }
    }
}

pub fn command_failed_error(
    command: impl Into<String>,
    status: ExitStatus,
    stderr: impl Into<String>,
) -> CoreError {
    CoreError::CommandFailed {
        command: command.into(),
        status,
        stderr: stderr.into().trim().to_string(),
    }
}
