// ============================================================================
// keyprobe-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with the ffprobe Command-Line Tool
//
// This module encapsulates every interaction with the external probing tool.
// The pipeline depends only on the FrameReportProbe trait, so tests and
// offline runs can supply the raw frame report without spawning a process.
//
// KEY COMPONENTS:
// - FrameReportProbe: trait producing the raw per-frame report for a file
// - CommandFrameProbe: implementation that runs ffprobe as a subprocess
// - RawReportFile: implementation that reads a previously saved report
// - check_dependency: availability and version check for the tool

// ---- Internal crate imports ----
use crate::error::{CoreError, CoreResult, command_failed_error, command_start_error};

// ---- Standard library imports ----
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

// ============================================================================
// SUBMODULES
// ============================================================================

/// Runs ffprobe and captures its per-frame report
pub mod ffprobe_executor;

/// Scripted probe implementations for tests
#[cfg(any(test, feature = "test-mocks"))]
pub mod mocks;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use ffprobe_executor::CommandFrameProbe;

// ============================================================================
// PROBE ABSTRACTION
// ============================================================================

/// Source of the raw per-frame report for a media file.
///
/// Implementations return the report text unmodified. A failed run must be
/// reported as an error, never as an empty string.
pub trait FrameReportProbe {
    /// Produces the raw frame report for `input_path`.
    fn probe_frames(&self, input_path: &Path) -> CoreResult<String>;

    /// Short name used in log lines.
    fn describe(&self) -> String;
}

/// Reads a frame report that was saved from an earlier ffprobe run.
///
/// The media path handed to [`FrameReportProbe::probe_frames`] is ignored.
#[derive(Debug, Clone)]
pub struct RawReportFile {
    path: PathBuf,
}

impl RawReportFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FrameReportProbe for RawReportFile {
    fn probe_frames(&self, _input_path: &Path) -> CoreResult<String> {
        log::debug!("Reading saved frame report from {}", self.path.display());
        std::fs::read_to_string(&self.path).map_err(|source| CoreError::RawReadError {
            path: self.path.clone(),
            source,
        })
    }

    fn describe(&self) -> String {
        format!("saved report {}", self.path.display())
    }
}

// ============================================================================
// DEPENDENCY CHECKING
// ============================================================================

/// Checks that the probing tool can be executed and returns its version line.
///
/// Runs `<tool> -version` and returns the first line of its output
/// (e.g. `ffprobe version 6.1.1 Copyright ...`).
///
/// # Errors
///
/// * `CoreError::DependencyNotFound` - the executable does not exist
/// * `CoreError::CommandStart` - the executable exists but could not start
/// * `CoreError::CommandFailed` - it ran but exited non-zero
pub fn check_dependency(tool: &Path) -> CoreResult<String> {
    let name = tool.display().to_string();

    let output = Command::new(tool)
        .arg("-version")
        .stdin(Stdio::null())
        .output()
        .map_err(|e| {
            log::warn!("Dependency check for '{}' failed to start: {}", name, e);
            command_start_error(name.clone(), e)
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(command_failed_error(name, output.status, stderr));
    }

    let version = String::from_utf8_lossy(&output.stdout)
        .lines()
        .next()
        .unwrap_or_default()
        .trim()
        .to_string();

    log::debug!("Found dependency {}: {}", name, version);
    Ok(version)
}
