// keyprobe-core/src/external/mocks.rs

// --- Mocking Infrastructure (for testing) ---

// Compiled for unit tests and when the "test-mocks" feature is enabled.

use super::FrameReportProbe;
use crate::error::{CoreError, CoreResult};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Scripted outcome of a mocked probe run.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// The probe succeeds and prints this report.
    Report(String),
    /// The probing tool is not installed.
    Missing,
    /// The probe is killed after this long.
    Timeout(Duration),
}

/// FrameReportProbe that returns a scripted response and records every call.
#[derive(Debug)]
pub struct MockFrameProbe {
    response: MockResponse,
    received_calls: RefCell<Vec<PathBuf>>,
}

impl MockFrameProbe {
    pub fn new(response: MockResponse) -> Self {
        Self {
            response,
            received_calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with_report(report: impl Into<String>) -> Self {
        Self::new(MockResponse::Report(report.into()))
    }

    /// Media paths the probe was asked about, in call order.
    pub fn received_calls(&self) -> Vec<PathBuf> {
        self.received_calls.borrow().clone()
    }
}

impl FrameReportProbe for MockFrameProbe {
    fn probe_frames(&self, input_path: &Path) -> CoreResult<String> {
        self.received_calls
            .borrow_mut()
            .push(input_path.to_path_buf());
        log::debug!("MockFrameProbe called for {}", input_path.display());

        match &self.response {
            MockResponse::Report(report) => Ok(report.clone()),
            MockResponse::Missing => Err(CoreError::DependencyNotFound("ffprobe".to_string())),
            MockResponse::Timeout(timeout) => Err(CoreError::CommandTimeout {
                command: "ffprobe".to_string(),
                timeout: *timeout,
            }),
        }
    }

    fn describe(&self) -> String {
        "mock ffprobe".to_string()
    }
}
