//! Core library for extracting keyframe metadata from ffprobe frame reports.
//!
//! The pipeline has three stages: run ffprobe against the first video stream
//! of a media file, filter its `-show_frames` report down to I-frames, and
//! write one summary line per keyframe to a report file.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use keyprobe_core::{CommandFrameProbe, CoreConfig, extract_keyframes};
//! use std::path::PathBuf;
//!
//! let config = CoreConfig::new(
//!     PathBuf::from("source.mp4"),
//!     PathBuf::from("iframe_info.txt"),
//! );
//! let probe = CommandFrameProbe::from_config(&config);
//!
//! let summary = extract_keyframes(&config, &probe).unwrap();
//! println!("{} keyframes written to {}", summary.keyframes, summary.output.display());
//! ```

pub mod config;
pub mod error;
pub mod external;
pub mod processing;
pub mod reporting;

// Re-exports for public API
pub use config::{CoreConfig, CoreConfigBuilder};
pub use error::{CoreError, CoreResult, Stage};
pub use external::{CommandFrameProbe, FrameReportProbe, RawReportFile, check_dependency};
pub use processing::{
    FrameScan, KeyframeRecord, extract_keyframes, filter_iframes, scan_frames,
};
pub use reporting::{ExtractionSummary, write_report};
