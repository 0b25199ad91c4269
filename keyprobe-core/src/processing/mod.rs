// ============================================================================
// keyprobe-core/src/processing/mod.rs
// ============================================================================
//
// PROCESSING: Keyframe Extraction Pipeline
//
// Runs the three stages in order, each consuming the full output of the one
// before it:
//
//   probe (FrameReportProbe) -> filter (scan_frames) -> write (write_report)

pub mod frame_filter;

pub use frame_filter::{FrameScan, KeyframeRecord, filter_iframes, scan_frames};

use std::time::Instant;

use crate::config::CoreConfig;
use crate::error::{CoreError, CoreResult};
use crate::external::FrameReportProbe;
use crate::reporting::{ExtractionSummary, write_report};

/// Probes `config.input_path`, filters the report to keyframes and writes
/// them to `config.output_path`.
///
/// # Errors
///
/// * Configuration errors from [`CoreConfig::validate`]
/// * Any error from the probe (missing tool, non-zero exit, timeout)
/// * `CoreError::IncompleteFrames` when `config.strict` is set and the
///   report contained frame blocks that were never closed
/// * `CoreError::OutputWrite` when the report cannot be written
pub fn extract_keyframes<P>(config: &CoreConfig, probe: &P) -> CoreResult<ExtractionSummary>
where
    P: FrameReportProbe + ?Sized,
{
    config.validate()?;
    let started = Instant::now();

    log::info!(
        "Probing {} with {}",
        config.input_path.display(),
        probe.describe()
    );
    let raw = probe.probe_frames(&config.input_path)?;
    if raw.trim().is_empty() {
        log::warn!(
            "Probe produced no frame report for {}",
            config.input_path.display()
        );
    }

    let scan = scan_frames(&raw);
    log::info!(
        "Found {} keyframe(s) in {} frame(s)",
        scan.keyframes(),
        scan.frames
    );

    if scan.incomplete_blocks > 0 {
        if config.strict {
            log::error!(
                "{} frame block(s) were never closed",
                scan.incomplete_blocks
            );
            return Err(CoreError::IncompleteFrames {
                count: scan.incomplete_blocks,
            });
        }
        log::warn!(
            "Discarded {} frame block(s) that were never closed",
            scan.incomplete_blocks
        );
    }
    if scan.stray_end_markers > 0 {
        log::warn!(
            "Ignored {} frame end marker(s) with no open block",
            scan.stray_end_markers
        );
    }

    write_report(&scan.summaries, &config.output_path)?;
    log::info!(
        "Wrote {} keyframe(s) to {}",
        scan.keyframes(),
        config.output_path.display()
    );

    Ok(ExtractionSummary {
        input: config.input_path.clone(),
        output: config.output_path.clone(),
        keyframes: scan.keyframes(),
        frames: scan.frames,
        incomplete_blocks: scan.incomplete_blocks,
        elapsed_ms: u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
    })
}
