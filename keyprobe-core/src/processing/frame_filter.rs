//! Keyframe filtering for ffprobe `-show_frames` reports.
//!
//! The report is a sequence of blocks:
//!
//! ```text
//! [FRAME]
//! pict_type=I
//! pts=100
//! pts_time=4.000000
//! ...
//! [/FRAME]
//! ```
//!
//! Each closed block whose `pict_type` is `I` becomes one summary line of the
//! form `pict_type=I, pts_time=<value>, pts=<value>`, with `N/A` standing in
//! for a missing field. Values are carried through verbatim.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

/// Line that opens a frame block.
pub const FRAME_START_MARKER: &str = "[FRAME]";
/// Line that closes a frame block.
pub const FRAME_END_MARKER: &str = "[/FRAME]";
/// Separator between key and value inside a block.
pub const KEY_VALUE_SEPARATOR: char = '=';

pub const PICT_TYPE_KEY: &str = "pict_type";
pub const PTS_KEY: &str = "pts";
pub const PTS_TIME_KEY: &str = "pts_time";

/// `pict_type` value that marks a keyframe.
pub const KEYFRAME_PICT_TYPE: &str = "I";
/// Placeholder for a field the block did not report.
pub const NOT_AVAILABLE: &str = "N/A";

/// Fields of one open frame block. Later assignments to a key replace
/// earlier ones.
#[derive(Debug, Default)]
struct FrameBlock {
    fields: HashMap<String, String>,
}

impl FrameBlock {
    fn insert(&mut self, key: &str, value: &str) {
        self.fields.insert(key.to_string(), value.to_string());
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    fn into_keyframe(self) -> Option<KeyframeRecord> {
        if self.get(PICT_TYPE_KEY) != Some(KEYFRAME_PICT_TYPE) {
            return None;
        }
        Some(KeyframeRecord {
            pts_time: self.get(PTS_TIME_KEY).unwrap_or(NOT_AVAILABLE).to_string(),
            pts: self.get(PTS_KEY).unwrap_or(NOT_AVAILABLE).to_string(),
        })
    }
}

/// One keyframe distilled from a closed frame block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyframeRecord {
    pub pts_time: String,
    pub pts: String,
}

impl fmt::Display for KeyframeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{PICT_TYPE_KEY}={KEYFRAME_PICT_TYPE}, {PTS_TIME_KEY}={}, {PTS_KEY}={}",
            self.pts_time, self.pts
        )
    }
}

/// Result of one pass over a frame report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FrameScan {
    /// Keyframe summary lines in the order their blocks closed
    pub summaries: Vec<String>,
    /// Blocks that were opened and properly closed
    pub frames: usize,
    /// Blocks discarded because a new block started, or input ended, first
    pub incomplete_blocks: usize,
    /// End markers seen with no open block
    pub stray_end_markers: usize,
}

impl FrameScan {
    pub fn keyframes(&self) -> usize {
        self.summaries.len()
    }
}

/// Parses a frame report and collects keyframe summaries with counters.
pub fn scan_frames(raw: &str) -> FrameScan {
    let mut scan = FrameScan::default();
    let mut open: Option<FrameBlock> = None;

    for (index, line) in raw.lines().enumerate() {
        let line = line.trim();

        if line == FRAME_START_MARKER {
            if open.replace(FrameBlock::default()).is_some() {
                log::debug!("Discarding unterminated frame block before line {}", index + 1);
                scan.incomplete_blocks += 1;
            }
        } else if line == FRAME_END_MARKER {
            match open.take() {
                Some(block) => {
                    scan.frames += 1;
                    if let Some(record) = block.into_keyframe() {
                        scan.summaries.push(record.to_string());
                    }
                }
                None => {
                    log::debug!("Ignoring end marker with no open block at line {}", index + 1);
                    scan.stray_end_markers += 1;
                }
            }
        } else if let Some(block) = open.as_mut() {
            if let Some((key, value)) = line.split_once(KEY_VALUE_SEPARATOR) {
                block.insert(key.trim(), value.trim());
            }
        }
    }

    if open.is_some() {
        log::debug!("Discarding frame block still open at end of report");
        scan.incomplete_blocks += 1;
    }

    scan
}

/// Returns the keyframe summary lines of a frame report, in input order.
pub fn filter_iframes(raw: &str) -> Vec<String> {
    scan_frames(raw).summaries
}
