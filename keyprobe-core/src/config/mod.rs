//! Configuration structures and constants for the keyprobe-core library.
//!
//! This module provides the configuration for one extraction run: which media
//! file to probe, where the report goes, and how the probing tool is invoked.

mod builder;

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{CoreError, CoreResult};

pub use builder::CoreConfigBuilder;

// Default constants

/// Default media file probed when no input is given.
pub const DEFAULT_INPUT_PATH: &str = "source.mp4";

/// Default report destination.
pub const DEFAULT_OUTPUT_PATH: &str = "iframe_info.txt";

/// Default probing tool, resolved through `PATH`.
pub const DEFAULT_FFPROBE_PATH: &str = "ffprobe";

/// Stream selector passed to `-select_streams`: the first video stream.
pub const DEFAULT_STREAM_SELECTOR: &str = "v:0";

/// Main configuration structure for the keyprobe-core library.
///
/// All fields have defaults, so a run against `source.mp4` writing
/// `iframe_info.txt` needs no configuration at all. The builder provides a
/// fluent way to override individual fields.
///
/// # Examples
///
/// ```rust
/// use keyprobe_core::config::CoreConfigBuilder;
/// use std::path::PathBuf;
/// use std::time::Duration;
///
/// let config = CoreConfigBuilder::new()
///     .input_path(PathBuf::from("movie.mkv"))
///     .output_path(PathBuf::from("movie_keyframes.txt"))
///     .timeout(Duration::from_secs(600))
///     .strict(true)
///     .build();
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Media file to probe
    pub input_path: PathBuf,

    /// Destination for the keyframe report (created or truncated)
    pub output_path: PathBuf,

    /// Probing tool executable
    pub ffprobe_path: PathBuf,

    /// Value for `-select_streams`
    pub stream_selector: String,

    /// Kill the probe after this long. `None` waits indefinitely.
    pub timeout: Option<Duration>,

    /// Treat frame blocks that are opened but never closed as a fatal error
    pub strict: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            ffprobe_path: PathBuf::from(DEFAULT_FFPROBE_PATH),
            stream_selector: DEFAULT_STREAM_SELECTOR.to_string(),
            timeout: None,
            strict: false,
        }
    }
}

impl CoreConfig {
    /// Creates a configuration for the given input and output with all other
    /// fields at their defaults.
    pub fn new(input_path: PathBuf, output_path: PathBuf) -> Self {
        Self {
            input_path,
            output_path,
            ..Default::default()
        }
    }

    /// Checks the configuration for values the pipeline cannot run with.
    ///
    /// The input file is not checked for existence; the probing tool reports
    /// unreadable or invalid media itself.
    pub fn validate(&self) -> CoreResult<()> {
        if self.stream_selector.trim().is_empty() {
            return Err(CoreError::Config(
                "stream selector must not be empty".to_string(),
            ));
        }

        if self.ffprobe_path.as_os_str().is_empty() {
            return Err(CoreError::Config(
                "ffprobe path must not be empty".to_string(),
            ));
        }

        if self.timeout.is_some_and(|t| t.is_zero()) {
            return Err(CoreError::Config(
                "timeout must be greater than zero".to_string(),
            ));
        }

        if self.output_path.as_os_str().is_empty() {
            return Err(CoreError::Config(
                "output path must not be empty".to_string(),
            ));
        }

        if self.input_path == self.output_path {
            return Err(CoreError::Config(format!(
                "output path {} would overwrite the input file",
                self.output_path.display()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_invocation() {
        let config = CoreConfig::default();
        assert_eq!(config.input_path, PathBuf::from("source.mp4"));
        assert_eq!(config.output_path, PathBuf::from("iframe_info.txt"));
        assert_eq!(config.stream_selector, "v:0");
        assert!(config.timeout.is_none());
        assert!(!config.strict);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_output_that_overwrites_input() {
        let config = CoreConfig::new(PathBuf::from("a.mp4"), PathBuf::from("a.mp4"));
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn rejects_zero_timeout_and_blank_selector() {
        let mut config = CoreConfig {
            timeout: Some(Duration::ZERO),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        config.timeout = Some(Duration::from_secs(1));
        config.stream_selector = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
