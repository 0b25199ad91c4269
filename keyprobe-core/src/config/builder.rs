// ============================================================================
// keyprobe-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for CoreConfig
//
// Fluent construction of CoreConfig. Every field starts at its default, so
// callers only set what they override.

// ---- Standard library imports ----
use std::path::PathBuf;
use std::time::Duration;

// ---- Internal crate imports ----
use super::CoreConfig;

/// Builder for creating CoreConfig instances.
///
/// # Examples
///
/// ```rust
/// use keyprobe_core::config::CoreConfigBuilder;
/// use std::path::PathBuf;
///
/// let config = CoreConfigBuilder::new()
///     .input_path(PathBuf::from("clip.mp4"))
///     .ffprobe_path(PathBuf::from("/opt/ffmpeg/bin/ffprobe"))
///     .stream_selector("v:1")
///     .build();
///
/// assert_eq!(config.stream_selector, "v:1");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CoreConfigBuilder {
    config: CoreConfig,
}

impl CoreConfigBuilder {
    /// Creates a new CoreConfigBuilder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the media file to probe.
    pub fn input_path(mut self, input_path: PathBuf) -> Self {
        self.config.input_path = input_path;
        self
    }

    /// Sets the report destination.
    pub fn output_path(mut self, output_path: PathBuf) -> Self {
        self.config.output_path = output_path;
        self
    }

    /// Sets the probing tool executable.
    pub fn ffprobe_path(mut self, ffprobe_path: PathBuf) -> Self {
        self.config.ffprobe_path = ffprobe_path;
        self
    }

    /// Sets the `-select_streams` value (e.g. `v:0`).
    pub fn stream_selector(mut self, selector: impl Into<String>) -> Self {
        self.config.stream_selector = selector.into();
        self
    }

    /// Sets a timeout for the probe process.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Sets whether incomplete frame blocks abort the run.
    pub fn strict(mut self, strict: bool) -> Self {
        self.config.strict = strict;
        self
    }

    /// Builds the CoreConfig. Call [`CoreConfig::validate`] before use.
    pub fn build(self) -> CoreConfig {
        self.config
    }
}
