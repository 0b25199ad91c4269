// keyprobe-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Args, Parser, Subcommand};
use keyprobe_core::config::{
    DEFAULT_FFPROBE_PATH, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, DEFAULT_STREAM_SELECTOR,
};
use keyprobe_core::{CoreConfig, CoreConfigBuilder};
use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Keyprobe: keyframe metadata extraction",
    long_about = "Runs ffprobe on a media file, keeps the I-frames of its first video stream \
                  and writes their timestamps to a report file."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging on the console
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Optional: Also write a debug log to a timestamped file in this directory
    #[arg(long, global = true, value_name = "LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extracts keyframe timestamps from a media file into a report
    Extract(ExtractArgs),
    /// Checks that ffprobe is installed and prints its version
    Check(CheckArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ExtractArgs {
    /// Media file to probe
    #[arg(short = 'i', long = "input", value_name = "INPUT_PATH", default_value = DEFAULT_INPUT_PATH)]
    pub input_path: PathBuf,

    /// Report destination (created or overwritten)
    #[arg(short = 'o', long = "output", value_name = "OUTPUT_PATH", default_value = DEFAULT_OUTPUT_PATH)]
    pub output_path: PathBuf,

    /// ffprobe executable to run
    #[arg(long, value_name = "FFPROBE", env = "KEYPROBE_FFPROBE", default_value = DEFAULT_FFPROBE_PATH)]
    pub ffprobe: PathBuf,

    /// Stream selector passed to ffprobe's -select_streams
    #[arg(long = "stream", value_name = "SELECTOR", default_value = DEFAULT_STREAM_SELECTOR)]
    pub stream_selector: String,

    /// Optional: Kill ffprobe if it runs longer than this many seconds
    #[arg(long, value_name = "SECONDS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Fail when the frame report contains blocks that are never closed
    #[arg(long)]
    pub strict: bool,

    /// Optional: Filter a saved ffprobe -show_frames report instead of running ffprobe
    #[arg(long, value_name = "REPORT_FILE")]
    pub raw_report: Option<PathBuf>,

    /// Print the run summary as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

impl ExtractArgs {
    /// Builds the core configuration for this invocation.
    pub fn to_config(&self) -> CoreConfig {
        let mut builder = CoreConfigBuilder::new()
            .input_path(self.input_path.clone())
            .output_path(self.output_path.clone())
            .ffprobe_path(self.ffprobe.clone())
            .stream_selector(self.stream_selector.clone())
            .strict(self.strict);
        if let Some(seconds) = self.timeout {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        builder.build()
    }
}

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// ffprobe executable to check
    #[arg(long, value_name = "FFPROBE", env = "KEYPROBE_FFPROBE", default_value = DEFAULT_FFPROBE_PATH)]
    pub ffprobe: PathBuf,
}

/// Parses the process arguments, exiting with a usage message on error.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Parses an explicit argument list.
pub fn parse_cli_from<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract_args(args: &[&str]) -> ExtractArgs {
        let cli = parse_cli_from(std::iter::once("keyprobe").chain(args.iter().copied()))
            .expect("arguments should parse");
        match cli.command {
            Commands::Extract(args) => args,
            other => panic!("expected extract, got {other:?}"),
        }
    }

    #[test]
    fn extract_defaults_to_source_and_iframe_info() {
        let args = extract_args(&["extract"]);
        assert_eq!(args.input_path, PathBuf::from("source.mp4"));
        assert_eq!(args.output_path, PathBuf::from("iframe_info.txt"));
        assert_eq!(args.stream_selector, "v:0");
        assert!(args.timeout.is_none());
    }

    #[test]
    fn extract_args_map_onto_core_config() {
        let args = extract_args(&[
            "extract", "-i", "in.mkv", "-o", "out.txt", "--timeout", "90", "--strict",
            "--stream", "v:1",
        ]);
        let config = args.to_config();
        assert_eq!(config.input_path, PathBuf::from("in.mkv"));
        assert_eq!(config.output_path, PathBuf::from("out.txt"));
        assert_eq!(config.timeout, Some(Duration::from_secs(90)));
        assert_eq!(config.stream_selector, "v:1");
        assert!(config.strict);
    }

    #[test]
    fn zero_timeout_is_rejected_by_the_parser() {
        assert!(parse_cli_from(["keyprobe", "extract", "--timeout", "0"]).is_err());
    }

    #[test]
    fn global_flags_are_accepted_after_the_subcommand() {
        let cli = parse_cli_from(["keyprobe", "check", "--verbose", "--no-color"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.no_color);
    }
}
