//! Library component for the Keyprobe CLI application.
//!
//! Holds the argument definitions and command logic the binary dispatches to,
//! so integration tests can exercise them directly.

/// Command-line interface definitions using clap
pub mod cli;

/// Command implementations for each subcommand
pub mod commands;

/// Result alias and exit codes
pub mod error;

/// Logger setup and timestamp helper
pub mod logging;

/// Styled terminal output
pub mod output;

// Re-exports for convenience
pub use cli::{CheckArgs, Cli, Commands, ExtractArgs, parse_cli, parse_cli_from};
pub use commands::check::run_check;
pub use commands::extract::run_extract;
