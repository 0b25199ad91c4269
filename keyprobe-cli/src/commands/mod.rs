//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command.

/// Runs the probe -> filter -> write pipeline.
pub mod extract;

/// Reports whether ffprobe is available.
pub mod check;
