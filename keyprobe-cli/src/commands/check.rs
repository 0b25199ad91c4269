//! `check` command: verifies that ffprobe can be executed.

use crate::cli::CheckArgs;
use crate::error::CliResult;
use crate::output::{print_info, print_success};

use keyprobe_core::check_dependency;

/// Executes the check command and returns the ffprobe version line.
pub fn run_check(args: &CheckArgs) -> CliResult<String> {
    log::debug!("Checking {}", args.ffprobe.display());
    let version = check_dependency(&args.ffprobe)?;

    print_info("ffprobe", args.ffprobe.display());
    print_info("Version", &version);
    print_success("ffprobe is available");
    Ok(version)
}
