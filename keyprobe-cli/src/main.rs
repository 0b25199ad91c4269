//! Main entry point for the Keyprobe CLI application.
//!
//! Parses arguments, sets up logging, dispatches to the command handlers and
//! turns failures into a stage-specific message and exit status.

use keyprobe::error::{EXIT_FAILURE, exit_code};
use keyprobe::logging::init_logging;
use keyprobe::output::print_error;
use keyprobe::{Commands, parse_cli, run_check, run_extract};

use log::LevelFilter;
use std::process;

fn main() {
    let cli = parse_cli();

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let console_level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    match init_logging(console_level, cli.log_dir.as_deref()) {
        Ok(Some(path)) => log::info!("Logging to {}", path.display()),
        Ok(None) => {}
        Err(e) => {
            eprintln!("Failed to set up logging: {e}");
            process::exit(EXIT_FAILURE);
        }
    }

    let result = match &cli.command {
        Commands::Extract(args) => run_extract(args).map(|_| ()),
        Commands::Check(args) => run_check(args).map(|_| ()),
    };

    if let Err(e) = result {
        print_error(&e);
        process::exit(exit_code(&e));
    }
}
