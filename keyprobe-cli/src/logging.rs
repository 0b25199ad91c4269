// ============================================================================
// keyprobe-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: Console and file logging via fern
//
// The console chain writes to stderr so stdout stays clean for --json. It is
// quiet (warnings and errors) unless --verbose is given. The optional file
// chain always records debug output with timestamps.

use log::LevelFilter;
use std::path::{Path, PathBuf};

/// Returns the current local timestamp formatted as "YYYYMMDD_HHMMSS".
///
/// # Example
/// ```
/// let log_filename = format!("keyprobe_run_{}.log", keyprobe::logging::get_timestamp());
/// assert!(log_filename.ends_with(".log"));
/// ```
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Installs the global logger. Returns the log file path when `log_dir` is set.
pub fn init_logging(
    console_level: LevelFilter,
    log_dir: Option<&Path>,
) -> Result<Option<PathBuf>, fern::InitError> {
    let console = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {}", record.level(), message))
        })
        .level(console_level)
        .chain(std::io::stderr());

    let mut root = fern::Dispatch::new().chain(console);
    let mut log_path = None;

    if let Some(dir) = log_dir {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(format!("keyprobe_run_{}.log", get_timestamp()));
        let file = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "{} [{}] {}",
                    chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                    record.level(),
                    message
                ))
            })
            .level(LevelFilter::Debug)
            .chain(fern::log_file(&path)?);
        root = root.chain(file);
        log_path = Some(path);
    }

    root.apply()?;
    Ok(log_path)
}
