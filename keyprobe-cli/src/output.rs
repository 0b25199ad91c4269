//! Terminal output helpers: styled status lines and the probe spinner.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use keyprobe_core::CoreError;
use std::fmt::Display;
use std::time::Duration;

/// Print a success line to stdout.
pub fn print_success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print a label/value line to stdout with the label colored.
pub fn print_info<T: Display>(label: &str, value: T) {
    println!("{}: {}", style(label).cyan(), value);
}

/// Print a failure to stderr, naming the stage that failed.
pub fn print_error(error: &CoreError) {
    eprintln!(
        "{} {} failed: {}",
        style("✗").red().bold(),
        style(error.stage()).red().bold(),
        error
    );
}

/// Spinner shown on stderr while ffprobe runs. Hidden when `visible` is false.
pub fn probe_spinner(visible: bool, message: impl Into<String>) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg} ({elapsed})")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.into());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
