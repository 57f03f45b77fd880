//! Status message functions for terminal output.

use owo_colors::OwoColorize;

use super::{colors_enabled, is_quiet};

fn render(symbol: &str, message: &str, paint: impl Fn(&str) -> String) -> String {
    if colors_enabled() {
        format!("{} {}", paint(symbol), message)
    } else {
        format!("{} {}", symbol, message)
    }
}

/// Line for a non-error status message, or `None` in quiet mode.
fn status_line(symbol: &str, message: &str, paint: impl Fn(&str) -> String) -> Option<String> {
    (!is_quiet()).then(|| render(symbol, message, paint))
}

fn success_line(message: &str) -> Option<String> {
    status_line("✓", message, |s| s.green().bold().to_string())
}

fn info_line(message: &str) -> Option<String> {
    status_line("ℹ", message, |s| s.blue().bold().to_string())
}

/// Print a success message to stderr.
///
/// ```no_run
/// use packwright_cli::ui::success;
///
/// success("Build config is valid");
/// ```
pub fn success(message: &str) {
    if let Some(line) = success_line(message) {
        eprintln!("{line}");
    }
}

/// Print an info message to stderr.
pub fn info(message: &str) {
    if let Some(line) = info_line(message) {
        eprintln!("{line}");
    }
}

/// Print an error message to stderr, quiet or not.
pub fn error(message: &str) {
    eprintln!("{}", render("✗", message, |s| s.red().bold().to_string()));
}
