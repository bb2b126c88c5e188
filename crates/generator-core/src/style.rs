//! Severity-styled message templates
//!
//! Each helper wraps a plain message in one color style. Styling is for
//! human readers only and never affects program logic.

use colored::{ColoredString, Colorize};

/// Informational messages (green)
pub fn info(message: &str) -> ColoredString {
    message.green()
}

/// Warnings (bold yellow)
pub fn warn(message: &str) -> ColoredString {
    message.yellow().bold()
}

/// Errors (bold red)
pub fn error(message: &str) -> ColoredString {
    message.red().bold()
}

/// Verbose progress lines (blue)
pub fn verbose(message: &str) -> ColoredString {
    message.blue()
}

/// Verbose phase trace lines (bold blue)
pub fn verbose_priority(message: &str) -> ColoredString {
    message.blue().bold()
}

/// Debug internals (magenta)
pub fn debug(message: &str) -> ColoredString {
    message.magenta()
}
