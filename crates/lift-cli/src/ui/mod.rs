//! Terminal UI utilities for status messages and formatted output.
//!
//! Handles environment detection (CI, TTY) and degrades gracefully when
//! terminal features aren't available.

mod format;
mod messages;

pub use format::{format_duration, format_size};
pub use messages::{debug, error, info, success, warning};

/// Check if running in a CI environment.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
}

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR environment variables, falls back to
/// terminal capability detection.
pub fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }
    console::user_attended_stderr()
}

/// Initialize color support based on environment.
///
/// `owo-colors` respects NO_COLOR and terminal capabilities on its own; this
/// is an explicit initialization point for future extensibility.
pub fn init_colors() {
    let _ = should_use_color();
}
