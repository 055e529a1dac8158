//! Terminal UI utilities for status messages and formatted output.
//!
//! Handles environment detection (CI, TTY) and degrades gracefully when
//! terminal features aren't available.

mod format;
mod messages;

pub use format::format_duration;
pub use messages::{error, info, success, warning};

/// Whether output should be treated as an interactive terminal.
///
/// `--assume-tty` forces interactive treatment; otherwise the terminal
/// attachment of stderr is detected.
pub fn is_interactive(assume_tty: bool) -> bool {
    assume_tty || console::user_attended_stderr()
}

/// Check if color output should be enabled.
///
/// Respects `NO_COLOR` and `FORCE_COLOR`, falls back to terminal capability
/// detection.
pub fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }
    console::user_attended_stderr()
}
