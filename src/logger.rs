//! Logging with colored module prefixes.
//!
//! Messages go to stderr so that stdout stays free for icon output.
//!
//! # Example
//!
//! ```ignore
//! log!("icons"; "wrote {} files", count);
//! debug!("catalog"; "loaded {} entries", n); // only with --verbose
//! ```

use owo_colors::{OwoColorize, Stream};
use std::io::{Write, stderr};
use std::sync::atomic::{AtomicBool, Ordering};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

/// Write one prefixed line to stderr.
pub fn log(module: &str, message: &str) {
    let prefix = format!("[{module}]");
    let mut stderr = stderr().lock();
    let written = match module.to_ascii_lowercase().as_str() {
        "error" => writeln!(
            stderr,
            "{} {message}",
            prefix.if_supports_color(Stream::Stderr, |p| p.bright_red())
        ),
        "debug" | "catalog" | "icon" => writeln!(
            stderr,
            "{} {message}",
            prefix.if_supports_color(Stream::Stderr, |p| p.bright_blue())
        ),
        _ => writeln!(
            stderr,
            "{} {message}",
            prefix.if_supports_color(Stream::Stderr, |p| p.bright_yellow())
        ),
    };
    written.ok();
}
