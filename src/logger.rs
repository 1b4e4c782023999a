//! Logging utilities with colored output.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro for output only shown with `--verbose`
//! - `Event` for the per-image progress lines of a run
//!
//! # Example
//!
//! ```ignore
//! log!("run"; "processing {} files", count);
//! emit(&Event::Copied { source, static_dir, dest_name });
//! ```

use owo_colors::{OwoColorize, Stream};
use std::{
    fmt,
    io::{Write, stdout},
    path::PathBuf,
    sync::atomic::{AtomicBool, Ordering},
};

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

// ============================================================================
// Log Macro
// ============================================================================

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
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(module, &module_lower);

    let mut stdout = stdout().lock();
    writeln!(stdout, "{prefix} {message}").ok();
    stdout.flush().ok();
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let prefix = format!("[{module}]");
    match module_lower {
        "run" => prefix
            .if_supports_color(Stream::Stdout, |p| p.bright_blue())
            .to_string(),
        "check" => prefix
            .if_supports_color(Stream::Stdout, |p| p.bright_green())
            .to_string(),
        "error" | "warning" => prefix
            .if_supports_color(Stream::Stdout, |p| p.bright_red())
            .to_string(),
        _ => prefix
            .if_supports_color(Stream::Stdout, |p| p.bright_yellow())
            .to_string(),
    }
}

// ============================================================================
// Run Events
// ============================================================================

/// Progress line emitted while rewriting posts.
///
/// `Display` renders the exact plain-text line; [`emit`] only adds color
/// to the leading label, and only when stdout supports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// About to look up a referenced image.
    Checking { source: PathBuf },
    /// Image copied into the static directory.
    Copied {
        source: PathBuf,
        static_dir: PathBuf,
        dest_name: String,
    },
    /// Referenced image does not exist in the attachments directory.
    NotFound { source: PathBuf },
    /// Every post has been processed.
    Finished,
}

impl Event {
    fn label(&self) -> &'static str {
        match self {
            Self::Checking { .. } => "Checking for image:",
            Self::Copied { .. } => "Copied:",
            Self::NotFound { .. } => "Image not found:",
            Self::Finished => "Markdown files processed and images copied successfully.",
        }
    }

    fn detail(&self) -> Option<String> {
        match self {
            Self::Checking { source } | Self::NotFound { source } => {
                Some(source.display().to_string())
            }
            Self::Copied {
                source,
                static_dir,
                dest_name,
            } => Some(format!(
                "{} -> {}/{}",
                source.display(),
                static_dir.display(),
                dest_name
            )),
            Self::Finished => None,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.detail() {
            Some(detail) => write!(f, "{} {}", self.label(), detail),
            None => f.write_str(self.label()),
        }
    }
}

/// Write an event line to stdout.
pub fn emit(event: &Event) {
    let label = event.label();
    let colored = match event {
        Event::Checking { .. } => label
            .if_supports_color(Stream::Stdout, |l| l.dimmed())
            .to_string(),
        Event::Copied { .. } | Event::Finished => label
            .if_supports_color(Stream::Stdout, |l| l.green())
            .to_string(),
        Event::NotFound { .. } => label
            .if_supports_color(Stream::Stdout, |l| l.red())
            .to_string(),
    };

    let mut stdout = stdout().lock();
    match event.detail() {
        Some(detail) => writeln!(stdout, "{colored} {detail}").ok(),
        None => writeln!(stdout, "{colored}").ok(),
    };
    stdout.flush().ok();
}

// ============================================================================
// Tests
// ============================================================================
