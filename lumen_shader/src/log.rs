//! Logging system for Lumen
//!
//! Diagnostics (compiler and linker logs, unreadable sources, lifecycle events)
//! are routed through a replaceable [`Logger`]. The default implementation
//! prints coloured lines to stdout and drops entries below its minimum severity.

use chrono::{DateTime, Local};
use colored::*;
use std::fmt;
use std::time::SystemTime;

/// Logger trait for custom logging implementations
///
/// Install one with `Diagnostics::set_logger`.
///
/// # Example
///
/// ```no_run
/// use lumen_shader::lumen::log::{Logger, LogEntry};
///
/// struct StderrLogger;
///
/// impl Logger for StderrLogger {
///     fn log(&self, entry: &LogEntry) {
///         eprintln!("[{}] {}", entry.source, entry.message);
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Process one log entry
    fn log(&self, entry: &LogEntry);
}

/// A single log record
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level
    pub severity: LogSeverity,

    /// When the entry was produced
    pub timestamp: SystemTime,

    /// Emitting component (e.g. "lumen::ShaderProgram", "lumen::gl")
    pub source: String,

    /// Log message
    pub message: String,

    /// Source file (only for detailed ERROR logs)
    pub file: Option<&'static str>,

    /// Source line (only for detailed ERROR logs)
    pub line: Option<u32>,
}

/// Log severity levels, ordered from most to least verbose
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogSeverity {
    /// Per-call noise (uniform lookups, binds)
    Trace,

    /// Object lifetimes
    Debug,

    /// Successful program builds
    Info,

    /// Degraded behaviour
    Warn,

    /// Failures, with file:line details
    Error,
}

impl LogSeverity {
    /// Fixed-width tag used in console output
    pub fn tag(self) -> &'static str {
        match self {
            LogSeverity::Trace => "TRACE",
            LogSeverity::Debug => "DEBUG",
            LogSeverity::Info => "INFO ",
            LogSeverity::Warn => "WARN ",
            LogSeverity::Error => "ERROR",
        }
    }
}

/// Console logger
///
/// Format:
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - Detailed: `[timestamp] [ERROR] [source] message (file:line)`
#[derive(Debug, Clone, Copy)]
pub struct DefaultLogger {
    /// Entries below this severity are dropped
    pub min_severity: LogSeverity,
}

impl DefaultLogger {
    /// Create a console logger that keeps entries at or above `min_severity`
    pub fn new(min_severity: LogSeverity) -> Self {
        Self { min_severity }
    }

    /// Whether an entry with this severity would be printed
    pub fn accepts(&self, severity: LogSeverity) -> bool {
        severity >= self.min_severity
    }

    /// Render an entry without colour codes
    pub fn format_plain(entry: &LogEntry) -> String {
        format_line(entry, entry.severity.tag(), &entry.source)
    }

    /// Render an entry as it is printed, with the tag and source coloured
    pub fn format_colored(entry: &LogEntry) -> String {
        let tag = entry.severity.tag();
        let severity_str = match entry.severity {
            LogSeverity::Trace => tag.bright_black(),
            LogSeverity::Debug => tag.cyan(),
            LogSeverity::Info => tag.green(),
            LogSeverity::Warn => tag.yellow(),
            LogSeverity::Error => tag.red().bold(),
        };
        format_line(entry, severity_str, entry.source.bright_blue())
    }
}

fn format_line(entry: &LogEntry, tag: impl fmt::Display, source: impl fmt::Display) -> String {
    let datetime: DateTime<Local> = entry.timestamp.into();
    let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f");

    match (entry.file, entry.line) {
        (Some(file), Some(line)) => format!(
            "[{}] [{}] [{}] {} ({}:{})",
            timestamp, tag, source, entry.message, file, line
        ),
        _ => format!("[{}] [{}] [{}] {}", timestamp, tag, source, entry.message),
    }
}

impl Default for DefaultLogger {
    fn default() -> Self {
        Self::new(LogSeverity::Info)
    }
}

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        if self.accepts(entry.severity) {
            println!("{}", Self::format_colored(entry));
        }
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message
///
/// ```no_run
/// lumen_shader::engine_trace!("lumen::ShaderProgram", "Uniform '{}' not found", "u_time");
/// ```
#[macro_export]
macro_rules! engine_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::lumen::Diagnostics::log(
            $crate::lumen::log::LogSeverity::Trace,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a DEBUG message
#[macro_export]
macro_rules! engine_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::lumen::Diagnostics::log(
            $crate::lumen::log::LogSeverity::Debug,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an INFO message
#[macro_export]
macro_rules! engine_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::lumen::Diagnostics::log(
            $crate::lumen::log::LogSeverity::Info,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a WARN message
#[macro_export]
macro_rules! engine_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::lumen::Diagnostics::log(
            $crate::lumen::log::LogSeverity::Warn,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an ERROR message with file:line information
///
/// ```no_run
/// lumen_shader::engine_error!("lumen::ShaderProgram", "Program '{}' failed to link", "basic");
/// ```
#[macro_export]
macro_rules! engine_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::lumen::Diagnostics::log_detailed(
            $crate::lumen::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

/// Log an ERROR message and evaluate to `Error::BackendError` carrying it
///
/// ```no_run
/// let err = lumen_shader::engine_err!("lumen::gl", "glCreateProgram failed: {}", "out of memory");
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::lumen::Error::BackendError(message)
    }};
}

/// Log an ERROR message and return `Err(Error::BackendError)` from the enclosing function
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
