/// Lumen Diagnostics - process-wide logger registry
///
/// Holds the logger used by the `engine_*` macros. The slot is lazily
/// initialised with a [`DefaultLogger`] and guarded by an RwLock so a custom
/// logger can be swapped in at any time.

use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;

use crate::log::{DefaultLogger, LogEntry, LogSeverity, Logger};

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

fn logger_slot() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger::default())))
}

/// Logger registry
///
/// # Example
///
/// ```no_run
/// use lumen_shader::lumen::{Diagnostics, log::{DefaultLogger, LogSeverity}};
///
/// // Show per-uniform trace output while debugging a material
/// Diagnostics::set_logger(DefaultLogger::new(LogSeverity::Trace));
/// ```
pub struct Diagnostics;

impl Diagnostics {
    /// Replace the current logger
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        if let Ok(mut lock) = logger_slot().write() {
            *lock = Box::new(logger);
        }
    }

    /// Restore the default console logger
    pub fn reset_logger() {
        if let Ok(mut lock) = logger_slot().write() {
            *lock = Box::new(DefaultLogger::default());
        }
    }

    /// Log a message without source location
    ///
    /// Used by `engine_trace!` through `engine_warn!`.
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        Self::dispatch(LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: None,
            line: None,
        });
    }

    /// Log a message with file:line information
    ///
    /// Used by `engine_error!`, `engine_err!` and `engine_bail!`.
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        Self::dispatch(LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: Some(file),
            line: Some(line),
        });
    }

    fn dispatch(entry: LogEntry) {
        if let Ok(lock) = logger_slot().read() {
            lock.log(&entry);
        }
    }
}

#[cfg(test)]
#[path = "diagnostics_tests.rs"]
mod tests;
