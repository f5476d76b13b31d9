//! Error types for Lumen shader programs
//!
//! Every failure while building a program is reported through [`Error`]:
//! unreadable sources, stage compilation, program linking, and driver
//! refusals to allocate objects.

use std::fmt;
use std::path::PathBuf;

use crate::driver::ShaderStage;

/// Result type for Lumen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Lumen shader errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A shader source file could not be read
    SourceUnreadable {
        /// Path that was requested
        path: PathBuf,
        /// I/O error message
        message: String,
    },

    /// A shader stage failed to compile
    CompileFailed {
        /// Stage that failed
        stage: ShaderStage,
        /// Compiler diagnostic, bounded by `Config::info_log_capacity`
        log: String,
    },

    /// The program failed to link
    LinkFailed {
        /// Linker diagnostic, bounded by `Config::info_log_capacity`
        log: String,
    },

    /// Backend-specific error (object creation refused, etc.)
    BackendError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::SourceUnreadable { path, message } => {
                write!(f, "Shader source unreadable: {}: {}", path.display(), message)
            }
            Error::CompileFailed { stage, log } => {
                write!(f, "{} shader compilation failed: {}", stage, log)
            }
            Error::LinkFailed { log } => write!(f, "Program link failed: {}", log),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
