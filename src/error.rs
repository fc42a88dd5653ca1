//! Error types for the licsync CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for licsync operations.
///
/// Each variant maps to a specific exit code. Every variant aborts the task
/// that raised it; nothing is retried.
#[derive(Error, Debug)]
pub enum LicsyncError {
    /// A required field is unset, a value is invalid, or the config file is unusable.
    #[error("{0}")]
    ConfigurationError(String),

    /// The canonical license could not be retrieved.
    #[error("failed to fetch license from '{url}': {reason}")]
    FetchError { url: String, reason: String },

    /// A file could not be read, or an output could not be written.
    #[error("{0}")]
    IoError(String),

    /// The configured assemble command failed.
    #[error("Build failed: {0}")]
    BuildError(String),
}

impl LicsyncError {
    /// Build a fetch error for `url`.
    pub fn fetch(url: impl Into<String>, reason: impl Into<String>) -> Self {
        LicsyncError::FetchError {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            LicsyncError::ConfigurationError(_) => exit_codes::CONFIGURATION_ERROR,
            LicsyncError::FetchError { .. } => exit_codes::FETCH_FAILURE,
            LicsyncError::IoError(_) => exit_codes::IO_FAILURE,
            LicsyncError::BuildError(_) => exit_codes::BUILD_FAILURE,
        }
    }
}

/// Result type alias for licsync operations.
pub type Result<T> = std::result::Result<T, LicsyncError>;
