//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from `CoreError` to exit codes and user-facing messages.

use snipdeck_core::{CoreError, RepositoryError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Storage or other failure without user-correctable detail.
    #[error("{0}")]
    Core(String),

    /// The validator refused the component source.
    #[error("Rejected: {0}")]
    Rejected(String),

    /// Invalid input other than component source.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// The caller is not signed in or not allowed to do this.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// The referenced snippet, category or tag does not exist.
    #[error("{0}")]
    NotFound(String),

    /// IO error (file not found, unreadable stdin, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Core(_) => 1,
            Self::Arguments(_) => 2,        // EX_USAGE
            Self::Rejected(_) => 65,        // EX_DATAERR
            Self::NotFound(_) => 66,        // EX_NOINPUT
            Self::Io(_) => 74,              // EX_IOERR
            Self::PermissionDenied(_) => 77, // EX_NOPERM
            Self::Config(_) => 78,          // EX_CONFIG
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Rejected(reason) => Self::Rejected(reason.to_string()),
            CoreError::Validation(msg) => Self::Arguments(msg),
            CoreError::PermissionDenied(msg) => Self::PermissionDenied(msg),
            CoreError::Repository(RepositoryError::NotFound(what)) => {
                Self::NotFound(format!("Not found: {what}"))
            }
            CoreError::Settings(settings_err) => Self::Config(settings_err.to_string()),
            other => {
                tracing::error!(error = %other, "Command failed");
                Self::Core(other.user_message())
            }
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
