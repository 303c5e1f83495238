//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from `CoreError` to exit codes and user-facing messages.

use lemon_core::{CoreError, PathError, RepositoryError};
use lemon_remote::RemoteError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Core domain error.
    #[error("{0}")]
    Core(String),

    /// Rejected user input.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (stdin closed, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),

    /// The menu endpoint could not be reached or answered garbage.
    #[error("Menu unavailable: {0}")]
    Remote(String),
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
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Remote(_) => 69,   // EX_UNAVAILABLE
            Self::Database(_) => 73, // EX_CANTCREAT (closest fit)
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(repo_err) => repo_err.into(),
            CoreError::Source(source_err) => Self::Remote(source_err.to_string()),
            CoreError::Profile(profile_err) => Self::Arguments(profile_err.to_string()),
            CoreError::Internal(msg) => Self::Core(msg),
        }
    }
}

impl From<RepositoryError> for CliError {
    fn from(err: RepositoryError) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<RemoteError> for CliError {
    fn from(err: RemoteError) -> Self {
        Self::Config(format!("menu client: {err}"))
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lemon_core::{ProfileError, SourceError};

    #[test]
    fn test_core_error_mapping() {
        let err: CliError = CoreError::Source(SourceError::Unavailable {
            message: "connection refused".to_string(),
        })
        .into();
        assert!(matches!(err, CliError::Remote(_)));
        assert_eq!(err.exit_code(), 69);

        let err: CliError =
            CoreError::Profile(ProfileError::InvalidEmail("nope".to_string())).into();
        assert_eq!(err.exit_code(), 2);

        let err: CliError = CoreError::Repository(RepositoryError::Init("disk".to_string())).into();
        assert!(matches!(err, CliError::Database(_)));
        assert_eq!(err.exit_code(), 73);
    }

    #[test]
    fn test_io_error_mapping() {
        let err: CliError = std::io::Error::other("stdin closed").into();
        assert_eq!(err.exit_code(), 74);
        assert!(err.to_string().contains("stdin closed"));
    }
}
