//! Error types for menu snapshot fetching.
//!
//! These errors are mapped to `SourceError` at the port boundary; only
//! client construction surfaces them directly.

use thiserror::Error;

/// Result type alias for menu client operations.
pub type RemoteResult<T> = Result<T, RemoteError>;

/// Errors related to fetching and decoding the menu snapshot.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// The endpoint answered with a non-success status.
    #[error("Menu request failed with status {status}: {url}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Response body is not JSON.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Response has no top-level `menu` field.
    #[error("Response has no `menu` field")]
    MissingMenu,

    /// The `menu` field is present but unusable.
    #[error("Malformed menu: {message}")]
    MalformedMenu {
        /// Description of what was invalid
        message: String,
    },
}
