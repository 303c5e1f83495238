//! Port trait implementation for `MenuClient`.
//!
//! This module implements the core-owned `MenuSource` trait, mapping the
//! client's internal errors onto `SourceError`.

use async_trait::async_trait;
use lemon_core::{MenuSource, NewMenuItem, SourceError};
use tracing::warn;

use crate::client::MenuClient;
use crate::error::RemoteError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `RemoteError` to core `SourceError`.
fn map_error(err: RemoteError) -> SourceError {
    match err {
        RemoteError::RequestFailed { status, url } => SourceError::Unavailable {
            message: format!("request failed with status {status}: {url}"),
        },
        RemoteError::Network(e) => SourceError::Unavailable {
            message: e.to_string(),
        },
        RemoteError::InvalidUrl(e) => SourceError::Unavailable {
            message: format!("invalid endpoint: {e}"),
        },
        RemoteError::JsonParse(e) => SourceError::Format {
            message: e.to_string(),
        },
        RemoteError::MissingMenu => SourceError::Format {
            message: "missing `menu` field".to_string(),
        },
        RemoteError::MalformedMenu { message } => SourceError::Format { message },
    }
}

// ============================================================================
// MenuSource Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend> MenuSource for MenuClient<B> {
    async fn fetch_snapshot(&self) -> Result<Vec<NewMenuItem>, SourceError> {
        self.fetch_menu().await.map_err(|e| {
            warn!(url = %self.endpoint(), error = %e, "Menu snapshot fetch failed");
            map_error(e)
        })
    }
}
