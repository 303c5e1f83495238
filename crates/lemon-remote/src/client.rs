//! Menu snapshot client.

use lemon_core::NewMenuItem;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::config::MenuClientConfig;
use crate::error::RemoteResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::parsing::parse_snapshot;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default menu client using the reqwest HTTP backend.
pub type DefaultMenuClient = MenuClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the remote menu snapshot.
///
/// Generic over an HTTP backend so tests can inject canned responses.
/// Production code uses [`DefaultMenuClient`] through the `MenuSource` port.
pub struct MenuClient<B: HttpBackend> {
    backend: B,
    endpoint: Url,
}

impl DefaultMenuClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails if the endpoint is not a valid URL or the HTTP client cannot
    /// be built.
    pub fn new(config: &MenuClientConfig) -> RemoteResult<Self> {
        let endpoint = Url::parse(&config.endpoint)?;
        let backend = ReqwestBackend::new(config)?;
        Ok(Self { backend, endpoint })
    }
}

impl<B: HttpBackend> MenuClient<B> {
    /// Create a client over a custom backend.
    pub const fn with_backend(endpoint: Url, backend: B) -> Self {
        Self { backend, endpoint }
    }

    /// The snapshot URL this client fetches.
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch and decode the full menu snapshot with a single request.
    pub async fn fetch_menu(&self) -> RemoteResult<Vec<NewMenuItem>> {
        debug!(url = %self.endpoint, "Fetching menu snapshot");
        let json: Value = self.backend.get_json(&self.endpoint).await?;
        let items = parse_snapshot(&json)?;
        debug!(count = items.len(), "Decoded menu snapshot");
        Ok(items)
    }

    #[cfg(test)]
    pub(crate) const fn backend(&self) -> &B {
        &self.backend
    }
}
