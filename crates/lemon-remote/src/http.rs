//! HTTP backend abstraction for the menu endpoint.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest and performs exactly one request per call.

use crate::config::MenuClientConfig;
use crate::error::{RemoteError, RemoteResult};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can fetch JSON from URLs.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Fetch JSON from a URL and deserialize it.
    ///
    /// Non-success statuses fail with `RemoteError::RequestFailed`; a body
    /// that does not decode fails with `RemoteError::JsonParse`.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> RemoteResult<T>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &MenuClientConfig) -> RemoteResult<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> RemoteResult<T> {
        let response = self.client.get(url.as_str()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::RequestFailed {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        // Raw GitHub serves JSON as text/plain, so decode the bytes ourselves
        // instead of trusting the content type.
        let body = response.bytes().await?;
        let data: T = serde_json::from_slice(&body)?;
        Ok(data)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================


#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_reqwest_backend_creation() {
        let config = MenuClientConfig::new().with_timeout(Duration::from_secs(5));
        assert!(ReqwestBackend::new(&config).is_ok());
    }

    mod fake_backend_tests {
        use super::super::testing::*;
        use super::*;
        use serde_json::json;

        #[tokio::test]
        async fn test_fake_backend_returns_canned_response() {
            let backend = FakeBackend::new().with_response(
                "capstone",
                CannedResponse::json(&json!({"menu": []})),
            );

            let url = Url::parse("https://example.com/capstone.json").unwrap();
            let result: serde_json::Value = backend.get_json(&url).await.unwrap();

            assert_eq!(result["menu"], json!([]));
            assert_eq!(backend.requests(), 1);
        }

        #[tokio::test]
        async fn test_fake_backend_returns_404_for_unknown_url() {
            let backend = FakeBackend::new();
            let url = Url::parse("https://example.com/unknown").unwrap();

            let result: RemoteResult<serde_json::Value> = backend.get_json(&url).await;
            assert!(matches!(
                result,
                Err(RemoteError::RequestFailed { status: 404, .. })
            ));
        }

        #[tokio::test]
        async fn test_fake_backend_non_json_body() {
            let backend = FakeBackend::new().with_default(CannedResponse::body("<html>"));
            let url = Url::parse("https://example.com/anything").unwrap();

            let result: RemoteResult<serde_json::Value> = backend.get_json(&url).await;
            assert!(matches!(result, Err(RemoteError::JsonParse(_))));
        }
    }
}
