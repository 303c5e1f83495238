//! Remote menu source port.

use async_trait::async_trait;

use super::SourceError;
use crate::domain::NewMenuItem;

/// Fetches the canonical menu snapshot.
///
/// One call performs one request. An empty `Ok` vector is a genuinely
/// empty menu; an unusable payload is `SourceError::Format`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuSource: Send + Sync {
    async fn fetch_snapshot(&self) -> Result<Vec<NewMenuItem>, SourceError>;
}
