//! Local menu store trait definition.
//!
//! This port defines the interface for menu persistence and querying.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{MenuFilter, MenuItem, NewMenuItem};

/// Durable storage for menu items.
///
/// Call [`MenuStore::initialize`] before any other operation.
///
/// # Ordering
///
/// `list_all` and `query` return rows ascending by `name`. Implementations
/// must document the collation they use.
#[async_trait]
pub trait MenuStore: Send + Sync {
    /// Ensure the backing store and menu schema exist.
    ///
    /// Idempotent: repeated calls create nothing new and lose no data.
    /// Fails with `RepositoryError::Init`.
    async fn initialize(&self) -> Result<(), RepositoryError>;

    /// True iff the store holds zero menu items.
    async fn is_empty(&self) -> Result<bool, RepositoryError>;

    /// Atomically replace every stored item with `items`.
    ///
    /// Items without a category are written with
    /// [`DEFAULT_CATEGORY`](crate::domain::DEFAULT_CATEGORY). Readers observe
    /// either the previous set or the new one, never a mix.
    async fn replace_all(&self, items: &[NewMenuItem]) -> Result<(), RepositoryError>;

    /// All stored items, ordered by name.
    async fn list_all(&self) -> Result<Vec<MenuItem>, RepositoryError>;

    /// Distinct non-null categories, ascending.
    async fn distinct_categories(&self) -> Result<Vec<String>, RepositoryError>;

    /// Items matching `filter`, ordered by name.
    ///
    /// The text predicate is a substring match on `name`; the category
    /// predicate is set membership. Both are ANDed, and an unrestricted
    /// filter is equivalent to [`MenuStore::list_all`].
    async fn query(&self, filter: &MenuFilter) -> Result<Vec<MenuItem>, RepositoryError>;
}
