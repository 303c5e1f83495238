//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` or `reqwest` types in any signature
//! - Store traits are operation-focused, not SQL-focused
//! - Adapters map their internal errors onto the port errors below

pub mod menu_source;
pub mod menu_store;
pub mod profile_repository;

use std::sync::Arc;
use thiserror::Error;

pub use menu_source::MenuSource;
pub use menu_store::MenuStore;
pub use profile_repository::ProfileRepository;

#[cfg(test)]
pub use menu_source::MockMenuSource;

use crate::utils::validation::ProfileError;

/// Container for all store trait objects.
///
/// Lets adapters wire stores without coupling `AppCore` to concrete
/// implementations.
#[derive(Clone)]
pub struct Repos {
    /// Local menu store.
    pub menu: Arc<dyn MenuStore>,
    /// User profile storage.
    pub profile: Arc<dyn ProfileRepository>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(menu: Arc<dyn MenuStore>, profile: Arc<dyn ProfileRepository>) -> Self {
        Self { menu, profile }
    }
}

/// Errors raised by local storage.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors).
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// The backing store could not be opened or its schema created.
    #[error("Storage initialization failed: {0}")]
    Init(String),

    /// A read or write against an initialized store failed.
    #[error("Storage query failed: {0}")]
    Query(String),

    /// Serialization or deserialization of a stored value failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Errors raised by the remote menu source.
#[derive(Debug, Clone, Error)]
pub enum SourceError {
    /// Transport failure or non-success response status.
    #[error("Menu source unavailable: {message}")]
    Unavailable { message: String },

    /// The response did not carry a well-formed `menu` list.
    #[error("Malformed menu payload: {message}")]
    Format { message: String },
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (CLI exit codes, UI notices).
#[derive(Debug, Clone, Error)]
pub enum CoreError {
    /// Local storage failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Remote snapshot fetch failed.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Profile input was rejected.
    #[error(transparent)]
    Profile(#[from] ProfileError),

    /// Internal error (unexpected condition).
    #[error("Internal error: {0}")]
    Internal(String),
}
