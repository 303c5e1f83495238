//! Composition utilities for building `AppCore` with `SQLite` backends.
//!
//! This module provides factory functions for wiring up the application
//! with `SQLite` stores. It is focused purely on construction and
//! should not contain any domain logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use lemon_core::{AppCore, MenuSource, Repos};

use crate::repositories::{SqliteMenuStore, SqliteProfileRepository};

/// Factory for creating store instances with `SQLite` backends.
pub struct CoreFactory;

impl CoreFactory {
    /// Build all `SQLite` stores from a pool.
    ///
    /// This is the recommended way for adapters to obtain stores.
    pub fn build_repos(pool: SqlitePool) -> Repos {
        Repos::new(
            Arc::new(SqliteMenuStore::new(pool.clone())),
            Arc::new(SqliteProfileRepository::new(pool)),
        )
    }

    /// Build a complete `AppCore` instance from a pool and a menu source.
    ///
    /// Equivalent to:
    ///
    /// ```ignore
    /// let repos = CoreFactory::build_repos(pool);
    /// let core = AppCore::new(repos, source);
    /// ```
    ///
    /// # Example
    ///
    /// ```ignore
    /// use lemon_db::{CoreFactory, setup_database};
    /// use lemon_remote::{DefaultMenuClient, MenuClientConfig};
    ///
    /// let pool = setup_database(&db_path).await?;
    /// let source = Arc::new(DefaultMenuClient::new(&MenuClientConfig::default())?);
    /// let core = CoreFactory::build_app_core(pool, source);
    /// ```
    pub fn build_app_core(pool: SqlitePool, source: Arc<dyn MenuSource>) -> AppCore {
        let repos = Self::build_repos(pool);
        AppCore::new(repos, source)
    }
}

/// Test database helper for integration tests.
///
/// Provides an in-memory `SQLite` database with full schema already applied.
/// Uses the production schema to ensure test parity.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database with full schema.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_memory_database().await?;
        Ok(Self { pool })
    }

    /// Get the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create a menu store using this test database.
    pub fn menu_store(&self) -> SqliteMenuStore {
        SqliteMenuStore::new(self.pool.clone())
    }

    /// Create a profile repository using this test database.
    pub fn profile_repository(&self) -> SqliteProfileRepository {
        SqliteProfileRepository::new(self.pool.clone())
    }
}
