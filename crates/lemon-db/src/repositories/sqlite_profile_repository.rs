//! `SQLite` implementation of the `ProfileRepository` trait.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use lemon_core::{ProfileRepository, RepositoryError, UserProfile};

use super::row_mappers::query_error;
use crate::setup::create_profile_schema;

const PROFILE_KEY: &str = "user_profile";

/// `SQLite` implementation of the `ProfileRepository` trait.
///
/// Stores the profile as a JSON blob in a key-value table, so new profile
/// fields need no schema change.
pub struct SqliteProfileRepository {
    pool: SqlitePool,
}

impl SqliteProfileRepository {
    /// Create a new `SQLite` profile repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Ensure the profile table exists.
    ///
    /// Call this during initialization to set up the schema.
    pub async fn ensure_table(&self) -> Result<(), RepositoryError> {
        create_profile_schema(&self.pool).await
    }
}

#[async_trait]
impl ProfileRepository for SqliteProfileRepository {
    async fn load(&self) -> Result<UserProfile, RepositoryError> {
        let row = sqlx::query("SELECT value FROM profile_kv WHERE key = ?")
            .bind(PROFILE_KEY)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error)?;

        match row {
            Some(r) => {
                let json: String = r.try_get("value").map_err(query_error)?;
                serde_json::from_str(&json)
                    .map_err(|e| RepositoryError::Serialization(e.to_string()))
            }
            None => Ok(UserProfile::default()),
        }
    }

    async fn save(&self, profile: &UserProfile) -> Result<(), RepositoryError> {
        let json = serde_json::to_string(profile)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;
        let updated_at = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

        sqlx::query("INSERT OR REPLACE INTO profile_kv (key, value, updated_at) VALUES (?, ?, ?)")
            .bind(PROFILE_KEY)
            .bind(&json)
            .bind(&updated_at)
            .execute(&self.pool)
            .await
            .map_err(query_error)?;

        Ok(())
    }

    async fn clear(&self) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM profile_kv WHERE key = ?")
            .bind(PROFILE_KEY)
            .execute(&self.pool)
            .await
            .map_err(query_error)?;

        Ok(())
    }
}
