//! Profile repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::UserProfile;

/// Repository for the single local user profile.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Load the stored profile, or a default one if nothing is stored.
    async fn load(&self) -> Result<UserProfile, RepositoryError>;

    /// Persist the profile, replacing any previous one.
    async fn save(&self, profile: &UserProfile) -> Result<(), RepositoryError>;

    /// Remove the stored profile.
    async fn clear(&self) -> Result<(), RepositoryError>;
}
