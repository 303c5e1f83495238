//! Profile service - onboarding, profile edits and logout.

use std::sync::Arc;

use tracing::info;

use crate::domain::{ProfileUpdate, UserProfile};
use crate::ports::{CoreError, ProfileRepository};
use crate::utils::validation::{format_phone_number, validate_onboarding, validate_profile};

/// Service for the local user profile.
pub struct ProfileService {
    repo: Arc<dyn ProfileRepository>,
}

impl ProfileService {
    /// Create a new profile service with the given repository.
    pub fn new(repo: Arc<dyn ProfileRepository>) -> Self {
        Self { repo }
    }

    /// Load the stored profile.
    pub async fn get(&self) -> Result<UserProfile, CoreError> {
        self.repo.load().await.map_err(CoreError::from)
    }

    /// Whether onboarding has been completed.
    pub async fn is_onboarded(&self) -> Result<bool, CoreError> {
        Ok(self.get().await?.onboarding_completed)
    }

    /// Validate and store onboarding input, marking onboarding complete.
    pub async fn complete_onboarding(
        &self,
        first_name: &str,
        email: &str,
    ) -> Result<UserProfile, CoreError> {
        validate_onboarding(first_name, email)?;

        let mut profile = self.repo.load().await?;
        profile.first_name = first_name.trim().to_string();
        profile.email = email.trim().to_string();
        profile.onboarding_completed = true;

        self.repo.save(&profile).await?;
        info!(first_name = %profile.first_name, "Onboarding completed");
        Ok(profile)
    }

    /// Apply a partial update and persist the result.
    pub async fn update(&self, update: ProfileUpdate) -> Result<UserProfile, CoreError> {
        let mut profile = self.repo.load().await?;

        if let Some(first_name) = update.first_name {
            profile.first_name = first_name.trim().to_string();
        }
        if let Some(last_name) = update.last_name {
            profile.last_name = last_name.trim().to_string();
        }
        if let Some(email) = update.email {
            profile.email = email.trim().to_string();
        }
        if let Some(phone) = update.phone_number {
            profile.phone_number = format_phone_number(&phone);
        }
        if let Some(avatar) = update.avatar {
            profile.avatar = avatar;
        }
        if let Some(notifications) = update.notifications {
            profile.notifications = notifications;
        }

        validate_profile(&profile)?;
        self.repo.save(&profile).await?;
        Ok(profile)
    }

    /// Forget the stored profile. The menu cache is left intact.
    pub async fn logout(&self) -> Result<(), CoreError> {
        self.repo.clear().await?;
        info!("Profile cleared");
        Ok(())
    }
}
