//! User profile domain types.

use serde::{Deserialize, Serialize};

/// Email notification preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationPreferences {
    pub order_statuses: bool,
    pub password_changes: bool,
    pub special_offers: bool,
    pub newsletter: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            order_statuses: true,
            password_changes: true,
            special_offers: true,
            newsletter: true,
        }
    }
}

/// The locally stored user profile.
///
/// A default profile has `onboarding_completed == false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    /// Avatar reference (file URI or URL).
    pub avatar: Option<String>,
    pub notifications: NotificationPreferences,
    pub onboarding_completed: bool,
}

impl UserProfile {
    /// "First Last", trimmed.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    /// Uppercase initials for the avatar placeholder.
    ///
    /// Uses the first and last word of the display name, or the first
    /// letter only for single-word names.
    pub fn initials(&self) -> String {
        let name = self.display_name();
        let words: Vec<&str> = name.split_whitespace().collect();
        let initials: String = match words.as_slice() {
            [] => String::new(),
            [only] => only.chars().take(1).collect(),
            [first, .., last] => first.chars().take(1).chain(last.chars().take(1)).collect(),
        };
        initials.to_uppercase()
    }
}

/// Partial update for a profile. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    /// `Some(None)` removes the avatar.
    pub avatar: Option<Option<String>>,
    pub notifications: Option<NotificationPreferences>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(first: &str, last: &str) -> UserProfile {
        UserProfile {
            first_name: first.to_string(),
            last_name: last.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_initials_two_names() {
        assert_eq!(profile("tilly", "doe").initials(), "TD");
    }

    #[test]
    fn test_initials_single_name() {
        assert_eq!(profile("Tilly", "").initials(), "T");
    }

    #[test]
    fn test_initials_empty() {
        assert_eq!(profile("", "").initials(), "");
    }

    #[test]
    fn test_display_name_trims() {
        assert_eq!(profile(" Tilly ", "").display_name(), "Tilly");
        assert_eq!(profile("Tilly", "Doe").display_name(), "Tilly Doe");
    }

    #[test]
    fn test_notifications_default_to_enabled() {
        let prefs = NotificationPreferences::default();
        assert!(prefs.order_statuses && prefs.newsletter);
    }
}
