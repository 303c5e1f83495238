//! Input validation for onboarding and profile editing.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::domain::UserProfile;

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s]+$").expect("name pattern is valid"));

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Maximum number of digits kept in a phone number.
const PHONE_DIGITS: usize = 10;

/// Validation errors for profile input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("First name must contain letters and spaces only, got '{0}'")]
    InvalidFirstName(String),

    #[error("Last name must contain letters and spaces only, got '{0}'")]
    InvalidLastName(String),

    #[error("Invalid email address '{0}'")]
    InvalidEmail(String),
}

/// True when `name` is non-blank and made of ASCII letters and spaces.
pub fn is_valid_name(name: &str) -> bool {
    let trimmed = name.trim();
    !trimmed.is_empty() && NAME_PATTERN.is_match(trimmed)
}

/// True when `email` has the shape `local@domain.tld`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email.trim())
}

/// Format a phone number as `(123) 456-7890`.
///
/// Non-digits are dropped and at most ten digits are kept. Partial input
/// renders progressively: `"1234"` becomes `"(123) 4"`.
pub fn format_phone_number(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(PHONE_DIGITS)
        .collect();

    let (area, rest) = digits.split_at(digits.len().min(3));
    let (exchange, line) = rest.split_at(rest.len().min(3));

    let mut formatted = String::new();
    if !area.is_empty() {
        formatted.push('(');
        formatted.push_str(area);
    }
    if !exchange.is_empty() {
        formatted.push_str(") ");
        formatted.push_str(exchange);
    }
    if !line.is_empty() {
        formatted.push('-');
        formatted.push_str(line);
    }
    formatted
}

/// Validate the fields required to finish onboarding.
pub fn validate_onboarding(first_name: &str, email: &str) -> Result<(), ProfileError> {
    if !is_valid_name(first_name) {
        return Err(ProfileError::InvalidFirstName(first_name.to_string()));
    }
    if !is_valid_email(email) {
        return Err(ProfileError::InvalidEmail(email.to_string()));
    }
    Ok(())
}

/// Validate a complete profile before it is saved.
///
/// An empty last name is allowed.
pub fn validate_profile(profile: &UserProfile) -> Result<(), ProfileError> {
    validate_onboarding(&profile.first_name, &profile.email)?;
    if !profile.last_name.trim().is_empty() && !is_valid_name(&profile.last_name) {
        return Err(ProfileError::InvalidLastName(profile.last_name.clone()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(is_valid_name("Tilly"));
        assert!(is_valid_name("  Mary Ann "));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("   "));
        assert!(!is_valid_name("R2D2"));
        assert!(!is_valid_name("O'Brien"));
    }

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("tilly@littlelemon.com"));
        assert!(is_valid_email(" tilly@little.lemon.com "));
        assert!(!is_valid_email("tilly@littlelemon"));
        assert!(!is_valid_email("tilly littlelemon.com"));
        assert!(!is_valid_email("@littlelemon.com"));
    }

    #[test]
    fn test_format_phone_number_progressive() {
        assert_eq!(format_phone_number(""), "");
        assert_eq!(format_phone_number("12"), "(12");
        assert_eq!(format_phone_number("1234"), "(123) 4");
        assert_eq!(format_phone_number("1234567"), "(123) 456-7");
        assert_eq!(format_phone_number("(123) 456-7890"), "(123) 456-7890");
    }

    #[test]
    fn test_format_phone_number_truncates_extra_digits() {
        assert_eq!(format_phone_number("123456789012"), "(123) 456-7890");
    }

    #[test]
    fn test_validate_onboarding() {
        assert!(validate_onboarding("Tilly", "tilly@littlelemon.com").is_ok());
        assert_eq!(
            validate_onboarding("", "tilly@littlelemon.com"),
            Err(ProfileError::InvalidFirstName(String::new()))
        );
        assert!(matches!(
            validate_onboarding("Tilly", "nope"),
            Err(ProfileError::InvalidEmail(_))
        ));
    }

    #[test]
    fn test_validate_profile_last_name() {
        let mut profile = UserProfile {
            first_name: "Tilly".to_string(),
            email: "tilly@littlelemon.com".to_string(),
            ..Default::default()
        };
        assert!(validate_profile(&profile).is_ok());

        profile.last_name = "D0e".to_string();
        assert!(matches!(
            validate_profile(&profile),
            Err(ProfileError::InvalidLastName(_))
        ));
    }
}
