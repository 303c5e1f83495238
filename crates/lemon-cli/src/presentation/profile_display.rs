//! Profile rendering.

use lemon_core::UserProfile;

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "--" } else { value }
}

/// Print the stored profile.
pub fn print_profile(profile: &UserProfile) {
    if !profile.onboarding_completed {
        println!("Not onboarded yet. Run 'lemon onboard --first-name NAME --email EMAIL'.");
        return;
    }

    println!("{} ({})", profile.display_name(), profile.initials());
    println!("  Email:  {}", or_dash(&profile.email));
    println!("  Phone:  {}", or_dash(&profile.phone_number));
    println!("  Avatar: {}", profile.avatar.as_deref().unwrap_or("--"));
    println!("  Notifications:");
    println!("    Order statuses:   {}", on_off(profile.notifications.order_statuses));
    println!("    Password changes: {}", on_off(profile.notifications.password_changes));
    println!("    Special offers:   {}", on_off(profile.notifications.special_offers));
    println!("    Newsletter:       {}", on_off(profile.notifications.newsletter));
}
