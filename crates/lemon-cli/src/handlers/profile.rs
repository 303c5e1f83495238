//! Profile command handlers.

use lemon_core::{ProfileUpdate, UserProfile};

use crate::bootstrap::CliContext;
use crate::commands::{ProfileCommand, ProfileSetArgs};
use crate::error::CliError;
use crate::presentation::print_profile;

/// Execute a profile subcommand.
pub async fn execute(ctx: &CliContext, command: ProfileCommand) -> Result<(), CliError> {
    let service = ctx.app().profile();

    match command {
        ProfileCommand::Show => {
            print_profile(&service.get().await?);
        }
        ProfileCommand::Set(args) => {
            let current = service.get().await?;
            let profile = service.update(build_update(&current, args)).await?;
            println!("Profile saved.\n");
            print_profile(&profile);
        }
        ProfileCommand::Logout => {
            service.logout().await?;
            println!("Logged out. The cached menu was kept.");
        }
    }

    Ok(())
}

/// Translate `profile set` flags into a partial update.
///
/// Notification flags are merged into the current preferences so that
/// unspecified toggles keep their value.
fn build_update(current: &UserProfile, args: ProfileSetArgs) -> ProfileUpdate {
    let toggles = [
        args.order_statuses,
        args.password_changes,
        args.special_offers,
        args.newsletter,
    ];

    let notifications = toggles.iter().any(Option::is_some).then(|| {
        let mut prefs = current.notifications;
        if let Some(v) = args.order_statuses {
            prefs.order_statuses = v;
        }
        if let Some(v) = args.password_changes {
            prefs.password_changes = v;
        }
        if let Some(v) = args.special_offers {
            prefs.special_offers = v;
        }
        if let Some(v) = args.newsletter {
            prefs.newsletter = v;
        }
        prefs
    });

    let avatar = if args.remove_avatar {
        Some(None)
    } else {
        args.avatar.map(Some)
    };

    ProfileUpdate {
        first_name: args.first_name,
        last_name: args.last_name,
        email: args.email,
        phone_number: args.phone,
        avatar,
        notifications,
    }
}
