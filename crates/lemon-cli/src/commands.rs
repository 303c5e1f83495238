//! Main commands enum and subcommands.

use clap::{Args, Subcommand};

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Print the menu, fetching it on first run
    Menu {
        /// Only dishes whose name contains this text
        #[arg(short, long)]
        search: Option<String>,
        /// Only dishes in this category (repeatable)
        #[arg(short, long)]
        category: Vec<String>,
        /// Also print resolved image URLs
        #[arg(long)]
        images: bool,
    },

    /// List the menu categories
    Categories,

    /// Filter the menu interactively from stdin
    ///
    /// Each line replaces the search text; a line starting with `#`
    /// toggles the named category. End input (Ctrl-D) to quit.
    Browse,

    /// Register the local user
    Onboard {
        /// First name (letters and spaces)
        #[arg(long)]
        first_name: String,
        /// Email address
        #[arg(long)]
        email: String,
    },

    /// Inspect or edit the stored profile
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },
}

/// Profile subcommands.
#[derive(Subcommand)]
pub enum ProfileCommand {
    /// Show the stored profile
    Show,
    /// Update profile fields
    Set(ProfileSetArgs),
    /// Forget the stored profile (the menu cache is kept)
    Logout,
}

/// Fields accepted by `profile set`. Omitted fields are left unchanged.
#[derive(Args, Debug, Default)]
pub struct ProfileSetArgs {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    /// Phone number; non-digits are dropped and the rest formatted
    #[arg(long)]
    pub phone: Option<String>,
    /// Avatar image path or URL
    #[arg(long, conflicts_with = "remove_avatar")]
    pub avatar: Option<String>,
    /// Remove the avatar
    #[arg(long)]
    pub remove_avatar: bool,
    /// Order status notifications
    #[arg(long)]
    pub order_statuses: Option<bool>,
    /// Password change notifications
    #[arg(long)]
    pub password_changes: Option<bool>,
    /// Special offer notifications
    #[arg(long)]
    pub special_offers: Option<bool>,
    /// Newsletter
    #[arg(long)]
    pub newsletter: Option<bool>,
}
