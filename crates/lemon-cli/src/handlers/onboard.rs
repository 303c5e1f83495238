//! Onboard command handler.

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the onboard command.
///
/// # Errors
///
/// Returns `CliError::Arguments` when the first name or email is rejected.
pub async fn execute(ctx: &CliContext, first_name: &str, email: &str) -> Result<(), CliError> {
    let profile = ctx
        .app()
        .profile()
        .complete_onboarding(first_name, email)
        .await?;

    println!("Welcome to Little Lemon, {}!", profile.first_name);
    Ok(())
}
