//! Command handlers that delegate to `AppCore`.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<(), CliError>`
//! - Thin wrappers that:
//!   1. Parse/validate CLI-specific input
//!   2. Call `AppCore` methods
//!   3. Format output for the terminal
//!
//! Handlers should NOT:
//! - Access stores directly
//! - Contain business logic
//! - Manage database connections

pub mod browse;
pub mod categories;
pub mod menu;
pub mod onboard;
pub mod profile;
