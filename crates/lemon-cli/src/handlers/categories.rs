//! Categories command handler.

use std::collections::BTreeSet;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::print_category_chips;

/// Execute the categories command.
///
/// The menu is populated first so a fresh install shows real chips.
pub async fn execute(ctx: &CliContext) -> Result<(), CliError> {
    let menu = ctx.app().menu();
    menu.ensure_populated().await?;

    let categories = menu.load_categories().await;
    print_category_chips(&categories, &BTreeSet::new());
    Ok(())
}
