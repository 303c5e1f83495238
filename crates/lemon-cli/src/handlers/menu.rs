//! Menu command handler.
//!
//! Populates the local store on first run, then prints the menu, filtered
//! when a search text or categories are given.

use lemon_core::MenuFilter;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::print_menu;

/// Execute the menu command.
///
/// # Errors
///
/// Fails if the first-run fetch fails or the store cannot be read.
pub async fn execute(
    ctx: &CliContext,
    search: Option<String>,
    categories: Vec<String>,
    show_images: bool,
) -> Result<(), CliError> {
    let menu = ctx.app().menu();
    let all = menu.ensure_populated().await?;

    let filter = MenuFilter::new()
        .with_search_text(search.unwrap_or_default())
        .with_categories(categories);

    let items = if filter.is_unrestricted() {
        all
    } else {
        menu.filter(&filter).await?
    };

    print_menu(&items, show_images.then(|| ctx.image_base_url()));
    Ok(())
}
