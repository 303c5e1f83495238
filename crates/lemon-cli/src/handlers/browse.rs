//! Browse command handler.
//!
//! Interactive, debounced filtering. Each stdin line replaces the search
//! text; a line starting with `#` toggles a category chip. Result sets are
//! printed whenever the browser publishes one.

use lemon_core::MenuItem;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{print_category_chips, print_menu};

/// One line of browse input.
#[derive(Debug, PartialEq, Eq)]
enum BrowseInput<'a> {
    /// Replace the search text (empty clears it).
    Search(&'a str),
    /// Toggle a category chip.
    Toggle(&'a str),
    /// Nothing to do.
    Ignore,
}

fn parse_line(line: &str) -> BrowseInput<'_> {
    match line.trim().strip_prefix('#') {
        Some(category) => {
            let category = category.trim();
            if category.is_empty() {
                BrowseInput::Ignore
            } else {
                BrowseInput::Toggle(category)
            }
        }
        None => BrowseInput::Search(line.trim()),
    }
}

/// Execute the browse command.
///
/// A failed first-run fetch is reported and browsing continues over an
/// empty menu. Ending input tears the browser down; a query still waiting
/// for its quiet period is discarded.
pub async fn execute(ctx: &CliContext) -> Result<(), CliError> {
    let menu = ctx.app().menu();

    let initial: Vec<MenuItem> = match menu.ensure_populated().await {
        Ok(items) => items,
        Err(e) => {
            warn!(error = %e, "Menu population failed, browsing an empty menu");
            eprintln!("Could not load the menu: {e}");
            Vec::new()
        }
    };
    let categories = menu.load_categories().await;

    let browser = ctx.app().browser(initial, ctx.quiet_period());
    let mut results = browser.subscribe();

    print_category_chips(&categories, browser.criteria().categories());
    print_menu(&browser.current(), None);
    println!("\nType to search, '#category' to toggle a chip, Ctrl-D to quit.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let outcome = loop {
        tokio::select! {
            line = lines.next_line() => {
                let line = match line {
                    Ok(Some(line)) => line,
                    Ok(None) => break Ok(()),
                    Err(e) => break Err(CliError::from(e)),
                };
                match parse_line(&line) {
                    BrowseInput::Search(text) => browser.set_search_text(text),
                    BrowseInput::Toggle(category) => {
                        browser.toggle_category(category);
                        print_category_chips(&categories, browser.criteria().categories());
                    }
                    BrowseInput::Ignore => {}
                }
            }
            changed = results.changed() => {
                if changed.is_err() {
                    break Ok(());
                }
                let items = results.borrow_and_update().clone();
                println!();
                print_menu(&items, None);
            }
        }
    };

    browser.teardown().await;
    outcome
}
