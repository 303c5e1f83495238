//! Menu rendering: item rows, prices, category chips and image URLs.

use std::collections::BTreeSet;

use lemon_core::MenuItem;

use super::tables::{print_separator, truncate_string};

/// Folder holding the images referenced by the capstone snapshot.
pub const DEFAULT_IMAGE_BASE_URL: &str =
    "https://github.com/Meta-Mobile-Developer-PC/Working-With-Data-API/blob/main/images";

/// Resolve an image token to a displayable URL.
///
/// Absolute URLs pass through untouched; bare file names are looked up
/// under `base_url` with GitHub's `?raw=true` suffix.
///
/// ```rust
/// use lemon_cli::presentation::image_url;
///
/// assert_eq!(
///     image_url("https://example.com/images/", "pasta.jpg"),
///     "https://example.com/images/pasta.jpg?raw=true"
/// );
/// ```
pub fn image_url(base_url: &str, token: &str) -> String {
    if token.starts_with("http://") || token.starts_with("https://") {
        return token.to_string();
    }
    format!(
        "{}/{}?raw=true",
        base_url.trim_end_matches('/'),
        token.trim_start_matches('/')
    )
}

/// Chip label for a category: first letter upper-cased.
pub fn chip_label(category: &str) -> String {
    let mut chars = category.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Price with two decimals and a dollar sign.
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

/// Print the category chips, marking the selected ones.
pub fn print_category_chips(categories: &[String], selected: &BTreeSet<String>) {
    if categories.is_empty() {
        println!("(no categories)");
        return;
    }

    let chips: Vec<String> = categories
        .iter()
        .map(|c| {
            let mark = if selected.contains(c) { "x" } else { " " };
            format!("[{mark}] {}", chip_label(c))
        })
        .collect();
    println!("{}", chips.join("  "));
}

/// Print menu items as a table.
pub fn print_menu(items: &[MenuItem], image_base_url: Option<&str>) {
    if items.is_empty() {
        println!("No dishes match.");
        return;
    }

    println!("{:<26} {:>8}  {:<12} Description", "Dish", "Price", "Category");
    print_separator(90);

    for item in items {
        println!(
            "{:<26} {:>8}  {:<12} {}",
            truncate_string(&item.name, 25),
            format_price(item.price),
            truncate_string(&chip_label(&item.category), 12),
            truncate_string(&item.description, 40)
        );
        if let Some(base) = image_base_url {
            if !item.image.is_empty() {
                println!("{:<26} {}", "", image_url(base, &item.image));
            }
        }
    }

    println!("\n{} dish(es)", items.len());
}
