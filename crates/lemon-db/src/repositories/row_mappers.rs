//! Row mapping helpers for `SQLite` queries.

use lemon_core::{DEFAULT_CATEGORY, MenuItem, RepositoryError};
use sqlx::Row;

/// Shared SELECT column list for menu queries.
pub const MENU_SELECT_COLUMNS: &str = "id, name, price, description, image, category";

/// Escape character used by [`like_pattern`].
pub const LIKE_ESCAPE: char = '\\';

/// Build a `%text%` pattern for `LIKE ... ESCAPE '\'`.
///
/// `%`, `_` and the escape character itself match literally.
pub fn like_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for ch in text.chars() {
        if matches!(ch, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

/// Parse a database row into a `MenuItem`.
///
/// Rows written before categories were defaulted on insert may carry a
/// NULL category; those read back as [`DEFAULT_CATEGORY`].
pub fn row_to_menu_item(row: &sqlx::sqlite::SqliteRow) -> Result<MenuItem, RepositoryError> {
    let description: Option<String> = row.try_get("description").map_err(query_error)?;
    let image: Option<String> = row.try_get("image").map_err(query_error)?;
    let category: Option<String> = row.try_get("category").map_err(query_error)?;

    Ok(MenuItem {
        id: row.try_get("id").map_err(query_error)?,
        name: row.try_get("name").map_err(query_error)?,
        price: row.try_get("price").map_err(query_error)?,
        description: description.unwrap_or_default(),
        image: image.unwrap_or_default(),
        category: category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
    })
}

/// Map a driver error onto the port error for an initialized store.
pub fn query_error(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Query(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern_wraps_plain_text() {
        assert_eq!(like_pattern("sal"), "%sal%");
        assert_eq!(like_pattern(""), "%%");
    }

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("50%"), "%50\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern("c\\d"), "%c\\\\d%");
    }
}
