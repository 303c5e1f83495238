//! Menu filter criteria.
//!
//! Criteria are transient and owned by whoever drives the menu view.
//! They are executed against the local store by `MenuStore::query`.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Free-text and category criteria for a menu query.
///
/// An empty search text and an empty category set impose no restriction,
/// so `MenuFilter::default()` matches every row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuFilter {
    search_text: String,
    categories: BTreeSet<String>,
}

impl MenuFilter {
    /// Create an unrestricted filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text.
    #[must_use]
    pub fn with_search_text(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// Restrict results to the given categories.
    #[must_use]
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// The raw search text as entered.
    pub fn raw_search_text(&self) -> &str {
        &self.search_text
    }

    /// The effective search text: trimmed, or `None` when blank.
    pub fn search_text(&self) -> Option<&str> {
        let trimmed = self.search_text.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Selected categories in ascending order.
    pub const fn categories(&self) -> &BTreeSet<String> {
        &self.categories
    }

    /// Replace the search text.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Select a category if absent, deselect it if present.
    ///
    /// Returns `true` when the category is selected afterwards.
    pub fn toggle_category(&mut self, category: &str) -> bool {
        if self.categories.remove(category) {
            false
        } else {
            self.categories.insert(category.to_string());
            true
        }
    }

    /// Whether `category` is currently selected.
    pub fn is_selected(&self, category: &str) -> bool {
        self.categories.contains(category)
    }

    /// True when neither predicate applies.
    pub fn is_unrestricted(&self) -> bool {
        self.search_text().is_none() && self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_is_unrestricted() {
        assert!(MenuFilter::new().is_unrestricted());
    }

    #[test]
    fn test_whitespace_search_text_is_ignored() {
        let filter = MenuFilter::new().with_search_text("   ");
        assert_eq!(filter.search_text(), None);
        assert!(filter.is_unrestricted());
    }

    #[test]
    fn test_search_text_is_trimmed() {
        let filter = MenuFilter::new().with_search_text("  salad ");
        assert_eq!(filter.search_text(), Some("salad"));
        assert_eq!(filter.raw_search_text(), "  salad ");
    }

    #[test]
    fn test_toggle_category() {
        let mut filter = MenuFilter::new();
        assert!(filter.toggle_category("mains"));
        assert!(filter.is_selected("mains"));
        assert!(!filter.is_unrestricted());

        assert!(!filter.toggle_category("mains"));
        assert!(!filter.is_selected("mains"));
        assert!(filter.is_unrestricted());
    }

    #[test]
    fn test_categories_are_deduplicated_and_ordered() {
        let filter = MenuFilter::new().with_categories(["main", "desserts", "main"]);
        let cats: Vec<&str> = filter.categories().iter().map(String::as_str).collect();
        assert_eq!(cats, vec!["desserts", "main"]);
    }
}
