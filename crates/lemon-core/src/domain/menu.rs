//! Menu domain types.
//!
//! These types represent menu items in the system, independent of
//! how they are stored or fetched.

use serde::{Deserialize, Serialize};

/// Category assigned to items whose source payload carries none.
pub const DEFAULT_CATEGORY: &str = "main";

// ─────────────────────────────────────────────────────────────────────────────
// Menu Item Types
// ─────────────────────────────────────────────────────────────────────────────

/// A dish that exists in the local store with a database ID.
///
/// Use `NewMenuItem` for dishes that haven't been persisted yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Store-assigned identity.
    pub id: i64,
    /// Display name, also the sort key and the text-search target.
    pub name: String,
    /// Price in the menu's currency.
    pub price: f64,
    /// Free-text description (may be empty).
    pub description: String,
    /// Image reference token, resolved by the presentation layer.
    pub image: String,
    /// Facet label. Always set once persisted.
    pub category: String,
}

/// A dish as delivered by the remote snapshot, before persistence.
///
/// `category` stays optional here; the store applies
/// [`DEFAULT_CATEGORY`] when writing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMenuItem {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: Option<String>,
}

impl NewMenuItem {
    /// Create a new item with the minimum required fields.
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
            description: String::new(),
            image: String::new(),
            category: None,
        }
    }

    /// Set the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the image token.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// The category that will be written for this item.
    ///
    /// Blank categories count as absent.
    pub fn category_or_default(&self) -> &str {
        self.category
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(DEFAULT_CATEGORY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_defaults_to_main() {
        let item = NewMenuItem::new("Bruschetta", 5.99);
        assert_eq!(item.category_or_default(), "main");
    }

    #[test]
    fn test_blank_category_defaults_to_main() {
        let item = NewMenuItem::new("Bruschetta", 5.99).with_category("  ");
        assert_eq!(item.category_or_default(), DEFAULT_CATEGORY);
    }

    #[test]
    fn test_explicit_category_is_kept() {
        let item = NewMenuItem::new("Lemon Dessert", 4.99).with_category("desserts");
        assert_eq!(item.category_or_default(), "desserts");
    }

    #[test]
    fn test_new_item_deserializes_without_optional_fields() {
        let item: NewMenuItem =
            serde_json::from_str(r#"{"name": "Pasta", "price": 8.5}"#).unwrap();
        assert_eq!(item.name, "Pasta");
        assert!(item.description.is_empty());
        assert!(item.category.is_none());
    }
}
