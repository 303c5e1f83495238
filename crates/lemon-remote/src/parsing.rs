//! JSON parsing for the menu snapshot.
//!
//! Converts the raw response document into `NewMenuItem`s. A snapshot is
//! all-or-nothing: one bad entry rejects the whole document, so the store is
//! never populated from a partial menu.

use lemon_core::NewMenuItem;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{RemoteError, RemoteResult};
use crate::models::WireMenuItem;

/// Extract the menu items from a snapshot document.
///
/// An empty `menu` array yields an empty snapshot.
pub fn parse_snapshot(json: &Value) -> RemoteResult<Vec<NewMenuItem>> {
    let menu = json.get("menu").ok_or(RemoteError::MissingMenu)?;

    let entries = menu.as_array().ok_or_else(|| RemoteError::MalformedMenu {
        message: "`menu` is not an array".to_string(),
    })?;

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| parse_item(index, entry))
        .collect()
}

/// Parse a single entry of the `menu` array.
fn parse_item(index: usize, entry: &Value) -> RemoteResult<NewMenuItem> {
    let wire = WireMenuItem::deserialize(entry).map_err(|e| malformed(index, &e.to_string()))?;

    if wire.name.trim().is_empty() {
        return Err(malformed(index, "empty name"));
    }

    let price = wire
        .price
        .amount()
        .ok_or_else(|| malformed(index, "price is not a non-negative number"))?;

    Ok(NewMenuItem {
        name: wire.name,
        price,
        description: wire.description.unwrap_or_default(),
        image: wire.image.unwrap_or_default(),
        category: wire.category,
    })
}

fn malformed(index: usize, reason: &str) -> RemoteError {
    RemoteError::MalformedMenu {
        message: format!("item {index}: {reason}"),
    }
}
