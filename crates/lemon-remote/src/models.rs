//! Wire types for the menu snapshot.
//!
//! These types are internal to `lemon-remote`; the core only ever sees
//! `NewMenuItem`.

use serde::Deserialize;

/// One entry of the `menu` array as served by the endpoint.
///
/// Text fields tolerate `null`; `price` is checked in parsing.
#[derive(Debug, Clone, Deserialize)]
pub struct WireMenuItem {
    pub name: String,
    pub price: WirePrice,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Prices arrive either as JSON numbers or as numeric strings (`"12.99"`).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WirePrice {
    Number(f64),
    Text(String),
}

impl WirePrice {
    /// The price as a finite, non-negative number.
    pub fn amount(&self) -> Option<f64> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse().ok()?,
        };
        (value.is_finite() && value >= 0.0).then_some(value)
    }
}
