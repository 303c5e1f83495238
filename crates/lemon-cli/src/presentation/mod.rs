//! Shared CLI presentation utilities.
//!
//! This module provides reusable display and formatting functions
//! for consistent CLI output across commands.
//!
//! # Guidelines
//!
//! - Keep this module format-only: no domain transforms
//! - Image resolution lives here, never in the core

pub mod menu_display;
pub mod profile_display;
pub mod tables;

// Re-export commonly used items
pub use menu_display::{
    DEFAULT_IMAGE_BASE_URL, chip_label, format_price, image_url, print_category_chips, print_menu,
};
pub use profile_display::print_profile;
pub use tables::{print_separator, truncate_string};
