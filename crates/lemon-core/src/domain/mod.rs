//! Domain types for the core.
//!
//! These are pure data types with no storage or transport dependencies.

mod filter;
mod menu;
mod profile;

pub use filter::MenuFilter;
pub use menu::{DEFAULT_CATEGORY, MenuItem, NewMenuItem};
pub use profile::{NotificationPreferences, ProfileUpdate, UserProfile};
