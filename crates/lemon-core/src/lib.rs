#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod debounce;
pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;
pub mod utils;

// Re-export commonly used types for convenience
pub use debounce::{DEFAULT_QUIET_PERIOD, QueryDebouncer};
pub use domain::{
    DEFAULT_CATEGORY, MenuFilter, MenuItem, NewMenuItem, NotificationPreferences, ProfileUpdate,
    UserProfile,
};
pub use paths::{PathError, data_root, database_path};
pub use ports::{
    CoreError, MenuSource, MenuStore, ProfileRepository, Repos, RepositoryError, SourceError,
};
pub use services::{AppCore, MenuBrowser, MenuRepository, ProfileService};
pub use utils::validation::{ProfileError, format_phone_number};
