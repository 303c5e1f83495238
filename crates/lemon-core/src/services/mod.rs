//! Core services.
//!
//! Services hold the application logic and depend only on port traits.

mod app_core;
mod menu_browser;
mod menu_repository;
mod profile_service;

pub use app_core::AppCore;
pub use menu_browser::MenuBrowser;
pub use menu_repository::MenuRepository;
pub use profile_service::ProfileService;
