//! Store implementations using `SQLite`.
//!
//! These implementations encapsulate all SQL queries and database access.
//! The `SqlitePool` is confined to this module and never exposed through
//! the port trait signatures.

mod row_mappers;
mod sqlite_menu_store;
mod sqlite_profile_repository;

pub use sqlite_menu_store::SqliteMenuStore;
pub use sqlite_profile_repository::SqliteProfileRepository;
