#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod factory;
pub mod repositories;
pub mod setup;

// Re-export factory for convenient access
pub use factory::CoreFactory;

// Re-export TestDb for integration tests
#[cfg(any(test, feature = "test-utils"))]
pub use factory::TestDb;

// Re-export store implementations
pub use repositories::{SqliteMenuStore, SqliteProfileRepository};

// Re-export setup functions for convenient access
pub use setup::{create_schema, setup_database, setup_memory_database};
