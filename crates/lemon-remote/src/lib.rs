#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod parsing;
mod port;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::{DefaultMenuClient, MenuClient};

// Configuration
pub use config::{DEFAULT_MENU_URL, MenuClientConfig};

// Errors surfaced by client construction
pub use error::{RemoteError, RemoteResult};

// Backend seam
pub use http::{HttpBackend, ReqwestBackend};

