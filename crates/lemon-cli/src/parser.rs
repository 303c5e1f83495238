//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::Parser;
use lemon_remote::DEFAULT_MENU_URL;

use crate::commands::Commands;
use crate::presentation::DEFAULT_IMAGE_BASE_URL;

/// Command-line interface for browsing the Little Lemon menu.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "lemon")]
#[command(about = "Browse the Little Lemon menu from your terminal")]
#[command(version)]
pub struct Cli {
    /// Path to the local SQLite database
    #[arg(long = "db-path", env = "LEMON_DB_PATH", global = true)]
    pub db_path: Option<PathBuf>,

    /// URL of the remote menu snapshot
    #[arg(long = "menu-url", env = "LEMON_MENU_URL", default_value = DEFAULT_MENU_URL, global = true)]
    pub menu_url: String,

    /// Base URL that image tokens are resolved against
    #[arg(
        long = "image-base-url",
        env = "LEMON_IMAGE_BASE_URL",
        default_value = DEFAULT_IMAGE_BASE_URL,
        global = true
    )]
    pub image_base_url: String,

    /// Debounce quiet period for interactive browsing, in milliseconds
    #[arg(
        long = "quiet-period-ms",
        env = "LEMON_QUIET_PERIOD_MS",
        default_value_t = 500,
        global = true
    )]
    pub quiet_period_ms: u64,

    /// Give up on the menu request after this many seconds
    #[arg(long = "timeout-secs", env = "LEMON_TIMEOUT_SECS", global = true)]
    pub timeout_secs: Option<u64>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
