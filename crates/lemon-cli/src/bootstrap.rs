//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter:
//! - Database pool and stores (via lemon-db)
//! - Remote menu client (via lemon-remote)
//! - Core services (via lemon-core)
//!
//! Command handlers receive the fully-composed `AppCore` and delegate work to it.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use lemon_core::{AppCore, database_path};
use lemon_db::{CoreFactory, setup_database};
use lemon_remote::{DefaultMenuClient, MenuClientConfig};
use tracing::debug;

use crate::error::CliError;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Path to the `SQLite` database file.
    pub db_path: PathBuf,
    /// Remote menu client settings.
    pub menu: MenuClientConfig,
    /// Base URL for image token resolution.
    pub image_base_url: String,
    /// Debounce quiet period for interactive browsing.
    pub quiet_period: Duration,
}

impl CliConfig {
    /// Resolve configuration from parsed arguments.
    ///
    /// Without `--db-path` the database lives under the platform data root.
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let db_path = match &cli.db_path {
            Some(path) => path.clone(),
            None => database_path()?,
        };

        let mut menu = MenuClientConfig::new().with_endpoint(&cli.menu_url);
        if let Some(secs) = cli.timeout_secs {
            menu = menu.with_timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            db_path,
            menu,
            image_base_url: cli.image_base_url.clone(),
            quiet_period: Duration::from_millis(cli.quiet_period_ms),
        })
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The core application facade.
    pub app: AppCore,
    /// Base URL for image token resolution.
    pub image_base_url: String,
    /// Debounce quiet period for interactive browsing.
    pub quiet_period: Duration,
}

impl CliContext {
    /// Access the `AppCore`.
    pub const fn app(&self) -> &AppCore {
        &self.app
    }

    /// Base URL for image token resolution.
    pub fn image_base_url(&self) -> &str {
        &self.image_base_url
    }

    /// Debounce quiet period for interactive browsing.
    pub const fn quiet_period(&self) -> Duration {
        self.quiet_period
    }
}

/// Bootstrap the CLI application.
///
/// This is the composition root. It:
/// 1. Opens the database and applies the schema
/// 2. Builds the remote menu client
/// 3. Assembles the `AppCore` from stores and client
///
/// No network traffic happens here; the menu is fetched lazily by
/// `ensure_populated`.
pub async fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    // 1. Database pool with full schema setup
    let pool = setup_database(&config.db_path).await?;
    debug!(path = %config.db_path.display(), "Database opened");

    // 2. Remote menu source
    let client = DefaultMenuClient::new(&config.menu)?;
    debug!(url = %client.endpoint(), "Menu client ready");

    // 3. Assemble AppCore
    let app = CoreFactory::build_app_core(pool, Arc::new(client));

    Ok(CliContext {
        app,
        image_base_url: config.image_base_url,
        quiet_period: config.quiet_period,
    })
}
