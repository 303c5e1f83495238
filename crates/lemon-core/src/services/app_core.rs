//! `AppCore` - the primary application facade.
//!
//! Adapters (CLI, mobile shell) receive an `AppCore` instance and use it to
//! access all functionality.

use std::sync::Arc;
use std::time::Duration;

use super::{MenuBrowser, MenuRepository, ProfileService};
use crate::domain::MenuItem;
use crate::ports::{MenuSource, Repos};

/// The core application facade.
///
/// Constructed at the adapter's composition root with concrete stores and
/// a concrete menu source.
///
/// # Example
///
/// ```ignore
/// let repos = CoreFactory::build_repos(pool);
/// let source = Arc::new(DefaultMenuClient::new(&MenuClientConfig::default())?);
/// let core = AppCore::new(repos, source);
///
/// let items = core.menu().ensure_populated().await?;
/// ```
pub struct AppCore {
    menu: Arc<MenuRepository>,
    profile: ProfileService,
}

impl AppCore {
    /// Create a new `AppCore` from stores and the remote menu source.
    pub fn new(repos: Repos, source: Arc<dyn MenuSource>) -> Self {
        Self {
            menu: Arc::new(MenuRepository::new(repos.menu, source)),
            profile: ProfileService::new(repos.profile),
        }
    }

    /// Access the menu repository.
    pub fn menu(&self) -> &MenuRepository {
        &self.menu
    }

    /// Access the profile service.
    pub const fn profile(&self) -> &ProfileService {
        &self.profile
    }

    /// Open a debounced browser over the menu, starting from `initial`.
    pub fn browser(&self, initial: Vec<MenuItem>, quiet_period: Duration) -> MenuBrowser {
        MenuBrowser::new(Arc::clone(&self.menu), initial, quiet_period)
    }
}
