//! Debounced menu browsing.
//!
//! `MenuBrowser` is the view-model behind the menu list: it owns the current
//! filter criteria, runs debounced queries through the `MenuRepository` and
//! publishes each successful result set on a watch channel.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, warn};

use super::MenuRepository;
use crate::debounce::QueryDebouncer;
use crate::domain::{MenuFilter, MenuItem};

/// Criteria holder and debounced query driver for one menu view.
///
/// Dropping the browser (or calling [`MenuBrowser::teardown`]) cancels any
/// pending query.
pub struct MenuBrowser {
    criteria: Mutex<MenuFilter>,
    debouncer: QueryDebouncer<MenuFilter>,
    results: watch::Receiver<Vec<MenuItem>>,
}

impl MenuBrowser {
    /// Create a browser showing `initial` until the first query completes.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(
        repository: Arc<MenuRepository>,
        initial: Vec<MenuItem>,
        quiet_period: Duration,
    ) -> Self {
        let (publisher, results) = watch::channel(initial);
        let publisher = Arc::new(publisher);

        let debouncer = QueryDebouncer::spawn(quiet_period, move |filter: MenuFilter| {
            let repository = Arc::clone(&repository);
            let publisher = Arc::clone(&publisher);
            async move {
                match repository.filter(&filter).await {
                    Ok(items) => {
                        debug!(count = items.len(), "Publishing filtered menu");
                        publisher.send_replace(items);
                    }
                    Err(e) => {
                        warn!(error = %e, "Menu filter query failed, keeping previous results");
                    }
                }
            }
        });

        Self {
            criteria: Mutex::new(MenuFilter::default()),
            debouncer,
            results,
        }
    }

    /// Replace the search text and schedule a query.
    pub fn set_search_text(&self, text: impl Into<String>) {
        let text = text.into();
        self.update(|criteria| criteria.set_search_text(text));
    }

    /// Toggle a category chip and schedule a query.
    ///
    /// Returns `true` when the category is selected afterwards.
    pub fn toggle_category(&self, category: &str) -> bool {
        let mut selected = false;
        self.update(|criteria| selected = criteria.toggle_category(category));
        selected
    }

    /// Replace the whole criteria and schedule a query.
    pub fn set_criteria(&self, filter: MenuFilter) {
        self.update(|criteria| *criteria = filter);
    }

    /// Snapshot of the current criteria.
    pub fn criteria(&self) -> MenuFilter {
        self.criteria
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The most recently published result set.
    pub fn current(&self) -> Vec<MenuItem> {
        self.results.borrow().clone()
    }

    /// Subscribe to result-set updates.
    pub fn subscribe(&self) -> watch::Receiver<Vec<MenuItem>> {
        self.results.clone()
    }

    /// Cancel any pending query and stop the worker.
    pub async fn teardown(self) {
        self.debouncer.teardown().await;
    }

    fn update(&self, change: impl FnOnce(&mut MenuFilter)) {
        let snapshot = {
            let mut criteria = self
                .criteria
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            change(&mut criteria);
            criteria.clone()
        };
        if !self.debouncer.trigger(snapshot) {
            debug!("Menu browser already torn down, ignoring criteria change");
        }
    }
}
