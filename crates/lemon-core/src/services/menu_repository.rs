//! Menu repository - decides between network and local cache.
//!
//! On first run the store is empty: the snapshot is fetched, persisted and
//! read back. Afterwards every read is served from the store.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::domain::{MenuFilter, MenuItem};
use crate::ports::{CoreError, MenuSource, MenuStore};

type Population = Result<Vec<MenuItem>, CoreError>;

/// Orchestrates populate-if-empty loading, category facets and filtering.
pub struct MenuRepository {
    store: Arc<dyn MenuStore>,
    source: Arc<dyn MenuSource>,
    /// Outcome of the most recent population attempt. Held for the whole
    /// attempt.
    population: Mutex<Option<Population>>,
    /// Number of finished population attempts.
    attempts: AtomicU64,
}

impl MenuRepository {
    /// Create a repository over an injected store and source.
    pub fn new(store: Arc<dyn MenuStore>, source: Arc<dyn MenuSource>) -> Self {
        Self {
            store,
            source,
            population: Mutex::new(None),
            attempts: AtomicU64::new(0),
        }
    }

    /// Make sure the store holds a menu and return it.
    ///
    /// Safe to call on every screen focus: when the store already holds
    /// items nothing is fetched. When it is empty, the snapshot is fetched,
    /// written with `replace_all` and re-read so the caller sees store-assigned
    /// ids and defaulted categories.
    ///
    /// Callers that arrive while an attempt is in flight wait for it and
    /// receive its outcome, success or failure. A failed fetch leaves the
    /// store empty; the next call made after it returns retries.
    pub async fn ensure_populated(&self) -> Result<Vec<MenuItem>, CoreError> {
        let seen = self.attempts.load(Ordering::Acquire);
        let mut last = self.population.lock().await;

        if self.attempts.load(Ordering::Acquire) != seen {
            if let Some(outcome) = last.as_ref() {
                debug!("Joining the population attempt that finished while waiting");
                return outcome.clone();
            }
        }

        let outcome = self.populate().await;
        *last = Some(outcome.clone());
        self.attempts.fetch_add(1, Ordering::Release);

        outcome
    }

    async fn populate(&self) -> Population {
        self.store.initialize().await?;

        let empty = match self.store.is_empty().await {
            Ok(empty) => empty,
            Err(e) => {
                warn!(error = %e, "Emptiness check failed, treating menu store as populated");
                false
            }
        };

        if !empty {
            debug!("Loading menu from local store");
            return Ok(self.store.list_all().await?);
        }

        info!("Menu store is empty, fetching snapshot");
        let snapshot = self.source.fetch_snapshot().await?;
        self.store.replace_all(&snapshot).await?;
        let items = self.store.list_all().await?;
        info!(count = items.len(), "Menu snapshot persisted");

        Ok(items)
    }

    /// Distinct categories currently stored, ascending.
    ///
    /// Category chips are optional UI, so failures degrade to an empty list.
    pub async fn load_categories(&self) -> Vec<String> {
        match self.store.distinct_categories().await {
            Ok(categories) => categories,
            Err(e) => {
                warn!(error = %e, "Failed to load menu categories");
                Vec::new()
            }
        }
    }

    /// All stored items, ordered by name.
    pub async fn list(&self) -> Result<Vec<MenuItem>, CoreError> {
        Ok(self.store.list_all().await?)
    }

    /// Items matching `filter`, ordered by name.
    pub async fn filter(&self, filter: &MenuFilter) -> Result<Vec<MenuItem>, CoreError> {
        debug!(
            search = filter.search_text().unwrap_or_default(),
            categories = filter.categories().len(),
            "Filtering menu"
        );
        Ok(self.store.query(filter).await?)
    }
}
