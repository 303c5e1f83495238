//! Debounced browsing over a real `SQLite` store.
//!
//! Runs on real time with a short quiet period: the `SQLite` driver works on
//! its own thread, which does not mix with a paused Tokio clock.

mod common;

use std::time::Duration;

use common::{FakeSource, Reply, little_lemon_menu};
use lemon_core::{AppCore, MenuItem, Repos};
use lemon_db::{CoreFactory, setup_memory_database};
use tokio::sync::watch;

const QUIET: Duration = Duration::from_millis(50);
const WAIT: Duration = Duration::from_secs(5);

async fn core() -> (sqlx::SqlitePool, AppCore) {
    let pool = setup_memory_database().await.unwrap();
    let repos: Repos = CoreFactory::build_repos(pool.clone());
    let core = AppCore::new(repos, FakeSource::new(Reply::Snapshot(little_lemon_menu())));
    (pool, core)
}

async fn next(results: &mut watch::Receiver<Vec<MenuItem>>) -> Vec<String> {
    tokio::time::timeout(WAIT, results.changed())
        .await
        .expect("results published in time")
        .unwrap();
    results.borrow_and_update().iter().map(|i| i.name.clone()).collect()
}

#[tokio::test]
async fn burst_of_changes_publishes_last_criteria_once() {
    let (_pool, core) = core().await;
    let initial = core.menu().ensure_populated().await.unwrap();
    let browser = core.browser(initial, QUIET);
    let mut results = browser.subscribe();

    browser.set_search_text("s");
    browser.set_search_text("sa");
    browser.set_search_text("sal");

    assert_eq!(next(&mut results).await, ["Greek Salad"]);

    tokio::time::sleep(QUIET * 4).await;
    assert!(!results.has_changed().unwrap());
    browser.teardown().await;
}

#[tokio::test]
async fn category_chips_narrow_results() {
    let (_pool, core) = core().await;
    let initial = core.menu().ensure_populated().await.unwrap();
    let browser = core.browser(initial, QUIET);
    let mut results = browser.subscribe();

    assert!(browser.toggle_category("mains"));
    assert_eq!(next(&mut results).await, ["Grilled Fish", "Pasta"]);

    assert!(browser.toggle_category("desserts"));
    browser.set_search_text("le");
    assert_eq!(next(&mut results).await, ["Grilled Fish", "Lemon Dessert"]);

    browser.teardown().await;
}

#[tokio::test]
async fn failed_query_keeps_previous_results() {
    let (pool, core) = core().await;
    let initial = core.menu().ensure_populated().await.unwrap();
    let browser = core.browser(initial.clone(), QUIET);
    let mut results = browser.subscribe();

    sqlx::query("DROP TABLE menu").execute(&pool).await.unwrap();
    browser.set_search_text("pasta");

    tokio::time::sleep(QUIET * 4).await;
    assert!(!results.has_changed().unwrap());
    assert_eq!(browser.current(), initial);
    browser.teardown().await;
}

#[tokio::test]
async fn teardown_cancels_pending_query() {
    let (_pool, core) = core().await;
    let initial = core.menu().ensure_populated().await.unwrap();
    let browser = core.browser(initial, QUIET);
    let results = browser.subscribe();

    browser.set_search_text("pasta");
    browser.teardown().await;

    tokio::time::sleep(QUIET * 4).await;
    assert_eq!(results.borrow().len(), 5);
}
