//! Shared fixtures for lemon-db integration tests.

// Each test binary uses a different subset of these helpers.
#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use lemon_core::{MenuSource, NewMenuItem, SourceError};

/// What a [`FakeSource`] answers on every fetch.
#[derive(Clone)]
pub enum Reply {
    Snapshot(Vec<NewMenuItem>),
    Unavailable,
    Malformed,
}

/// Menu source that counts fetches and answers with a canned reply.
pub struct FakeSource {
    reply: Reply,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl FakeSource {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            delay: None,
            calls: AtomicUsize::new(0),
        })
    }

    /// Like [`FakeSource::new`], but every fetch waits `delay` first.
    pub fn slow(reply: Reply, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            reply,
            delay: Some(delay),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MenuSource for FakeSource {
    async fn fetch_snapshot(&self) -> Result<Vec<NewMenuItem>, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.reply {
            Reply::Snapshot(items) => Ok(items.clone()),
            Reply::Unavailable => Err(SourceError::Unavailable {
                message: "connection refused".to_string(),
            }),
            Reply::Malformed => Err(SourceError::Format {
                message: "missing `menu` field".to_string(),
            }),
        }
    }
}

/// The five dishes served by the Little Lemon endpoint.
pub fn little_lemon_menu() -> Vec<NewMenuItem> {
    vec![
        NewMenuItem::new("Greek Salad", 12.99)
            .with_description("The famous greek salad of crispy lettuce, peppers, olives.")
            .with_image("greekSalad.jpg")
            .with_category("starters"),
        NewMenuItem::new("Bruschetta", 7.99)
            .with_description("Our Bruschetta is made from grilled bread.")
            .with_image("bruschetta.jpg")
            .with_category("starters"),
        NewMenuItem::new("Grilled Fish", 20.0)
            .with_description("Barbequed catch of the day.")
            .with_image("grilledFish.jpg")
            .with_category("mains"),
        NewMenuItem::new("Pasta", 18.99)
            .with_description("Penne with fried aubergines, cherry tomatoes.")
            .with_image("pasta.jpg")
            .with_category("mains"),
        NewMenuItem::new("Lemon Dessert", 6.99)
            .with_description("Light and fluffy traditional homemade Italian Lemon cake.")
            .with_image("lemonDessert.jpg")
            .with_category("desserts"),
    ]
}
