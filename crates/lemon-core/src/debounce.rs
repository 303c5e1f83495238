//! Quiet-period debouncing for query criteria.
//!
//! A [`QueryDebouncer`] owns one worker task holding a single pending slot.
//! Every criteria change restarts the quiet period; the action runs once the
//! period elapses with no further change, using the most recent criteria.
//!
//! ```text
//!            change                      change (deadline reset)
//!   Idle ───────────► Pending(deadline) ◄──────┐
//!    ▲                   │    │                │
//!    │     expiry: run   │    └────────────────┘
//!    └───────────────────┘
//!            teardown from any state: stop, nothing runs
//! ```
//!
//! An action that has already started is awaited to completion; changes that
//! arrive meanwhile open a new pending period once it finishes.

use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Quiet period used by the menu view.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(500);

/// The worker's single timer slot.
enum Slot<C> {
    Idle,
    Pending { deadline: Instant, criteria: C },
}

/// Coalesces bursts of criteria changes into one action per quiet period.
///
/// Must be created inside a Tokio runtime. Dropping the debouncer tears it
/// down.
pub struct QueryDebouncer<C> {
    changes: mpsc::UnboundedSender<C>,
    shutdown: CancellationToken,
    worker: Option<JoinHandle<()>>,
    quiet_period: Duration,
}

impl<C: Send + 'static> QueryDebouncer<C> {
    /// Spawn the worker task.
    ///
    /// `action` receives the criteria of the last change in each burst.
    pub fn spawn<F, Fut>(quiet_period: Duration, action: F) -> Self
    where
        F: Fn(C) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let (changes, rx) = mpsc::unbounded_channel();
        let shutdown = CancellationToken::new();
        let worker = tokio::spawn(run_worker(rx, shutdown.clone(), quiet_period, action));

        Self {
            changes,
            shutdown,
            worker: Some(worker),
            quiet_period,
        }
    }

    /// Record a criteria change, restarting the quiet period.
    ///
    /// Returns `false` if the debouncer has been torn down.
    pub fn trigger(&self, criteria: C) -> bool {
        !self.shutdown.is_cancelled() && self.changes.send(criteria).is_ok()
    }

    /// The configured quiet period.
    pub const fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    /// Stop the worker. A pending action is discarded without running.
    ///
    /// Waits for an action that is already running to finish.
    pub async fn teardown(mut self) {
        self.shutdown.cancel();
        if let Some(worker) = self.worker.take() {
            let _ = worker.await;
        }
    }
}

impl<C> Drop for QueryDebouncer<C> {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

/// Deadline one quiet period from now, saturating far in the future.
fn deadline_after(quiet_period: Duration) -> Instant {
    let now = Instant::now();
    now.checked_add(quiet_period).unwrap_or_else(|| now + FAR_FUTURE)
}

/// Roughly 30 years; stands in for deadlines that would overflow `Instant`.
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

async fn run_worker<C, F, Fut>(
    mut changes: mpsc::UnboundedReceiver<C>,
    shutdown: CancellationToken,
    quiet_period: Duration,
    action: F,
) where
    F: Fn(C) -> Fut,
    Fut: Future<Output = ()>,
{
    let mut slot = Slot::Idle;

    loop {
        slot = match slot {
            Slot::Idle => tokio::select! {
                biased;
                () = shutdown.cancelled() => break,
                change = changes.recv() => match change {
                    Some(criteria) => Slot::Pending {
                        deadline: deadline_after(quiet_period),
                        criteria,
                    },
                    None => break,
                },
            },
            Slot::Pending { deadline, criteria } => tokio::select! {
                biased;
                () = shutdown.cancelled() => {
                    debug!("Discarding pending query on teardown");
                    break;
                }
                change = changes.recv() => match change {
                    Some(latest) => Slot::Pending {
                        deadline: deadline_after(quiet_period),
                        criteria: latest,
                    },
                    None => break,
                },
                () = sleep_until(deadline) => {
                    action(criteria).await;
                    Slot::Idle
                }
            },
        };
    }
}
