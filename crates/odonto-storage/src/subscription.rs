//! Live record subscription.
//!
//! S3 has no change feed, so a background task polls the record set and
//! forwards a snapshot whenever the set of record ids changes. Records are
//! immutable once written, so the id set identifies a snapshot.

use std::collections::BTreeSet;
use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use uuid::Uuid;

use odonto_core::models::survey::SurveyRecord;

use crate::error::StorageError;

const CHANNEL_CAPACITY: usize = 8;

#[derive(Debug)]
pub enum SubscriptionEvent {
    /// The full current record set, newest first.
    Snapshot(Vec<SurveyRecord>),
    /// A poll failed; polling continues.
    Error(String),
}

/// Handle to a running poller. Dropping it stops the poller.
#[derive(Debug)]
pub struct Subscription {
    events: mpsc::Receiver<SubscriptionEvent>,
    task: JoinHandle<()>,
}

impl Subscription {
    /// Wait for the next event. `None` once the poller has stopped.
    pub async fn next(&mut self) -> Option<SubscriptionEvent> {
        self.events.recv().await
    }

    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Poll `fetch` every `interval`, emitting a snapshot on the first success
/// and then only when the id set changes.
pub fn spawn_poller<F, Fut>(interval: Duration, mut fetch: F) -> Subscription
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = Result<Vec<SurveyRecord>, StorageError>> + Send + 'static,
{
    let (tx, events) = mpsc::channel(CHANNEL_CAPACITY);

    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        let mut last_ids: Option<BTreeSet<Uuid>> = None;

        loop {
            ticker.tick().await;

            let event = match fetch().await {
                Ok(records) => {
                    let ids: BTreeSet<Uuid> = records.iter().map(|r| r.id).collect();
                    if last_ids.as_ref() == Some(&ids) {
                        continue;
                    }
                    tracing::debug!(count = ids.len(), "survey set changed");
                    last_ids = Some(ids);
                    SubscriptionEvent::Snapshot(records)
                }
                Err(e) => {
                    tracing::error!(error = %e, "survey poll failed");
                    SubscriptionEvent::Error(e.to_string())
                }
            };

            if tx.send(event).await.is_err() {
                tracing::debug!("subscriber gone, stopping poller");
                break;
            }
        }
    });

    Subscription { events, task }
}
