//! Per-table change subscriptions for admin sessions.
//!
//! A [`TableSubscription`] owns a background task that drains one table's
//! broadcast channel and dispatches each event to registered handlers.
//! Dropping the subscription (or calling [`TableSubscription::unsubscribe`])
//! stops the task; unsubscribe is idempotent.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;

use crate::infra::changefeed::{ChangeEvent, ChangeFeed, ChangeKind};

type Handler = Box<dyn Fn(&ChangeEvent) + Send + Sync>;

/// Callbacks for one table's events. Any subset may be set; `on_change`
/// fires for every kind before the kind-specific handler.
#[derive(Default)]
pub struct ChangeHandlers {
    on_change: Option<Handler>,
    on_insert: Option<Handler>,
    on_update: Option<Handler>,
    on_delete: Option<Handler>,
}

impl ChangeHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_change(mut self, f: impl Fn(&ChangeEvent) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn on_insert(mut self, f: impl Fn(&ChangeEvent) + Send + Sync + 'static) -> Self {
        self.on_insert = Some(Box::new(f));
        self
    }

    pub fn on_update(mut self, f: impl Fn(&ChangeEvent) + Send + Sync + 'static) -> Self {
        self.on_update = Some(Box::new(f));
        self
    }

    pub fn on_delete(mut self, f: impl Fn(&ChangeEvent) + Send + Sync + 'static) -> Self {
        self.on_delete = Some(Box::new(f));
        self
    }

    fn dispatch(&self, event: &ChangeEvent) {
        if let Some(f) = &self.on_change {
            f(event);
        }
        let specific = match event.kind {
            ChangeKind::Insert => &self.on_insert,
            ChangeKind::Update => &self.on_update,
            ChangeKind::Delete => &self.on_delete,
        };
        if let Some(f) = specific {
            f(event);
        }
    }
}

/// Handle to a running per-table subscription.
pub struct TableSubscription {
    table: &'static str,
    closed: Arc<AtomicBool>,
    task: JoinHandle<()>,
}

impl TableSubscription {
    /// Subscribe to `table` and start dispatching events to `handlers`.
    pub fn spawn(feed: &ChangeFeed, table: &'static str, handlers: ChangeHandlers) -> Self {
        let mut rx = feed.subscribe(table);
        let closed = Arc::new(AtomicBool::new(false));
        let task_closed = Arc::clone(&closed);

        let task = tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(event) => {
                        if task_closed.load(Ordering::Acquire) {
                            break;
                        }
                        handlers.dispatch(&event);
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        // Feed outpaced this consumer; a refetch is needed
                        // to recover the dropped rows.
                        tracing::warn!(table, skipped, "Change subscription lagged");
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        });

        tracing::debug!(table, "Change subscription opened");

        Self {
            table,
            closed,
            task,
        }
    }

    /// Stop the dispatch task. Calling this more than once is a no-op.
    pub fn unsubscribe(&self) {
        if !self.closed.swap(true, Ordering::AcqRel) {
            self.task.abort();
            tracing::debug!(table = self.table, "Change subscription closed");
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }
}

impl Drop for TableSubscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;

    use serde_json::json;

    fn insert_event(table: &'static str) -> ChangeEvent {
        ChangeEvent {
            table,
            kind: ChangeKind::Insert,
            new: Some(json!({"id": 1})),
            old: None,
        }
    }

    #[tokio::test]
    async fn test_events_reach_handlers() {
        let feed = ChangeFeed::new();
        let seen = Arc::new(AtomicUsize::new(0));
        let counted = Arc::clone(&seen);

        let sub = TableSubscription::spawn(
            &feed,
            "blogs",
            ChangeHandlers::new().on_insert(move |_| {
                counted.fetch_add(1, Ordering::SeqCst);
            }),
        );

        feed.publish(insert_event("blogs"));
        tokio::time::sleep(Duration::from_millis(20)).await;

        assert_eq!(seen.load(Ordering::SeqCst), 1);
        sub.unsubscribe();
    }

    #[tokio::test]
    async fn test_on_change_fires_for_every_kind() {
        let feed = ChangeFeed::new();
        let seen = Arc::new(AtomicUsize::new(0));
        let counted = Arc::clone(&seen);

        let _sub = TableSubscription::spawn(
            &feed,
            "projects",
            ChangeHandlers::new().on_change(move |_| {
                counted.fetch_add(1, Ordering::SeqCst);
            }),
        );

        feed.publish(insert_event("projects"));
        feed.publish(ChangeEvent {
            table: "projects",
            kind: ChangeKind::Delete,
            new: None,
            old: Some(json!({"id": 1})),
        });
        tokio::time::sleep(Duration::from_millis(20)).await;

        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_unsubscribe_is_idempotent_and_stops_delivery() {
        let feed = ChangeFeed::new();
        let seen = Arc::new(AtomicUsize::new(0));
        let counted = Arc::clone(&seen);

        let sub = TableSubscription::spawn(
            &feed,
            "blogs",
            ChangeHandlers::new().on_change(move |_| {
                counted.fetch_add(1, Ordering::SeqCst);
            }),
        );

        sub.unsubscribe();
        sub.unsubscribe();
        assert!(sub.is_closed());

        feed.publish(insert_event("blogs"));
        tokio::time::sleep(Duration::from_millis(20)).await;

        assert_eq!(seen.load(Ordering::SeqCst), 0);
    }
}
