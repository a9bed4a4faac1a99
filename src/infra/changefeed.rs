//! Change feed - row-level change notifications keyed by table name.
//!
//! Repositories publish an event after every successful write; admin
//! sessions subscribe per table. Delivery is best-effort broadcast: a
//! subscriber that falls behind loses the oldest buffered events (logged
//! as lag by the subscription layer), and publishing with no subscribers
//! is a no-op. Consumers must tolerate at-least-once application since a
//! local optimistic patch and the echoed event carry the same change.

use std::collections::HashMap;
use std::sync::RwLock;

use serde::Serialize;
use tokio::sync::broadcast;

use crate::config::CHANGE_FEED_CAPACITY;

/// Row-level event type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Insert,
    Update,
    Delete,
}

/// A single row change on one table.
///
/// `new` carries the post-write row for inserts/updates, `old` the
/// pre-write row for updates/deletes. Payloads are serialized domain
/// entities, matching what list endpoints return.
#[derive(Debug, Clone)]
pub struct ChangeEvent {
    pub table: &'static str,
    pub kind: ChangeKind,
    pub new: Option<serde_json::Value>,
    pub old: Option<serde_json::Value>,
}

/// Process-wide hub with one broadcast channel per table.
///
/// Constructed once and shared read-only; channels are created lazily on
/// first use from either side.
pub struct ChangeFeed {
    channels: RwLock<HashMap<&'static str, broadcast::Sender<ChangeEvent>>>,
}

impl Default for ChangeFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeFeed {
    pub fn new() -> Self {
        Self {
            channels: RwLock::new(HashMap::new()),
        }
    }

    fn sender(&self, table: &'static str) -> broadcast::Sender<ChangeEvent> {
        // A panic while the map is held must not take down every
        // repository write that follows; recover the guard and carry on.
        let read = self
            .channels
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(tx) = read.get(table) {
            return tx.clone();
        }
        drop(read);
        let mut channels = self
            .channels
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        channels
            .entry(table)
            .or_insert_with(|| broadcast::channel(CHANGE_FEED_CAPACITY).0)
            .clone()
    }

    /// Open an independent receiver for one table's events.
    ///
    /// Every call returns a fresh channel; callers may subscribe to the
    /// same table any number of times.
    pub fn subscribe(&self, table: &'static str) -> broadcast::Receiver<ChangeEvent> {
        self.sender(table).subscribe()
    }

    /// Publish an event to all current subscribers of its table.
    pub fn publish(&self, event: ChangeEvent) {
        // send only fails when there are no receivers, which is fine
        let _ = self.sender(event.table).send(event);
    }

    pub fn publish_insert<T: Serialize>(&self, table: &'static str, row: &T) {
        if let Some(new) = to_payload(table, row) {
            self.publish(ChangeEvent {
                table,
                kind: ChangeKind::Insert,
                new: Some(new),
                old: None,
            });
        }
    }

    pub fn publish_update<T: Serialize>(&self, table: &'static str, old: Option<&T>, new: &T) {
        if let Some(new) = to_payload(table, new) {
            self.publish(ChangeEvent {
                table,
                kind: ChangeKind::Update,
                new: Some(new),
                old: old.and_then(|o| to_payload(table, o)),
            });
        }
    }

    pub fn publish_delete<T: Serialize>(&self, table: &'static str, old: &T) {
        if let Some(old) = to_payload(table, old) {
            self.publish(ChangeEvent {
                table,
                kind: ChangeKind::Delete,
                new: None,
                old: Some(old),
            });
        }
    }
}

fn to_payload<T: Serialize>(table: &str, row: &T) -> Option<serde_json::Value> {
    match serde_json::to_value(row) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(table, error = %e, "Failed to serialize change event payload");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Row {
        id: u32,
    }

    #[tokio::test]
    async fn test_publish_reaches_subscriber() {
        let feed = ChangeFeed::new();
        let mut rx = feed.subscribe("blogs");

        feed.publish_insert("blogs", &Row { id: 1 });

        let event = rx.recv().await.unwrap();
        assert_eq!(event.kind, ChangeKind::Insert);
        assert_eq!(event.new.unwrap()["id"], 1);
    }

    #[tokio::test]
    async fn test_tables_are_independent() {
        let feed = ChangeFeed::new();
        let mut blogs = feed.subscribe("blogs");
        let mut projects = feed.subscribe("projects");

        feed.publish_insert("projects", &Row { id: 7 });

        let event = projects.recv().await.unwrap();
        assert_eq!(event.table, "projects");
        assert!(blogs.try_recv().is_err());
    }

    #[test]
    fn test_publish_without_subscribers_is_noop() {
        let feed = ChangeFeed::new();
        feed.publish_delete("blogs", &Row { id: 1 });
    }

    #[tokio::test]
    async fn test_feed_survives_poisoned_lock() {
        let feed = std::sync::Arc::new(ChangeFeed::new());
        let mut rx = feed.subscribe("blogs");

        let poisoner = std::sync::Arc::clone(&feed);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.channels.write().unwrap();
            panic!("poison the channel map");
        })
        .join();

        // Publishing still reaches the subscriber after the panic.
        feed.publish_insert("blogs", &Row { id: 9 });
        let event = rx.recv().await.unwrap();
        assert_eq!(event.kind, ChangeKind::Insert);
    }

    #[tokio::test]
    async fn test_each_subscription_is_independent() {
        let feed = ChangeFeed::new();
        let mut a = feed.subscribe("blogs");
        let mut b = feed.subscribe("blogs");

        feed.publish_insert("blogs", &Row { id: 3 });

        assert!(a.recv().await.is_ok());
        assert!(b.recv().await.is_ok());
    }
}
