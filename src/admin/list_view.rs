//! Live-reconciling record collections for admin screens.
//!
//! A [`ListView`] holds one table's rows and keeps them current from two
//! inputs: full fetches (paginated list responses) and row-level change
//! events. Both funnel through the same upsert path, so an optimistic
//! local patch and the echoed feed event commute; applying a change twice
//! leaves the collection unchanged.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::infra::changefeed::{ChangeEvent, ChangeKind};

/// A record type that can live in a [`ListView`].
pub trait LiveRecord: DeserializeOwned + Clone {
    /// Table name as published on the change feed.
    const TABLE: &'static str;

    fn id(&self) -> Uuid;
    fn deleted_at(&self) -> Option<DateTime<Utc>>;

    fn is_deleted(&self) -> bool {
        self.deleted_at().is_some()
    }
}

/// Ticket issued by [`ListView::begin_fetch`]; hand it back with the
/// result so stale responses can be told apart from current ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Live collection of one table's rows.
///
/// Records are kept ordered as delivered: fetched rows in store order,
/// feed inserts prepended. The active/deleted split is derived from
/// `deleted_at`, so a soft delete moves a row between partitions without
/// any view-specific handling.
pub struct ListView<T: LiveRecord> {
    records: Vec<T>,
    issued_seq: u64,
    applied_seq: u64,
}

impl<T: LiveRecord> Default for ListView<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: LiveRecord> ListView<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            issued_seq: 0,
            applied_seq: 0,
        }
    }

    /// Start a fetch. Each call invalidates all earlier outstanding
    /// tickets, so only the most recently requested result lands.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued_seq += 1;
        FetchTicket(self.issued_seq)
    }

    /// Install a fetch result. Returns false (and discards the rows)
    /// when a newer fetch was started after this ticket was issued.
    pub fn complete_fetch(&mut self, ticket: FetchTicket, rows: Vec<T>) -> bool {
        if ticket.0 < self.issued_seq || ticket.0 <= self.applied_seq {
            tracing::debug!(
                table = T::TABLE,
                ticket = ticket.0,
                current = self.issued_seq,
                "Discarding stale fetch result"
            );
            return false;
        }
        self.applied_seq = ticket.0;
        self.records = rows;
        true
    }

    /// Reconcile one change-feed event into the collection.
    ///
    /// Events for other tables and payloads that fail to deserialize are
    /// ignored; the next full fetch heals any divergence.
    pub fn apply(&mut self, event: &ChangeEvent) {
        if event.table != T::TABLE {
            return;
        }
        match event.kind {
            ChangeKind::Insert | ChangeKind::Update => {
                if let Some(record) = Self::decode(event.new.as_ref()) {
                    self.upsert(record);
                }
            }
            ChangeKind::Delete => {
                if let Some(record) = Self::decode(event.old.as_ref()) {
                    self.remove_local(record.id());
                }
            }
        }
    }

    /// Optimistically install a row written locally, ahead of the echoed
    /// feed event.
    pub fn apply_local(&mut self, record: T) {
        self.upsert(record);
    }

    /// Drop a row by id. Safe to call for ids not present.
    pub fn remove_local(&mut self, id: Uuid) {
        self.records.retain(|r| r.id() != id);
    }

    // Replace in place when the id is known, otherwise prepend as the
    // newest row. Idempotent: replaying the same record is a no-op
    // rewrite.
    fn upsert(&mut self, record: T) {
        match self.records.iter_mut().find(|r| r.id() == record.id()) {
            Some(slot) => *slot = record,
            None => self.records.insert(0, record),
        }
    }

    fn decode(payload: Option<&serde_json::Value>) -> Option<T> {
        let value = payload?;
        match serde_json::from_value(value.clone()) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(table = T::TABLE, error = %e, "Ignoring undecodable change payload");
                None
            }
        }
    }

    /// All rows, active and deleted, in view order.
    pub fn all(&self) -> &[T] {
        &self.records
    }

    /// Rows with no `deleted_at`.
    pub fn active(&self) -> Vec<&T> {
        self.records.iter().filter(|r| !r.is_deleted()).collect()
    }

    /// Soft-deleted rows awaiting restore.
    pub fn deleted(&self) -> Vec<&T> {
        self.records.iter().filter(|r| r.is_deleted()).collect()
    }

    pub fn get(&self, id: Uuid) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

macro_rules! impl_live_record {
    ($ty:ty, $table:expr) => {
        impl LiveRecord for $ty {
            const TABLE: &'static str = $table;

            fn id(&self) -> Uuid {
                self.id
            }

            fn deleted_at(&self) -> Option<DateTime<Utc>> {
                self.deleted_at
            }
        }
    };
}

impl_live_record!(crate::domain::Blog, "blogs");
impl_live_record!(crate::domain::Project, "projects");
impl_live_record!(crate::domain::Testimonial, "testimonials");
impl_live_record!(crate::domain::ContactMessage, "contact_messages");
impl_live_record!(crate::domain::Subscriber, "newsletter_subscribers");
impl_live_record!(crate::domain::Campaign, "email_campaigns");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Bilingual, Blog};

    fn blog(slug: &str) -> Blog {
        Blog {
            id: Uuid::new_v4(),
            slug: slug.to_string(),
            category: "dev".to_string(),
            emoji: None,
            title: Bilingual::new(slug.to_string(), slug.to_string()),
            excerpt: None,
            content: None,
            published: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
            deleted_by: None,
        }
    }

    fn update_event(record: &Blog) -> ChangeEvent {
        ChangeEvent {
            table: "blogs",
            kind: ChangeKind::Update,
            new: Some(serde_json::to_value(record).unwrap()),
            old: None,
        }
    }

    #[test]
    fn test_stale_fetch_is_discarded() {
        let mut view: ListView<Blog> = ListView::new();
        let first = view.begin_fetch();
        let second = view.begin_fetch();

        assert!(view.complete_fetch(second, vec![blog("current")]));
        assert!(!view.complete_fetch(first, vec![blog("stale")]));

        assert_eq!(view.len(), 1);
        assert_eq!(view.all()[0].slug, "current");
    }

    #[test]
    fn test_insert_event_dedupes_by_id() {
        let mut view: ListView<Blog> = ListView::new();
        let record = blog("hello");
        view.apply_local(record.clone());

        // echoed feed event for the same write
        view.apply(&ChangeEvent {
            table: "blogs",
            kind: ChangeKind::Insert,
            new: Some(serde_json::to_value(&record).unwrap()),
            old: None,
        });

        assert_eq!(view.len(), 1);
    }

    #[test]
    fn test_soft_delete_moves_between_partitions() {
        let mut view: ListView<Blog> = ListView::new();
        let mut record = blog("fading");
        view.apply_local(record.clone());
        assert_eq!(view.active().len(), 1);

        record.deleted_at = Some(Utc::now());
        view.apply(&update_event(&record));

        assert_eq!(view.active().len(), 0);
        assert_eq!(view.deleted().len(), 1);

        record.deleted_at = None;
        view.apply(&update_event(&record));

        assert_eq!(view.active().len(), 1);
        assert_eq!(view.deleted().len(), 0);
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut view: ListView<Blog> = ListView::new();
        let a = blog("a");
        let mut b = blog("b");
        let ticket = view.begin_fetch();
        view.complete_fetch(ticket, vec![a.clone(), b.clone()]);

        b.category = "life".to_string();
        view.apply(&update_event(&b));

        assert_eq!(view.all()[1].category, "life");
        assert_eq!(view.all()[0].id, a.id);
    }

    #[test]
    fn test_delete_event_removes_row() {
        let mut view: ListView<Blog> = ListView::new();
        let record = blog("gone");
        view.apply_local(record.clone());

        view.apply(&ChangeEvent {
            table: "blogs",
            kind: ChangeKind::Delete,
            new: None,
            old: Some(serde_json::to_value(&record).unwrap()),
        });

        assert!(view.is_empty());
    }

    #[test]
    fn test_other_table_events_are_ignored() {
        let mut view: ListView<Blog> = ListView::new();
        view.apply(&ChangeEvent {
            table: "projects",
            kind: ChangeKind::Insert,
            new: Some(serde_json::json!({"id": Uuid::new_v4()})),
            old: None,
        });
        assert!(view.is_empty());
    }

    #[test]
    fn test_replay_is_idempotent() {
        let mut view: ListView<Blog> = ListView::new();
        let record = blog("twice");
        let event = update_event(&record);

        view.apply(&event);
        view.apply(&event);

        assert_eq!(view.len(), 1);
    }
}
