//! End-to-end live sync tests: change feed -> subscription -> list view.
//!
//! Models an admin session keeping a table's list current from row-level
//! events while writes happen elsewhere in the process.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Utc;
use uuid::Uuid;

use portfolio_cms::admin::{ChangeHandlers, ListView, TableSubscription};
use portfolio_cms::domain::{Bilingual, Blog};
use portfolio_cms::ChangeFeed;

fn sample_blog(slug: &str) -> Blog {
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

#[tokio::test]
async fn test_published_insert_lands_in_subscribed_view() {
    let feed = Arc::new(ChangeFeed::new());
    let view = Arc::new(Mutex::new(ListView::<Blog>::new()));

    let sink = Arc::clone(&view);
    let _sub = TableSubscription::spawn(
        &feed,
        "blogs",
        ChangeHandlers::new().on_change(move |event| {
            sink.lock().unwrap().apply(event);
        }),
    );

    let record = sample_blog("fresh-post");
    feed.publish_insert("blogs", &record);
    tokio::time::sleep(Duration::from_millis(20)).await;

    let view = view.lock().unwrap();
    assert_eq!(view.len(), 1);
    assert_eq!(view.all()[0].id, record.id);
}

#[tokio::test]
async fn test_soft_delete_event_moves_row_to_trash() {
    let feed = Arc::new(ChangeFeed::new());
    let view = Arc::new(Mutex::new(ListView::<Blog>::new()));

    let sink = Arc::clone(&view);
    let _sub = TableSubscription::spawn(
        &feed,
        "blogs",
        ChangeHandlers::new().on_change(move |event| {
            sink.lock().unwrap().apply(event);
        }),
    );

    let mut record = sample_blog("doomed");
    view.lock().unwrap().apply_local(record.clone());

    // A soft delete is published as an update with deleted_at set
    let old = record.clone();
    record.deleted_at = Some(Utc::now());
    record.deleted_by = Some(Uuid::new_v4());
    feed.publish_update("blogs", Some(&old), &record);
    tokio::time::sleep(Duration::from_millis(20)).await;

    {
        let view = view.lock().unwrap();
        assert_eq!(view.active().len(), 0);
        assert_eq!(view.deleted().len(), 1);
    }

    // Restore flows back the same way
    record.deleted_at = None;
    record.deleted_by = None;
    feed.publish_update("blogs", None, &record);
    tokio::time::sleep(Duration::from_millis(20)).await;

    let view = view.lock().unwrap();
    assert_eq!(view.active().len(), 1);
    assert_eq!(view.deleted().len(), 0);
}

#[tokio::test]
async fn test_local_write_and_echoed_event_commute() {
    let feed = Arc::new(ChangeFeed::new());
    let view = Arc::new(Mutex::new(ListView::<Blog>::new()));

    let sink = Arc::clone(&view);
    let _sub = TableSubscription::spawn(
        &feed,
        "blogs",
        ChangeHandlers::new().on_change(move |event| {
            sink.lock().unwrap().apply(event);
        }),
    );

    // Optimistic local patch first, then the echoed feed event
    let record = sample_blog("mine");
    view.lock().unwrap().apply_local(record.clone());
    feed.publish_insert("blogs", &record);
    tokio::time::sleep(Duration::from_millis(20)).await;

    assert_eq!(view.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_unrelated_table_does_not_touch_view() {
    let feed = Arc::new(ChangeFeed::new());
    let view = Arc::new(Mutex::new(ListView::<Blog>::new()));

    let sink = Arc::clone(&view);
    let _sub = TableSubscription::spawn(
        &feed,
        "blogs",
        ChangeHandlers::new().on_change(move |event| {
            sink.lock().unwrap().apply(event);
        }),
    );

    feed.publish_insert("projects", &sample_blog("not-a-blog"));
    tokio::time::sleep(Duration::from_millis(20)).await;

    assert!(view.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_dropped_subscription_stops_updating_view() {
    let feed = Arc::new(ChangeFeed::new());
    let view = Arc::new(Mutex::new(ListView::<Blog>::new()));

    let sink = Arc::clone(&view);
    let sub = TableSubscription::spawn(
        &feed,
        "blogs",
        ChangeHandlers::new().on_change(move |event| {
            sink.lock().unwrap().apply(event);
        }),
    );

    drop(sub);
    tokio::time::sleep(Duration::from_millis(5)).await;

    feed.publish_insert("blogs", &sample_blog("after-close"));
    tokio::time::sleep(Duration::from_millis(20)).await;

    assert!(view.lock().unwrap().is_empty());
}
