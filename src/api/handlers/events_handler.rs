//! Server-sent event stream of row changes, one stream per table.
//!
//! Admin clients keep a long-lived connection per table they display and
//! patch their local lists from the events. Delivery mirrors the change
//! feed: at least once, with lag dropping the oldest buffered events.

use std::convert::Infallible;

use axum::{
    extract::{Path, State},
    response::sse::{Event, KeepAlive, Sse},
    routing::get,
    Router,
};
use futures::stream::Stream;
use serde::Serialize;
use tokio::sync::broadcast;

use crate::api::AppState;
use crate::errors::{AppError, AppResult};
use crate::infra::changefeed::{ChangeEvent, ChangeKind};

/// Tables that expose a live event stream
const LIVE_TABLES: [&str; 6] = [
    "blogs",
    "projects",
    "testimonials",
    "contact_messages",
    "newsletter_subscribers",
    "email_campaigns",
];

/// Admin event stream routes (behind auth middleware)
pub fn admin_routes() -> Router<AppState> {
    Router::new().route("/:table", get(stream_table))
}

/// Wire shape of one change event
#[derive(Debug, Serialize)]
struct WireEvent<'a> {
    table: &'a str,
    kind: &'a str,
    new: &'a Option<serde_json::Value>,
    old: &'a Option<serde_json::Value>,
}

fn kind_name(kind: ChangeKind) -> &'static str {
    match kind {
        ChangeKind::Insert => "insert",
        ChangeKind::Update => "update",
        ChangeKind::Delete => "delete",
    }
}

fn resolve_table(name: &str) -> Option<&'static str> {
    LIVE_TABLES.iter().find(|t| **t == name).copied()
}

fn to_sse(event: &ChangeEvent) -> Option<Event> {
    let wire = WireEvent {
        table: event.table,
        kind: kind_name(event.kind),
        new: &event.new,
        old: &event.old,
    };
    match serde_json::to_string(&wire) {
        Ok(data) => Some(Event::default().event(wire.kind).data(data)),
        Err(e) => {
            tracing::warn!(table = event.table, error = %e, "Failed to serialize SSE event");
            None
        }
    }
}

/// Subscribe to row changes on one table
#[utoipa::path(
    get,
    path = "/admin/events/{table}",
    tag = "Events",
    security(("bearer_auth" = [])),
    params(("table" = String, Path, description = "Table name")),
    responses(
        (status = 200, description = "SSE stream of change events"),
        (status = 404, description = "Unknown table")
    )
)]
pub async fn stream_table(
    State(state): State<AppState>,
    Path(table): Path<String>,
) -> AppResult<Sse<impl Stream<Item = Result<Event, Infallible>>>> {
    let table = resolve_table(&table).ok_or(AppError::NotFound)?;
    let rx = state.feed.subscribe(table);

    let stream = futures::stream::unfold(rx, move |mut rx| async move {
        loop {
            match rx.recv().await {
                Ok(event) => {
                    if let Some(sse) = to_sse(&event) {
                        return Some((Ok(sse), rx));
                    }
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(table, skipped, "SSE subscriber lagged, events dropped");
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    });

    Ok(Sse::new(stream).keep_alive(KeepAlive::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tables_resolve() {
        assert_eq!(resolve_table("blogs"), Some("blogs"));
        assert_eq!(resolve_table("email_campaigns"), Some("email_campaigns"));
        assert_eq!(resolve_table("admin_users"), None);
    }

    #[test]
    fn test_events_serialize_with_kind_name() {
        let event = ChangeEvent {
            table: "blogs",
            kind: ChangeKind::Update,
            new: Some(serde_json::json!({"id": 1})),
            old: None,
        };
        assert!(to_sse(&event).is_some());
        assert_eq!(kind_name(event.kind), "update");
    }
}
