//! Newsletter subscriber handlers: public signup and admin management.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::{get, post},
    Extension, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentAdmin;
use crate::api::AppState;
use crate::domain::{SubscribeRequest, Subscriber, SubscriberStatus, UnsubscribeRequest};
use crate::errors::AppResult;
use crate::types::{Created, NoContent};

#[derive(Debug, Default, Deserialize)]
pub struct SubscriberFilter {
    pub status: Option<SubscriberStatus>,
}

/// Public newsletter routes
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/subscribe", post(subscribe))
        .route("/unsubscribe", post(self_unsubscribe))
}

/// Admin subscriber routes (behind auth middleware)
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_all))
        .route("/deleted", get(list_deleted))
        .route("/:id", get(get_one).delete(delete))
        .route("/:id/unsubscribe", post(unsubscribe))
        .route("/:id/restore", post(restore))
}

/// Subscribe to the newsletter
#[utoipa::path(
    post,
    path = "/newsletter/subscribe",
    tag = "Newsletter",
    request_body = SubscribeRequest,
    responses(
        (status = 201, description = "Subscribed", body = Subscriber),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Already subscribed")
    )
)]
pub async fn subscribe(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SubscribeRequest>,
) -> AppResult<Created<Subscriber>> {
    Ok(Created(
        state.services.subscribers().subscribe(payload).await?,
    ))
}

/// Unsubscribe from the newsletter
#[utoipa::path(
    post,
    path = "/newsletter/unsubscribe",
    tag = "Newsletter",
    request_body = UnsubscribeRequest,
    responses(
        (status = 200, description = "Unsubscribed", body = Subscriber),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Unknown address")
    )
)]
pub async fn self_unsubscribe(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UnsubscribeRequest>,
) -> AppResult<Json<Subscriber>> {
    Ok(Json(
        state
            .services
            .subscribers()
            .unsubscribe_by_email(&payload.email)
            .await?,
    ))
}

/// List active subscribers, optionally filtered by status
#[utoipa::path(
    get,
    path = "/admin/subscribers",
    tag = "Newsletter",
    security(("bearer_auth" = [])),
    params(("status" = Option<SubscriberStatus>, Query, description = "Filter by status")),
    responses((status = 200, description = "Active subscribers"))
)]
pub async fn list_all(
    State(state): State<AppState>,
    Query(filter): Query<SubscriberFilter>,
) -> AppResult<Json<Vec<Subscriber>>> {
    Ok(Json(
        state
            .services
            .subscribers()
            .list_subscribers(filter.status)
            .await?,
    ))
}

/// List soft-deleted subscribers
#[utoipa::path(
    get,
    path = "/admin/subscribers/deleted",
    tag = "Newsletter",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Soft-deleted subscribers"))
)]
pub async fn list_deleted(State(state): State<AppState>) -> AppResult<Json<Vec<Subscriber>>> {
    Ok(Json(
        state.services.subscribers().list_deleted_subscribers().await?,
    ))
}

/// Get one subscriber by id
#[utoipa::path(
    get,
    path = "/admin/subscribers/{id}",
    tag = "Newsletter",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Subscriber id")),
    responses(
        (status = 200, description = "Subscriber", body = Subscriber),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Subscriber>> {
    Ok(Json(state.services.subscribers().get_subscriber(id).await?))
}

/// Mark a subscriber as unsubscribed
#[utoipa::path(
    post,
    path = "/admin/subscribers/{id}/unsubscribe",
    tag = "Newsletter",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Subscriber id")),
    responses(
        (status = 200, description = "Unsubscribed", body = Subscriber),
        (status = 404, description = "Not found")
    )
)]
pub async fn unsubscribe(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Subscriber>> {
    Ok(Json(state.services.subscribers().unsubscribe(id).await?))
}

/// Soft-delete a subscriber
#[utoipa::path(
    delete,
    path = "/admin/subscribers/{id}",
    tag = "Newsletter",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Subscriber id")),
    responses(
        (status = 204, description = "Soft-deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Extension(admin): Extension<CurrentAdmin>,
) -> AppResult<NoContent> {
    state
        .services
        .subscribers()
        .delete_subscriber(id, Some(admin.id))
        .await?;
    Ok(NoContent)
}

/// Restore a soft-deleted subscriber
#[utoipa::path(
    post,
    path = "/admin/subscribers/{id}/restore",
    tag = "Newsletter",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Subscriber id")),
    responses(
        (status = 200, description = "Restored", body = Subscriber),
        (status = 404, description = "Not found or not deleted")
    )
)]
pub async fn restore(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Subscriber>> {
    Ok(Json(state.services.subscribers().restore_subscriber(id).await?))
}
