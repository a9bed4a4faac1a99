//! Contact message handlers: public intake and admin triage.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::{get, post, put},
    Extension, Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentAdmin;
use crate::api::AppState;
use crate::domain::{ContactMessage, CreateContactMessage, MessageStatus};
use crate::errors::AppResult;
use crate::types::{Created, NoContent};

#[derive(Debug, Default, Deserialize)]
pub struct MessageFilter {
    pub status: Option<MessageStatus>,
}

/// Status transition request
#[derive(Debug, Deserialize, ToSchema)]
pub struct StatusRequest {
    pub status: MessageStatus,
}

/// Public contact routes
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/", post(submit))
}

/// Admin message routes (behind auth middleware)
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_all))
        .route("/deleted", get(list_deleted))
        .route("/:id", get(open).delete(delete))
        .route("/:id/status", put(set_status))
        .route("/:id/restore", post(restore))
}

/// Submit a contact form message
#[utoipa::path(
    post,
    path = "/contact",
    tag = "Messages",
    request_body = CreateContactMessage,
    responses(
        (status = 201, description = "Message received", body = ContactMessage),
        (status = 400, description = "Validation error or missing consent")
    )
)]
pub async fn submit(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateContactMessage>,
) -> AppResult<Created<ContactMessage>> {
    Ok(Created(state.services.messages().submit(payload).await?))
}

/// List active messages, optionally filtered by status
#[utoipa::path(
    get,
    path = "/admin/messages",
    tag = "Messages",
    security(("bearer_auth" = [])),
    params(("status" = Option<MessageStatus>, Query, description = "Filter by status")),
    responses((status = 200, description = "Active messages"))
)]
pub async fn list_all(
    State(state): State<AppState>,
    Query(filter): Query<MessageFilter>,
) -> AppResult<Json<Vec<ContactMessage>>> {
    Ok(Json(
        state.services.messages().list_messages(filter.status).await?,
    ))
}

/// List soft-deleted messages
#[utoipa::path(
    get,
    path = "/admin/messages/deleted",
    tag = "Messages",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Soft-deleted messages"))
)]
pub async fn list_deleted(State(state): State<AppState>) -> AppResult<Json<Vec<ContactMessage>>> {
    Ok(Json(
        state.services.messages().list_deleted_messages().await?,
    ))
}

/// Open a message; a new message becomes read as a side effect
#[utoipa::path(
    get,
    path = "/admin/messages/{id}",
    tag = "Messages",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Message id")),
    responses(
        (status = 200, description = "Message", body = ContactMessage),
        (status = 404, description = "Not found")
    )
)]
pub async fn open(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ContactMessage>> {
    Ok(Json(state.services.messages().open_message(id).await?))
}

/// Advance a message's status
#[utoipa::path(
    put,
    path = "/admin/messages/{id}/status",
    tag = "Messages",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Message id")),
    request_body = StatusRequest,
    responses(
        (status = 200, description = "Status updated", body = ContactMessage),
        (status = 400, description = "Backwards transition"),
        (status = 404, description = "Not found")
    )
)]
pub async fn set_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<StatusRequest>,
) -> AppResult<Json<ContactMessage>> {
    Ok(Json(
        state
            .services
            .messages()
            .advance_status(id, payload.status)
            .await?,
    ))
}

/// Soft-delete a message
#[utoipa::path(
    delete,
    path = "/admin/messages/{id}",
    tag = "Messages",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Message id")),
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
        .messages()
        .delete_message(id, Some(admin.id))
        .await?;
    Ok(NoContent)
}

/// Restore a soft-deleted message
#[utoipa::path(
    post,
    path = "/admin/messages/{id}/restore",
    tag = "Messages",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Message id")),
    responses(
        (status = 200, description = "Restored", body = ContactMessage),
        (status = 404, description = "Not found or not deleted")
    )
)]
pub async fn restore(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ContactMessage>> {
    Ok(Json(state.services.messages().restore_message(id).await?))
}
