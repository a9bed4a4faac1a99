//! Email campaign handlers (admin only).

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Router,
};
use uuid::Uuid;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{Campaign, CreateCampaign, UpdateCampaign};
use crate::errors::AppResult;
use crate::types::{Created, NoContent};

/// Admin campaign routes (behind auth middleware)
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_all).post(create))
        .route("/:id", get(get_one).put(update).delete(delete))
        .route("/:id/queue", post(queue))
}

/// List all campaigns
#[utoipa::path(
    get,
    path = "/admin/campaigns",
    tag = "Campaigns",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "All campaigns"))
)]
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<Vec<Campaign>>> {
    Ok(Json(state.services.campaigns().list_campaigns().await?))
}

/// Get one campaign by id
#[utoipa::path(
    get,
    path = "/admin/campaigns/{id}",
    tag = "Campaigns",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Campaign id")),
    responses(
        (status = 200, description = "Campaign", body = Campaign),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Campaign>> {
    Ok(Json(state.services.campaigns().get_campaign(id).await?))
}

/// Create a draft campaign
#[utoipa::path(
    post,
    path = "/admin/campaigns",
    tag = "Campaigns",
    security(("bearer_auth" = [])),
    request_body = CreateCampaign,
    responses(
        (status = 201, description = "Created", body = Campaign),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateCampaign>,
) -> AppResult<Created<Campaign>> {
    Ok(Created(
        state.services.campaigns().create_campaign(payload).await?,
    ))
}

/// Update a draft campaign
#[utoipa::path(
    put,
    path = "/admin/campaigns/{id}",
    tag = "Campaigns",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Campaign id")),
    request_body = UpdateCampaign,
    responses(
        (status = 200, description = "Updated", body = Campaign),
        (status = 400, description = "Campaign is not a draft"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateCampaign>,
) -> AppResult<Json<Campaign>> {
    Ok(Json(
        state.services.campaigns().update_campaign(id, payload).await?,
    ))
}

/// Permanently delete a campaign
#[utoipa::path(
    delete,
    path = "/admin/campaigns/{id}",
    tag = "Campaigns",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Campaign id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Campaign is currently sending"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<Uuid>) -> AppResult<NoContent> {
    state.services.campaigns().delete_campaign(id).await?;
    Ok(NoContent)
}

/// Queue a draft campaign for delivery
#[utoipa::path(
    post,
    path = "/admin/campaigns/{id}/queue",
    tag = "Campaigns",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Campaign id")),
    responses(
        (status = 200, description = "Scheduled", body = Campaign),
        (status = 400, description = "Campaign is not a draft"),
        (status = 404, description = "Not found")
    )
)]
pub async fn queue(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Campaign>> {
    Ok(Json(state.services.campaigns().queue_campaign(id).await?))
}
