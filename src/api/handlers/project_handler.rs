//! Project handlers: public reads and admin lifecycle management.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::{get, post, put},
    Extension, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentAdmin;
use crate::api::AppState;
use crate::domain::{CreateProject, Project, UpdateProject};
use crate::errors::AppResult;
use crate::types::{Created, NoContent};

#[derive(Debug, Default, Deserialize)]
pub struct ProjectFilter {
    #[serde(default)]
    pub featured: bool,
}

/// Public project routes
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_published))
        .route("/:slug", get(get_by_slug))
}

/// Admin project routes (behind auth middleware)
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_all).post(create))
        .route("/deleted", get(list_deleted))
        .route("/:id", get(get_one).put(update).delete(delete))
        .route("/:id/restore", post(restore))
        .route("/:id/publish", put(publish).delete(unpublish))
        .route("/:id/feature", put(feature).delete(unfeature))
}

/// List published projects, optionally featured only
#[utoipa::path(
    get,
    path = "/projects",
    tag = "Projects",
    params(("featured" = bool, Query, description = "Featured projects only")),
    responses((status = 200, description = "Published projects"))
)]
pub async fn list_published(
    State(state): State<AppState>,
    Query(filter): Query<ProjectFilter>,
) -> AppResult<Json<Vec<Project>>> {
    Ok(Json(
        state
            .services
            .projects()
            .list_published(filter.featured)
            .await?,
    ))
}

/// Get a published project by slug
#[utoipa::path(
    get,
    path = "/projects/{slug}",
    tag = "Projects",
    params(("slug" = String, Path, description = "Project slug")),
    responses(
        (status = 200, description = "Project", body = Project),
        (status = 404, description = "Not found or unpublished")
    )
)]
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<Project>> {
    Ok(Json(
        state.services.projects().get_published_by_slug(&slug).await?,
    ))
}

/// List all active projects
#[utoipa::path(
    get,
    path = "/admin/projects",
    tag = "Projects",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Active projects"))
)]
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    Ok(Json(state.services.projects().list_projects().await?))
}

/// List soft-deleted projects
#[utoipa::path(
    get,
    path = "/admin/projects/deleted",
    tag = "Projects",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Soft-deleted projects"))
)]
pub async fn list_deleted(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    Ok(Json(
        state.services.projects().list_deleted_projects().await?,
    ))
}

/// Get one project by id
#[utoipa::path(
    get,
    path = "/admin/projects/{id}",
    tag = "Projects",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Project id")),
    responses(
        (status = 200, description = "Project", body = Project),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Project>> {
    Ok(Json(state.services.projects().get_project(id).await?))
}

/// Create a project
#[utoipa::path(
    post,
    path = "/admin/projects",
    tag = "Projects",
    security(("bearer_auth" = [])),
    request_body = CreateProject,
    responses(
        (status = 201, description = "Created", body = Project),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Slug already exists")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateProject>,
) -> AppResult<Created<Project>> {
    Ok(Created(
        state.services.projects().create_project(payload).await?,
    ))
}

/// Update a project
#[utoipa::path(
    put,
    path = "/admin/projects/{id}",
    tag = "Projects",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Project id")),
    request_body = UpdateProject,
    responses(
        (status = 200, description = "Updated", body = Project),
        (status = 404, description = "Not found"),
        (status = 409, description = "Slug already exists")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateProject>,
) -> AppResult<Json<Project>> {
    Ok(Json(
        state.services.projects().update_project(id, payload).await?,
    ))
}

/// Soft-delete a project
#[utoipa::path(
    delete,
    path = "/admin/projects/{id}",
    tag = "Projects",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Project id")),
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
        .projects()
        .delete_project(id, Some(admin.id))
        .await?;
    Ok(NoContent)
}

/// Restore a soft-deleted project
#[utoipa::path(
    post,
    path = "/admin/projects/{id}/restore",
    tag = "Projects",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Project id")),
    responses(
        (status = 200, description = "Restored", body = Project),
        (status = 404, description = "Not found or not deleted")
    )
)]
pub async fn restore(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Project>> {
    Ok(Json(state.services.projects().restore_project(id).await?))
}

/// Publish a project
#[utoipa::path(
    put,
    path = "/admin/projects/{id}/publish",
    tag = "Projects",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Project id")),
    responses((status = 200, description = "Published", body = Project))
)]
pub async fn publish(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Project>> {
    Ok(Json(state.services.projects().set_published(id, true).await?))
}

/// Unpublish a project
#[utoipa::path(
    delete,
    path = "/admin/projects/{id}/publish",
    tag = "Projects",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Project id")),
    responses((status = 200, description = "Unpublished", body = Project))
)]
pub async fn unpublish(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Project>> {
    Ok(Json(
        state.services.projects().set_published(id, false).await?,
    ))
}

/// Feature a project
#[utoipa::path(
    put,
    path = "/admin/projects/{id}/feature",
    tag = "Projects",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Project id")),
    responses((status = 200, description = "Featured", body = Project))
)]
pub async fn feature(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Project>> {
    Ok(Json(state.services.projects().set_featured(id, true).await?))
}

/// Unfeature a project
#[utoipa::path(
    delete,
    path = "/admin/projects/{id}/feature",
    tag = "Projects",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Project id")),
    responses((status = 200, description = "Unfeatured", body = Project))
)]
pub async fn unfeature(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Project>> {
    Ok(Json(
        state.services.projects().set_featured(id, false).await?,
    ))
}
