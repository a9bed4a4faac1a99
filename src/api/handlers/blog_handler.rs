//! Blog handlers: public reads and admin lifecycle management.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post, put},
    Extension, Router,
};
use uuid::Uuid;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentAdmin;
use crate::api::AppState;
use crate::domain::{Blog, CreateBlog, UpdateBlog};
use crate::errors::AppResult;
use crate::types::{Created, NoContent};

/// Public blog routes
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_published))
        .route("/:slug", get(get_by_slug))
}

/// Admin blog routes (behind auth middleware)
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_all).post(create))
        .route("/deleted", get(list_deleted))
        .route("/:id", get(get_one).put(update).delete(delete))
        .route("/:id/restore", post(restore))
        .route("/:id/publish", put(publish).delete(unpublish))
}

/// List published blog posts
#[utoipa::path(
    get,
    path = "/blogs",
    tag = "Blogs",
    responses((status = 200, description = "Published blog posts"))
)]
pub async fn list_published(State(state): State<AppState>) -> AppResult<Json<Vec<Blog>>> {
    Ok(Json(state.services.blogs().list_published().await?))
}

/// Get a published post by slug
#[utoipa::path(
    get,
    path = "/blogs/{slug}",
    tag = "Blogs",
    params(("slug" = String, Path, description = "Blog slug")),
    responses(
        (status = 200, description = "Blog post", body = Blog),
        (status = 404, description = "Not found or unpublished")
    )
)]
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<Blog>> {
    Ok(Json(
        state.services.blogs().get_published_by_slug(&slug).await?,
    ))
}

/// List all active posts
#[utoipa::path(
    get,
    path = "/admin/blogs",
    tag = "Blogs",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Active blog posts"))
)]
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<Vec<Blog>>> {
    Ok(Json(state.services.blogs().list_blogs().await?))
}

/// List soft-deleted posts
#[utoipa::path(
    get,
    path = "/admin/blogs/deleted",
    tag = "Blogs",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Soft-deleted blog posts"))
)]
pub async fn list_deleted(State(state): State<AppState>) -> AppResult<Json<Vec<Blog>>> {
    Ok(Json(state.services.blogs().list_deleted_blogs().await?))
}

/// Get one post by id
#[utoipa::path(
    get,
    path = "/admin/blogs/{id}",
    tag = "Blogs",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Blog id")),
    responses(
        (status = 200, description = "Blog post", body = Blog),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_one(State(state): State<AppState>, Path(id): Path<Uuid>) -> AppResult<Json<Blog>> {
    Ok(Json(state.services.blogs().get_blog(id).await?))
}

/// Create a post
#[utoipa::path(
    post,
    path = "/admin/blogs",
    tag = "Blogs",
    security(("bearer_auth" = [])),
    request_body = CreateBlog,
    responses(
        (status = 201, description = "Created", body = Blog),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Slug already exists")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateBlog>,
) -> AppResult<Created<Blog>> {
    Ok(Created(state.services.blogs().create_blog(payload).await?))
}

/// Update a post
#[utoipa::path(
    put,
    path = "/admin/blogs/{id}",
    tag = "Blogs",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Blog id")),
    request_body = UpdateBlog,
    responses(
        (status = 200, description = "Updated", body = Blog),
        (status = 404, description = "Not found"),
        (status = 409, description = "Slug already exists")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateBlog>,
) -> AppResult<Json<Blog>> {
    Ok(Json(state.services.blogs().update_blog(id, payload).await?))
}

/// Soft-delete a post
#[utoipa::path(
    delete,
    path = "/admin/blogs/{id}",
    tag = "Blogs",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Blog id")),
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
    state.services.blogs().delete_blog(id, Some(admin.id)).await?;
    Ok(NoContent)
}

/// Restore a soft-deleted post
#[utoipa::path(
    post,
    path = "/admin/blogs/{id}/restore",
    tag = "Blogs",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Blog id")),
    responses(
        (status = 200, description = "Restored", body = Blog),
        (status = 404, description = "Not found or not deleted")
    )
)]
pub async fn restore(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Blog>> {
    Ok(Json(state.services.blogs().restore_blog(id).await?))
}

/// Publish a post
#[utoipa::path(
    put,
    path = "/admin/blogs/{id}/publish",
    tag = "Blogs",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Blog id")),
    responses((status = 200, description = "Published", body = Blog))
)]
pub async fn publish(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Blog>> {
    Ok(Json(state.services.blogs().set_published(id, true).await?))
}

/// Unpublish a post
#[utoipa::path(
    delete,
    path = "/admin/blogs/{id}/publish",
    tag = "Blogs",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Blog id")),
    responses((status = 200, description = "Unpublished", body = Blog))
)]
pub async fn unpublish(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Blog>> {
    Ok(Json(state.services.blogs().set_published(id, false).await?))
}
