//! Testimonial handlers: public reads and admin lifecycle management.

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
use crate::domain::{CreateTestimonial, Testimonial, UpdateTestimonial};
use crate::errors::AppResult;
use crate::types::{Created, NoContent};

#[derive(Debug, Default, Deserialize)]
pub struct TestimonialFilter {
    #[serde(default)]
    pub featured: bool,
}

/// Public testimonial routes
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/", get(list_published))
}

/// Admin testimonial routes (behind auth middleware)
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_all).post(create))
        .route("/deleted", get(list_deleted))
        .route("/:id", get(get_one).put(update).delete(delete))
        .route("/:id/restore", post(restore))
        .route("/:id/publish", put(publish).delete(unpublish))
        .route("/:id/feature", put(feature).delete(unfeature))
}

/// List published testimonials, optionally featured only
#[utoipa::path(
    get,
    path = "/testimonials",
    tag = "Testimonials",
    params(("featured" = bool, Query, description = "Featured testimonials only")),
    responses((status = 200, description = "Published testimonials"))
)]
pub async fn list_published(
    State(state): State<AppState>,
    Query(filter): Query<TestimonialFilter>,
) -> AppResult<Json<Vec<Testimonial>>> {
    Ok(Json(
        state
            .services
            .testimonials()
            .list_published(filter.featured)
            .await?,
    ))
}

/// List all active testimonials
#[utoipa::path(
    get,
    path = "/admin/testimonials",
    tag = "Testimonials",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Active testimonials"))
)]
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<Vec<Testimonial>>> {
    Ok(Json(state.services.testimonials().list_testimonials().await?))
}

/// List soft-deleted testimonials
#[utoipa::path(
    get,
    path = "/admin/testimonials/deleted",
    tag = "Testimonials",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Soft-deleted testimonials"))
)]
pub async fn list_deleted(State(state): State<AppState>) -> AppResult<Json<Vec<Testimonial>>> {
    Ok(Json(
        state
            .services
            .testimonials()
            .list_deleted_testimonials()
            .await?,
    ))
}

/// Get one testimonial by id
#[utoipa::path(
    get,
    path = "/admin/testimonials/{id}",
    tag = "Testimonials",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Testimonial id")),
    responses(
        (status = 200, description = "Testimonial", body = Testimonial),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Testimonial>> {
    Ok(Json(state.services.testimonials().get_testimonial(id).await?))
}

/// Create a testimonial
#[utoipa::path(
    post,
    path = "/admin/testimonials",
    tag = "Testimonials",
    security(("bearer_auth" = [])),
    request_body = CreateTestimonial,
    responses(
        (status = 201, description = "Created", body = Testimonial),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateTestimonial>,
) -> AppResult<Created<Testimonial>> {
    Ok(Created(
        state.services.testimonials().create_testimonial(payload).await?,
    ))
}

/// Update a testimonial
#[utoipa::path(
    put,
    path = "/admin/testimonials/{id}",
    tag = "Testimonials",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Testimonial id")),
    request_body = UpdateTestimonial,
    responses(
        (status = 200, description = "Updated", body = Testimonial),
        (status = 404, description = "Not found")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateTestimonial>,
) -> AppResult<Json<Testimonial>> {
    Ok(Json(
        state
            .services
            .testimonials()
            .update_testimonial(id, payload)
            .await?,
    ))
}

/// Soft-delete a testimonial
#[utoipa::path(
    delete,
    path = "/admin/testimonials/{id}",
    tag = "Testimonials",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Testimonial id")),
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
        .testimonials()
        .delete_testimonial(id, Some(admin.id))
        .await?;
    Ok(NoContent)
}

/// Restore a soft-deleted testimonial
#[utoipa::path(
    post,
    path = "/admin/testimonials/{id}/restore",
    tag = "Testimonials",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Testimonial id")),
    responses(
        (status = 200, description = "Restored", body = Testimonial),
        (status = 404, description = "Not found or not deleted")
    )
)]
pub async fn restore(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Testimonial>> {
    Ok(Json(
        state.services.testimonials().restore_testimonial(id).await?,
    ))
}

/// Publish a testimonial
#[utoipa::path(
    put,
    path = "/admin/testimonials/{id}/publish",
    tag = "Testimonials",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Testimonial id")),
    responses((status = 200, description = "Published", body = Testimonial))
)]
pub async fn publish(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Testimonial>> {
    Ok(Json(
        state.services.testimonials().set_published(id, true).await?,
    ))
}

/// Unpublish a testimonial
#[utoipa::path(
    delete,
    path = "/admin/testimonials/{id}/publish",
    tag = "Testimonials",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Testimonial id")),
    responses((status = 200, description = "Unpublished", body = Testimonial))
)]
pub async fn unpublish(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Testimonial>> {
    Ok(Json(
        state.services.testimonials().set_published(id, false).await?,
    ))
}

/// Feature a testimonial
#[utoipa::path(
    put,
    path = "/admin/testimonials/{id}/feature",
    tag = "Testimonials",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Testimonial id")),
    responses((status = 200, description = "Featured", body = Testimonial))
)]
pub async fn feature(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Testimonial>> {
    Ok(Json(
        state.services.testimonials().set_featured(id, true).await?,
    ))
}

/// Unfeature a testimonial
#[utoipa::path(
    delete,
    path = "/admin/testimonials/{id}/feature",
    tag = "Testimonials",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Testimonial id")),
    responses((status = 200, description = "Unfeatured", body = Testimonial))
)]
pub async fn unfeature(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Testimonial>> {
    Ok(Json(
        state.services.testimonials().set_featured(id, false).await?,
    ))
}
