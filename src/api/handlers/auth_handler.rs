//! Authentication handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Extension, Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentAdmin;
use crate::api::AppState;
use crate::domain::AdminUserResponse;
use crate::errors::AppResult;
use crate::services::TokenResponse;
use crate::types::ApiResponse;

/// Admin registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    /// Admin email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "admin@example.com")]
    pub email: String,
    /// Password (minimum 8 characters)
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[schema(example = "SecurePass123!", min_length = 8)]
    pub password: String,
    /// Display name
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Site Owner")]
    pub name: String,
}

/// Admin login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "admin@example.com")]
    pub email: String,
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Routes that require an authenticated session
pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/me", get(me))
        .route("/logout", post(logout))
}

/// Register the admin account
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Admin registered successfully", body = AdminUserResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Account already exists")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AdminUserResponse>)> {
    let user = state
        .services
        .auth()
        .register(payload.email, payload.password, payload.name)
        .await?;

    Ok((StatusCode::CREATED, Json(AdminUserResponse::from(user))))
}

/// Login and get JWT token
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    let token = state
        .services
        .auth()
        .login(payload.email, payload.password)
        .await?;

    Ok(Json(token))
}

/// Resolve the current session.
///
/// Admin clients call this on startup to settle their session gate.
#[utoipa::path(
    get,
    path = "/admin/me",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current admin identity"),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn me(Extension(admin): Extension<CurrentAdmin>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "id": admin.id,
        "email": admin.email,
    }))
}

/// End the current session.
///
/// Tokens are stateless, so there is nothing to revoke server-side; the
/// endpoint acknowledges the sign-out and the client discards its token
/// and flips its session gate to unauthenticated.
#[utoipa::path(
    post,
    path = "/admin/logout",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Session ended"),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn logout(Extension(admin): Extension<CurrentAdmin>) -> Json<ApiResponse<()>> {
    tracing::info!(admin_id = %admin.id, "Admin signed out");
    Json(ApiResponse::message("Logged out"))
}
