//! JWT authentication middleware for the admin surface.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::api::AppState;
use crate::config::BEARER_TOKEN_PREFIX;
use crate::errors::AppError;

/// Authenticated admin extracted from the JWT token.
///
/// There is a single operator identity; holding a valid token is the
/// only requirement for admin routes.
#[derive(Clone, Debug)]
pub struct CurrentAdmin {
    pub id: Uuid,
    pub email: String,
}

/// JWT authentication middleware.
///
/// Extracts and validates the JWT token from the Authorization header,
/// then injects the CurrentAdmin into the request extensions. A missing
/// or invalid token is rejected outright; the wait-versus-deny decision
/// for half-loaded sessions lives client-side in the session gate.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    let token = auth_header
        .strip_prefix(BEARER_TOKEN_PREFIX)
        .ok_or(AppError::Unauthorized)?;

    let claims = state.services.auth().verify_token(token)?;

    let current_admin = CurrentAdmin {
        id: claims.sub,
        email: claims.email,
    };

    request.extensions_mut().insert(current_admin);

    Ok(next.run(request).await)
}
