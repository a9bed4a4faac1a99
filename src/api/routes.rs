//! Application route configuration.

use axum::{extract::State, http::StatusCode, middleware, response::Json, routing::get, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{
    auth_routes, blog_handler, campaign_handler, events_handler, message_handler, project_handler,
    session_routes, subscriber_handler, testimonial_handler,
};
use super::middleware::auth_middleware;
use super::openapi::ApiDoc;
use super::AppState;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/", get(root))
        .route("/health", get(health))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Public site routes
        .nest("/auth", auth_routes())
        .nest("/blogs", blog_handler::public_routes())
        .nest("/projects", project_handler::public_routes())
        .nest("/testimonials", testimonial_handler::public_routes())
        .nest("/contact", message_handler::public_routes())
        .nest("/newsletter", subscriber_handler::public_routes())
        // Admin routes (require JWT)
        .nest(
            "/admin",
            admin_router().route_layer(middleware::from_fn_with_state(
                state.clone(),
                auth_middleware,
            )),
        )
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// All authenticated admin routes under one nest
fn admin_router() -> Router<AppState> {
    Router::new()
        .merge(session_routes())
        .nest("/blogs", blog_handler::admin_routes())
        .nest("/projects", project_handler::admin_routes())
        .nest("/testimonials", testimonial_handler::admin_routes())
        .nest("/messages", message_handler::admin_routes())
        .nest("/subscribers", subscriber_handler::admin_routes())
        .nest("/campaigns", campaign_handler::admin_routes())
        .nest("/events", events_handler::admin_routes())
}

/// Root endpoint
async fn root() -> &'static str {
    "Portfolio CMS API"
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    database: ServiceStatus,
}

/// Service status
#[derive(Serialize)]
struct ServiceStatus {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Health check endpoint with database connectivity check
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let db_status = match state.database.ping().await {
        Ok(_) => ServiceStatus {
            status: "healthy",
            error: None,
        },
        Err(e) => ServiceStatus {
            status: "unhealthy",
            error: Some(e.to_string()),
        },
    };

    let healthy = db_status.status == "healthy";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" },
        database: db_status,
    };

    let status_code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}
