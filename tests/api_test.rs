//! Integration tests for API-facing types.
//!
//! These tests use mock services to exercise the API surface without
//! requiring a database connection.

use async_trait::async_trait;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;
use uuid::Uuid;

use portfolio_cms::domain::AdminUser;
use portfolio_cms::errors::{AppError, AppResult};
use portfolio_cms::services::{AuthService, Claims, TokenResponse};

// =============================================================================
// Mock Services for Testing
// =============================================================================

/// Mock auth service that returns predefined responses
struct MockAuthService;

#[async_trait]
impl AuthService for MockAuthService {
    async fn register(
        &self,
        email: String,
        _password: String,
        name: String,
    ) -> AppResult<AdminUser> {
        Ok(AdminUser {
            id: Uuid::new_v4(),
            email,
            password_hash: "hashed".to_string(),
            name,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        })
    }

    async fn login(&self, _email: String, _password: String) -> AppResult<TokenResponse> {
        Ok(TokenResponse {
            access_token: "mock-token".to_string(),
            token_type: "Bearer".to_string(),
            expires_in: 86400,
        })
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        if token == "valid-test-token" {
            Ok(Claims {
                sub: Uuid::new_v4(),
                email: "admin@example.com".to_string(),
                exp: Utc::now().timestamp() + 3600,
                iat: Utc::now().timestamp(),
            })
        } else {
            Err(AppError::Unauthorized)
        }
    }
}

// =============================================================================
// Auth Service Tests
// =============================================================================

#[tokio::test]
async fn test_valid_token_yields_claims() {
    let service = MockAuthService;
    let claims = service.verify_token("valid-test-token").unwrap();
    assert_eq!(claims.email, "admin@example.com");
}

#[tokio::test]
async fn test_invalid_token_is_rejected() {
    let service = MockAuthService;
    let result = service.verify_token("garbage");
    assert!(matches!(result.unwrap_err(), AppError::Unauthorized));
}

#[tokio::test]
async fn test_login_returns_bearer_token() {
    let service = MockAuthService;
    let token = service
        .login("admin@example.com".to_string(), "secret".to_string())
        .await
        .unwrap();
    assert_eq!(token.token_type, "Bearer");
    assert!(!token.access_token.is_empty());
}

// =============================================================================
// Response Type Tests
// =============================================================================

#[tokio::test]
async fn test_api_response_structure() {
    use portfolio_cms::types::ApiResponse;

    let response: ApiResponse<String> = ApiResponse::success("test data".to_string());
    assert!(response.success);
    assert!(response.data.is_some());
    assert_eq!(response.data.unwrap(), "test data");
    assert!(response.message.is_none());
}

#[tokio::test]
async fn test_message_only_response() {
    use portfolio_cms::types::ApiResponse;

    let response: ApiResponse<()> = ApiResponse::message("Success");
    assert!(response.success);
    assert!(response.data.is_none());
    assert_eq!(response.message.unwrap(), "Success");
}

#[tokio::test]
async fn test_created_response_status() {
    use portfolio_cms::types::Created;

    let response = Created("payload").into_response();
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_no_content_response_status() {
    use portfolio_cms::types::NoContent;

    let response = NoContent.into_response();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

// =============================================================================
// Error Mapping Tests
// =============================================================================

#[tokio::test]
async fn test_error_status_mapping() {
    assert_eq!(
        AppError::NotFound.into_response().status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        AppError::conflict("Blog slug").into_response().status(),
        StatusCode::CONFLICT
    );
    assert_eq!(
        AppError::validation("Slug cannot be empty")
            .into_response()
            .status(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        AppError::Unauthorized.into_response().status(),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        AppError::internal("boom").into_response().status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}
