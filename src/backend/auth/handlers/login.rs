/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Check that email and password are present
 * 2. Look up user by email
 * 3. Verify password using bcrypt
 * 4. Generate JWT token
 * 5. Return token and user info
 *
 * # Security
 *
 * - Invalid credentials return 401 Unauthorized with one message whether the
 *   email is unknown or the password is wrong
 * - User passwords are never logged or returned in responses
 */
use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::service::AuthService;
use crate::backend::auth::LOGIN_SUCCESS_MESSAGE;
use crate::backend::error::BackendError;
use crate::shared::{ApiResponse, AuthData, LoginRequest};

/// Login handler
///
/// This handler processes user authentication requests. It verifies the
/// email and password, and returns a JWT token if authentication succeeds.
///
/// # Arguments
///
/// * `State(auth)` - Auth service
/// * `payload` - Login request, or the reason it could not be parsed
///
/// # Errors
///
/// * `400 Bad Request` - If email or password is missing, or the body is unparseable
/// * `401 Unauthorized` - If user is not found or password is incorrect
/// * `500 Internal Server Error` - If the store or token generation fails
///
/// # Example Request
///
/// ```http
/// POST /api/auth/login HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "user@example.com",
///   "password": "securepassword123"
/// }
/// ```
pub async fn login(
    State(auth): State<AuthService>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<AuthData>>, BackendError> {
    let Json(request) = payload?;
    tracing::info!("Login request received");

    let data = auth.login(request).await?;

    Ok(Json(ApiResponse::ok_with_message(LOGIN_SUCCESS_MESSAGE, data)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use axum::http::StatusCode;

    use crate::backend::auth::{
        BcryptHasher, MemoryUserStore, TokenService, INVALID_CREDENTIALS_MESSAGE,
        REQUIRED_FIELDS_MESSAGE,
    };
    use crate::shared::SignupRequest;

    async fn service_with_user() -> AuthService {
        let service = AuthService::new(
            Arc::new(MemoryUserStore::new()),
            Arc::new(BcryptHasher::with_cost(4)),
            TokenService::new("handler-secret", Duration::from_secs(60)),
        );
        service
            .signup(SignupRequest::new("john@example.com", "password123"))
            .await
            .unwrap();
        service
    }

    #[tokio::test]
    async fn test_login_success() {
        let request = LoginRequest::new("john@example.com", "password123");

        let Json(body) = login(State(service_with_user().await), Ok(Json(request)))
            .await
            .unwrap();
        assert!(body.success);
        assert_eq!(body.message.as_deref(), Some(LOGIN_SUCCESS_MESSAGE));
        assert_eq!(body.data.unwrap().user.email, "john@example.com");
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let request = LoginRequest::new("john@example.com", "wrongpassword");

        let err = login(State(service_with_user().await), Ok(Json(request)))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.message(), INVALID_CREDENTIALS_MESSAGE);
    }

    #[tokio::test]
    async fn test_login_missing_password() {
        let request = LoginRequest {
            email: Some("john@example.com".to_string()),
            password: None,
        };

        let err = login(State(service_with_user().await), Ok(Json(request)))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), REQUIRED_FIELDS_MESSAGE);
    }
}
