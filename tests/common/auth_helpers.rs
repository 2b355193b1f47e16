//! Authentication test helpers
//!
//! Provides utilities for creating test users, generating tokens,
//! and testing authentication flows.

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;
use shopsmart::backend::auth::{Claims, TokenService};
use shopsmart::shared::{ApiResponse, AuthData};

use super::{TEST_JWT_SECRET, TEST_TOKEN_TTL};

/// Default password for seeded users
pub const TEST_PASSWORD: &str = "password123";

/// Sign up a user through the API and return the issued user and token
pub async fn signup_user(server: &TestServer, email: &str, password: &str) -> AuthData {
    let response = server
        .post("/api/auth/signup")
        .json(&json!({ "email": email, "password": password }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED, "{}", response.text());

    let body: ApiResponse<AuthData> = response.json();
    body.data.expect("signup response carries data")
}

/// Signed token for `user_id` that expired an hour ago
pub fn expired_token(user_id: i64) -> String {
    let now = jsonwebtoken::get_current_timestamp();
    TokenService::new(TEST_JWT_SECRET, TEST_TOKEN_TTL)
        .encode_claims(&Claims {
            sub: user_id.to_string(),
            email: "expired@example.com".to_string(),
            iat: now - 7200,
            exp: now - 3600,
            jti: uuid::Uuid::new_v4().to_string(),
        })
        .expect("encode expired token")
}

/// Valid signature and expiry, but for a user that doesn't exist
pub fn token_for_missing_user(user_id: i64) -> String {
    let now = jsonwebtoken::get_current_timestamp();
    TokenService::new(TEST_JWT_SECRET, TEST_TOKEN_TTL)
        .encode_claims(&Claims {
            sub: user_id.to_string(),
            email: "ghost@example.com".to_string(),
            iat: now,
            exp: now + 3600,
            jti: uuid::Uuid::new_v4().to_string(),
        })
        .expect("encode token")
}
