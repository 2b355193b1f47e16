//! Client end-to-end tests
//!
//! Drives `AuthStore` + `HttpAuthApi` + `FileTokenStorage` against the real
//! router served on a local port, and against a mock server where the test
//! needs to count requests.
#![cfg(feature = "ssr")]

mod common;

use std::sync::Arc;

use serde_json::json;
use shopsmart::client::{
    AuthApi, AuthOutcome, AuthStatus, AuthStore, Config, FileTokenStorage, HttpAuthApi,
    TokenStorage, NETWORK_ERROR_MESSAGE,
};
use shopsmart::shared::{AppConfig, SignupRequest};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::*;

struct Client {
    store: AuthStore,
    storage: Arc<FileTokenStorage>,
    api: Arc<HttpAuthApi>,
}

fn config_for(base_url: &str) -> Config {
    Config::with_builder(AppConfig::builder().server_url(base_url)).expect("valid test url")
}

/// A client whose token lives in `dir`, as a fresh process would start
fn client(base_url: &str, dir: &TempDir) -> Client {
    let api = Arc::new(HttpAuthApi::new(&config_for(base_url)));
    let storage = Arc::new(FileTokenStorage::new(dir.path()));
    let store = AuthStore::new(api.clone(), storage.clone());
    Client {
        store,
        storage,
        api,
    }
}

#[tokio::test]
async fn test_signup_then_me() {
    let base_url = spawn_app().await;
    let dir = TempDir::new().unwrap();
    let client = client(&base_url, &dir);

    let outcome = client
        .store
        .signup(SignupRequest::new("new@x.com", "password123"))
        .await;
    assert_eq!(outcome, AuthOutcome::Success);
    assert_eq!(client.store.user().unwrap().email, "new@x.com");

    let token = client.store.token().unwrap();
    assert!(!token.is_empty());
    assert_eq!(client.storage.load().unwrap().as_deref(), Some(token.as_str()));

    let me = client.api.me(&token).await.unwrap();
    assert_eq!(me.email, "new@x.com");
    assert_eq!(Some(me), client.store.user());
}

#[tokio::test]
async fn test_login_right_and_wrong_password() {
    let base_url = spawn_app().await;
    let dir = TempDir::new().unwrap();
    let seeded = client(&base_url, &dir);
    seeded
        .api
        .signup(&SignupRequest::new("john@example.com", "password123"))
        .await
        .unwrap();

    let outcome = seeded.store.login("john@example.com", "password123").await;
    assert_eq!(outcome, AuthOutcome::Success);
    assert!(seeded.store.is_authenticated());

    let other_dir = TempDir::new().unwrap();
    let other = client(&base_url, &other_dir);
    let outcome = other.store.login("john@example.com", "wrongpassword").await;
    assert_eq!(
        outcome,
        AuthOutcome::Failure {
            message: "Invalid email or password".to_string()
        }
    );
    assert!(!other.store.is_authenticated());
    assert_eq!(other.storage.load().unwrap(), None);
}

#[tokio::test]
async fn test_bootstrap_with_invalid_token_clears_storage() {
    let base_url = spawn_app().await;
    let dir = TempDir::new().unwrap();
    FileTokenStorage::new(dir.path()).save("invalid-token").unwrap();

    let client = client(&base_url, &dir);
    assert!(client.store.is_loading());
    assert_eq!(client.store.status(), AuthStatus::Resolving);

    assert_eq!(client.store.bootstrap().await, AuthStatus::Unauthenticated);
    assert!(!client.store.is_loading());
    assert_eq!(client.store.token(), None);
    assert_eq!(client.storage.load().unwrap(), None);
    assert!(!client.storage.path().exists());
}

#[tokio::test]
async fn test_session_survives_restart() {
    let base_url = spawn_app().await;
    let dir = TempDir::new().unwrap();

    let first_run = client(&base_url, &dir);
    first_run
        .store
        .signup(SignupRequest::new("persist@example.com", "password123"))
        .await;

    let second_run = client(&base_url, &dir);
    assert_eq!(second_run.store.bootstrap().await, AuthStatus::Authenticated);
    assert_eq!(second_run.store.user().unwrap().email, "persist@example.com");
}

#[tokio::test]
async fn test_logout_then_bootstrap_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Login successful",
            "data": {
                "user": {
                    "id": 1,
                    "email": "john@example.com",
                    "firstName": null,
                    "lastName": null,
                    "createdAt": "2024-01-01T00:00:00Z"
                },
                "token": "mock-token"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let client = client(&server.uri(), &dir);
    assert!(client.store.login("john@example.com", "password123").await.is_success());

    client.store.logout();
    assert_eq!(client.store.user(), None);
    assert_eq!(client.store.token(), None);
    assert_eq!(client.storage.load().unwrap(), None);

    assert_eq!(client.store.bootstrap().await, AuthStatus::Unauthenticated);

    // A restarted client finds nothing to resolve either
    let restarted = AuthStore::new(client.api.clone(), client.storage.clone());
    assert_eq!(restarted.bootstrap().await, AuthStatus::Unauthenticated);
}

#[tokio::test]
async fn test_unreachable_service() {
    let base_url = unused_base_url().await;
    let dir = TempDir::new().unwrap();
    let client = client(&base_url, &dir);

    let outcome = client.store.login("john@example.com", "password123").await;
    assert_eq!(outcome.message(), Some(NETWORK_ERROR_MESSAGE));
    assert_eq!(client.store.status(), AuthStatus::Unauthenticated);
}
