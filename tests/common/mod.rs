//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - In-memory application state and test servers
//! - Authentication test helpers
//! - Envelope assertions
#![allow(dead_code)]

pub mod assertions;
pub mod auth_helpers;

use std::sync::Arc;
use std::time::Duration;

use axum_test::TestServer;
use shopsmart::backend::auth::{AuthService, BcryptHasher, MemoryUserStore, TokenService};
use shopsmart::backend::routes::build_router;
use shopsmart::backend::server::{AppState, ServerConfig};

pub use assertions::*;
pub use auth_helpers::*;

pub const TEST_JWT_SECRET: &str = "integration-test-secret";
pub const TEST_TOKEN_TTL: Duration = Duration::from_secs(3600);

/// Application state over an empty in-memory store with cheap bcrypt
pub fn test_state() -> AppState {
    let config = ServerConfig {
        jwt_secret: TEST_JWT_SECRET.to_string(),
        token_ttl: TEST_TOKEN_TTL,
        bcrypt_cost: 4,
        ..ServerConfig::default()
    };
    let auth = AuthService::new(
        Arc::new(MemoryUserStore::new()),
        Arc::new(BcryptHasher::with_cost(config.bcrypt_cost)),
        TokenService::new(&config.jwt_secret, config.token_ttl),
    );
    AppState::new(auth, config)
}

/// In-process test server over a fresh state
pub fn test_server() -> TestServer {
    TestServer::new(build_router(test_state())).expect("build test server")
}

/// Serve a fresh app on an ephemeral local port and return its base URL
pub async fn spawn_app() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    let app = build_router(test_state());

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve test app");
    });

    format!("http://{addr}")
}

/// Base URL of a local port with nothing listening
pub async fn unused_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}
