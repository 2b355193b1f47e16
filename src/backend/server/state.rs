/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct holds:
 * - The `AuthService` (user store, credential hasher, token service)
 * - The `ServerConfig` the server was started with
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow Axum handlers to extract specific
 * parts of the state without needing the entire `AppState`:
 *
 * ```rust
 * use shopsmart::backend::auth::AuthService;
 * use axum::extract::State;
 *
 * async fn handler(State(auth): State<AuthService>) {
 *     // Use the auth service
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::AuthService;
use crate::backend::server::config::ServerConfig;

/// Application state shared by every request handler
///
/// Cloning is cheap: the service holds `Arc`s and the config is shared.
#[derive(Clone)]
pub struct AppState {
    /// Signup, login and current-user operations
    pub auth: AuthService,

    /// Settings the server was started with
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(auth: AuthService, config: ServerConfig) -> Self {
        Self {
            auth,
            config: Arc::new(config),
        }
    }
}

/// Implement FromRef for AuthService
///
/// This allows Axum handlers to extract `AuthService` directly
/// from `AppState` using `State(AuthService)`.
impl FromRef<AppState> for AuthService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}

impl FromRef<AppState> for Arc<ServerConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        Arc::clone(&app_state.config)
    }
}
