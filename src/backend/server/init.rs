/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including user store selection, auth service wiring and route
 * configuration.
 *
 * # Initialization Process
 *
 * 1. Load the user store (PostgreSQL with migrations, or in memory)
 * 2. Build the credential hasher and token service from configuration
 * 3. Create the application state
 * 4. Create and configure the router
 */

use std::sync::Arc;

use axum::Router;
use thiserror::Error;

use crate::backend::auth::{AuthService, BcryptHasher, TokenService};
use crate::backend::routes::router::build_router;
use crate::backend::server::config::{load_user_store, ServerConfig};
use crate::backend::server::state::AppState;

/// Errors that prevent the server from starting
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to connect to database: {0}")]
    Database(sqlx::Error),

    #[error("failed to run database migrations: {0}")]
    Migration(sqlx::migrate::MigrateError),
}

/// Create and configure the Axum application
///
/// # Arguments
///
/// * `config` - Server settings, usually from [`ServerConfig::from_env`]
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Errors
///
/// Fails if a configured database is unreachable or cannot be migrated.
/// Without `DATABASE_URL` the in-memory store is used and this cannot fail.
pub async fn create_app(config: ServerConfig) -> Result<Router, StartupError> {
    tracing::info!("Initializing ShopSmart backend server");

    let users = load_user_store(&config).await?;
    let hasher = Arc::new(BcryptHasher::with_cost(config.bcrypt_cost));
    let tokens = TokenService::new(&config.jwt_secret, config.token_ttl);

    let state = AppState::new(AuthService::new(users, hasher, tokens), config);

    tracing::info!("Router configured");
    Ok(build_router(state))
}
