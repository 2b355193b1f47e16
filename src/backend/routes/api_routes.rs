/**
 * API Route Handlers
 *
 * This module defines route handlers for API endpoints:
 *
 * ## Health
 * - `GET /api/health` - Liveness check
 *
 * ## Authentication
 * - `POST /api/auth/signup` - User registration
 * - `POST /api/auth/login` - User login
 * - `GET /api/auth/me` - Get current user info
 */

use axum::routing::{get, post};
use axum::Router;

use crate::backend::auth::{get_me, login, signup};
use crate::backend::routes::health::health;
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with API routes configured
///
/// # Authentication
///
/// - `/api/auth/me` - Requires JWT token in `Authorization` header
/// - `/api/auth/signup`, `/api/auth/login`, `/api/health` - Public
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/health", get(health))
        // Authentication endpoints
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
        .route("/api/auth/me", get(get_me))
}
