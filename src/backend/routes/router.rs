/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Layers
 *
 * - `TraceLayer` - one tracing span per HTTP request
 * - `CorsLayer` - the configured origin, or any origin when unset
 *
 * # Fallback
 *
 * Unknown routes answer 404 with the JSON failure envelope, so clients can
 * parse every response from this server the same way.
 */

use axum::http::HeaderValue;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

pub const ROUTE_NOT_FOUND_MESSAGE: &str = "Route not found";

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state holding the auth service and config
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn build_router(app_state: AppState) -> Router<()> {
    let cors = cors_layer(app_state.config.cors_origin.as_deref());

    let router = configure_api_routes(Router::new());

    router
        .fallback(route_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(app_state)
}

fn cors_layer(origin: Option<&str>) -> CorsLayer {
    let allow_origin = match origin.map(HeaderValue::from_str) {
        Some(Ok(origin)) => AllowOrigin::exact(origin),
        Some(Err(e)) => {
            tracing::warn!("CORS_ORIGIN is not a valid header value ({}); allowing any origin", e);
            AllowOrigin::from(Any)
        }
        None => AllowOrigin::from(Any),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn route_not_found() -> BackendError {
    BackendError::not_found(ROUTE_NOT_FOUND_MESSAGE)
}
