/**
 * Health Check Handler
 *
 * GET /api/health answers without touching the user store, so it reports
 * that the process is serving requests, not that the database is reachable.
 */

use axum::response::Json;
use chrono::{SecondsFormat, Utc};

use crate::shared::HealthResponse;

pub const HEALTH_MESSAGE: &str = "ShopSmart API is running";

/// Health check handler
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        message: HEALTH_MESSAGE.to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
