//! Envelope assertions
//!
//! Provides assertions for the JSON envelope every endpoint answers with.

use axum::http::StatusCode;
use axum_test::TestResponse;
use serde_json::Value;

/// Assert a failure envelope with the given status and message
///
/// Failure envelopes carry `success: false`, the message, and no `data`.
pub fn assert_failure(response: &TestResponse, status: StatusCode, message: &str) {
    assert_eq!(
        response.status_code(),
        status,
        "unexpected status, body: {}",
        response.text()
    );
    let body: Value = response.json();
    assert_eq!(body["success"], false, "body: {body}");
    assert_eq!(body["message"], message, "body: {body}");
    assert!(body.get("data").is_none(), "failure carried data: {body}");
}

