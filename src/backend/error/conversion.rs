/**
 * Error Conversion
 *
 * This module provides conversion implementations for backend errors,
 * allowing them to be converted to HTTP responses and built from the errors
 * of the layers below (validation, stores, tokens, request extraction).
 *
 * # Response Format
 *
 * Error responses use the shared envelope:
 * ```json
 * {
 *   "success": false,
 *   "message": "Invalid email or password"
 * }
 * ```
 */

use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Json, Response},
};

use crate::backend::auth::sessions::TokenError;
use crate::backend::auth::users::StoreError;
use crate::backend::auth::{DUPLICATE_EMAIL_MESSAGE, INVALID_TOKEN_MESSAGE};
use crate::backend::error::types::BackendError;
use crate::shared::{ApiResponse, SharedError};

/// Message returned when the request body is not valid JSON for the endpoint
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if let Self::Internal { detail } = &self {
            tracing::error!(%detail, "request failed with internal error");
        }
        let body = ApiResponse::<()>::error(self.message());
        (status, Json(body)).into_response()
    }
}

impl From<SharedError> for BackendError {
    fn from(err: SharedError) -> Self {
        match err {
            SharedError::ValidationError { field, message } => {
                tracing::debug!(%field, %message, "request failed validation");
                Self::validation(message)
            }
        }
    }
}

impl From<StoreError> for BackendError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail => Self::conflict(DUPLICATE_EMAIL_MESSAGE),
            other => Self::internal(other.to_string()),
        }
    }
}

impl From<TokenError> for BackendError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired | TokenError::Invalid(_) => {
                Self::unauthorized(INVALID_TOKEN_MESSAGE)
            }
            TokenError::Encoding(e) => Self::internal(format!("token encoding failed: {e}")),
        }
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!(reason = %rejection.body_text(), "rejected request body");
        Self::validation(INVALID_BODY_MESSAGE)
    }
}
