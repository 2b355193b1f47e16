/**
 * Backend Error Types
 *
 * This module defines the error taxonomy of the backend server. Every
 * variant maps to exactly one HTTP status code and carries the message that
 * is shown to the caller.
 *
 * # Error Categories
 *
 * ## Expected errors
 *
 * Validation, conflict, unauthorized and not-found errors are expected
 * outcomes of bad input. Their message is returned verbatim.
 *
 * ## Internal errors
 *
 * Storage outages, hashing failures and token encoding failures are
 * internal. Their detail is logged and the caller only sees a generic
 * "Internal server error".
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Message returned for every internal error
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use shopsmart::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::validation("Invalid email format");
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Malformed or missing input
    #[error("Validation error: {message}")]
    Validation {
        /// Human-readable error message
        message: String,
    },

    /// Resource already exists
    #[error("Conflict: {message}")]
    Conflict {
        /// Human-readable error message
        message: String,
    },

    /// Bad credentials, or a bad, missing or expired token
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Human-readable error message
        message: String,
    },

    /// The requested resource does not exist
    #[error("Not found: {message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// Unexpected failure; `detail` is for logs only
    #[error("Internal error: {detail}")]
    Internal {
        /// Diagnostic detail, never returned to the caller
        detail: String,
    },
}

impl BackendError {
    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create a new unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a new internal error
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation` - 400 Bad Request
    /// - `Unauthorized` - 401 Unauthorized
    /// - `NotFound` - 404 Not Found
    /// - `Conflict` - 409 Conflict
    /// - `Internal` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message that is safe to return to the caller
    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message }
            | Self::Conflict { message }
            | Self::Unauthorized { message }
            | Self::NotFound { message } => message,
            Self::Internal { .. } => INTERNAL_ERROR_MESSAGE,
        }
    }
}
