/**
 * API Wire Types
 *
 * This module defines the request and response types used by the
 * authentication endpoints. They are shared by the backend handlers and the
 * client so both sides agree on one schema per endpoint.
 *
 * # Envelope
 *
 * Every auth endpoint answers with the same envelope:
 *
 * ```json
 * { "success": true, "message": "Login successful", "data": { ... } }
 * ```
 *
 * `message` and `data` are omitted when absent.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response envelope shared by all auth endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Human-readable outcome, shown to users on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Endpoint payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying only data
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    /// Successful response carrying a message and data
    pub fn ok_with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        }
    }

    /// Failed response carrying only a message
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }
}

/// Sign up request
///
/// Every field is optional on the wire so that missing values reach
/// validation and produce a 400 with a readable message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    /// User's email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// User's password (will be hashed before storage)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl SignupRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            password: Some(password.into()),
            first_name: None,
            last_name: None,
        }
    }

    /// Attach optional first and last names
    pub fn with_names(mut self, first_name: Option<String>, last_name: Option<String>) -> Self {
        self.first_name = first_name;
        self.last_name = last_name;
        self
    }
}

/// Login request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            password: Some(password.into()),
        }
    }
}

/// User response (without sensitive data)
///
/// The public projection of a stored user. It never carries the password
/// hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// Store-assigned numeric ID
    pub id: i64,
    /// User's email address
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Account creation time
    pub created_at: DateTime<Utc>,
}

/// Payload of successful signup and login responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthData {
    /// Authenticated user
    pub user: UserResponse,
    /// Bearer token for subsequent requests
    pub token: String,
}

/// Payload of a successful current-user response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserData {
    pub user: UserResponse,
}

/// Health check response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    /// RFC 3339 time the check was answered
    pub timestamp: String,
}
