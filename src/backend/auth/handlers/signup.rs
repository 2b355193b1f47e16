/**
 * Signup Handler
 *
 * This module implements the user registration handler for POST /api/auth/signup.
 *
 * # Registration Process
 *
 * 1. Validate presence, email format and password length
 * 2. Check if user already exists
 * 3. Hash password using bcrypt
 * 4. Create user in the store
 * 5. Generate JWT token
 * 6. Return token and user info with 201 Created
 *
 * # Security
 *
 * - Passwords are hashed using bcrypt before storage
 * - Password hashes are never returned in responses
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::service::AuthService;
use crate::backend::auth::SIGNUP_SUCCESS_MESSAGE;
use crate::backend::error::BackendError;
use crate::shared::{ApiResponse, AuthData, SignupRequest};

/// Sign up handler
///
/// This handler processes user registration requests. It validates the input,
/// creates a new user account, and returns a JWT token for immediate authentication.
///
/// # Arguments
///
/// * `State(auth)` - Auth service
/// * `payload` - Signup request, or the reason it could not be parsed
///
/// # Errors
///
/// * `400 Bad Request` - Missing fields, invalid email, short password, or unparseable body
/// * `409 Conflict` - If user with this email already exists
/// * `500 Internal Server Error` - If hashing, user creation, or token generation fails
///
/// # Example Request
///
/// ```http
/// POST /api/auth/signup HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "user@example.com",
///   "password": "securepassword123",
///   "firstName": "Jane"
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "success": true,
///   "message": "User created successfully",
///   "data": {
///     "user": { "id": 1, "email": "user@example.com", "firstName": "Jane", "lastName": null, "createdAt": "..." },
///     "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
///   }
/// }
/// ```
pub async fn signup(
    State(auth): State<AuthService>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<AuthData>>), BackendError> {
    let Json(request) = payload?;
    tracing::info!("Signup request received");

    let data = auth.signup(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok_with_message(SIGNUP_SUCCESS_MESSAGE, data)),
    ))
}
