//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for authentication endpoints.
//! Handlers are organized into focused submodules for maintainability.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── signup.rs   - User registration handler
//! ├── login.rs    - User authentication handler
//! └── me.rs       - Get current user handler
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /api/auth/signup - User registration
//! - **`login`** - POST /api/auth/login - User authentication
//! - **`get_me`** - GET /api/auth/me - Get current user info
//!
//! Each handler extracts its input, delegates to [`AuthService`] and wraps
//! the result in the shared [`ApiResponse`] envelope. Errors are
//! [`BackendError`]s, which render themselves as the failure envelope.
//!
//! # Example
//!
//! ```rust,no_run
//! use shopsmart::backend::auth::handlers::{signup, login, get_me};
//! use shopsmart::backend::auth::AuthService;
//! use axum::{routing::post, routing::get, Router};
//!
//! # fn example(service: AuthService) {
//! let router: Router = Router::new()
//!     .route("/api/auth/signup", post(signup))
//!     .route("/api/auth/login", post(login))
//!     .route("/api/auth/me", get(get_me))
//!     .with_state(service);
//! # }
//! ```
//!
//! [`AuthService`]: crate::backend::auth::AuthService
//! [`ApiResponse`]: crate::shared::ApiResponse
//! [`BackendError`]: crate::backend::error::BackendError

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

/// Get current user handler
pub mod me;

pub use login::login;
pub use me::get_me;
pub use signup::signup;
