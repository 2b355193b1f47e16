//! Authentication Module
//!
//! This module handles user registration, login and current-user lookup.
//! It provides the HTTP handlers for the authentication endpoints and the
//! collaborators they depend on.
//!
//! # Architecture
//!
//! - **`validation`** - Input rules for signup and login
//! - **`users`** - User model, `UserStore` trait and its implementations
//! - **`password`** - `CredentialHasher` trait and the bcrypt implementation
//! - **`sessions`** - JWT token issuing and verification
//! - **`service`** - `AuthService`, the signup/login/me contract
//! - **`handlers`** - HTTP handlers translating the service to HTTP
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and user-facing messages
//! ├── validation.rs   - Email/password rules
//! ├── users.rs        - User model and stores
//! ├── password.rs     - Password hashing
//! ├── sessions.rs     - JWT token management
//! ├── service.rs      - Auth service
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs
//!     ├── signup.rs
//!     ├── login.rs
//!     └── me.rs
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: email and password → validated → user created → token returned
//! 2. **Login**: email and password → credentials verified → token returned
//! 3. **Get Me**: bearer token → token verified → user returned
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - JWT tokens are used for stateless authentication and carry an expiry
//! - Unknown email and wrong password produce the same 401

/// Signup and login input rules
pub mod validation;

/// User data model and stores
pub mod users;

/// Password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// Signup, login and current-user operations
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use password::{BcryptHasher, CredentialHasher};
pub use service::AuthService;
pub use sessions::{Claims, TokenError, TokenService};
pub use users::{MemoryUserStore, NewUser, PgUserStore, StoreError, User, UserStore};
pub use handlers::{get_me, login, signup};

/// Shortest accepted signup password, in characters
pub const MIN_PASSWORD_LENGTH: usize = 6;

pub const REQUIRED_FIELDS_MESSAGE: &str = "Email and password are required";
pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email format";
pub const PASSWORD_TOO_SHORT_MESSAGE: &str = "Password must be at least 6 characters long";
pub const DUPLICATE_EMAIL_MESSAGE: &str = "User with this email already exists";
/// Shared by unknown-email and wrong-password logins
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";
pub const NO_TOKEN_MESSAGE: &str = "No token provided";
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid or expired token";
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";
pub const SIGNUP_SUCCESS_MESSAGE: &str = "User created successfully";
pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful";
