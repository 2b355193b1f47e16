//! Backend Module
//!
//! This module contains all server-side code for the ShopSmart API.
//! It provides an Axum HTTP server exposing health and authentication
//! endpoints over a pluggable user store.
//!
//! # Overview
//!
//! The backend module includes:
//! - Axum HTTP server setup and configuration
//! - Authentication handlers (signup, login, current user)
//! - JWT token issuing and bcrypt password hashing
//! - User persistence (PostgreSQL or in memory)
//! - JSON error mapping for every failure path
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Validation, auth service, tokens, passwords, user stores
//! - **`middleware`** - Request extractors (bearer token)
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request extractors
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! Handlers are stateless. `AppState` holds the `AuthService`, which owns
//! `Arc` handles to its collaborators (user store, credential hasher, token
//! service). Cloning the state is cheap and every request sees the store's
//! current contents.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`. `BackendError` implements
//! `IntoResponse` and renders the `{success: false, message}` envelope with
//! the matching status code.

/// Server setup and configuration
#[cfg(feature = "ssr")]
pub mod server;

/// Route configuration
#[cfg(feature = "ssr")]
pub mod routes;

/// Backend error types
#[cfg(feature = "ssr")]
pub mod error;

/// Authentication and user management
#[cfg(feature = "ssr")]
pub mod auth;

/// Request extractors
#[cfg(feature = "ssr")]
pub mod middleware;

/// Re-export commonly used types
#[cfg(feature = "ssr")]
pub use server::{create_app, AppState};
#[cfg(feature = "ssr")]
pub use error::BackendError;
#[cfg(feature = "ssr")]
pub use auth::AuthService;
