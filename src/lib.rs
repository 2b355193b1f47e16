//! ShopSmart - Authentication Library
//!
//! ShopSmart is a small e-commerce storefront. This library holds the part of
//! it with real rules in it: the email/password authentication contract,
//! served by an Axum backend and consumed by a client-side auth store.
//!
//! # Overview
//!
//! This library provides:
//! - Signup, login and "current user" endpoints backed by bcrypt and JWT
//! - Pluggable user storage (PostgreSQL via sqlx, or in memory)
//! - A client auth store that persists the bearer token between runs
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared between client and backend
//!   - Request/response envelopes for every endpoint
//!   - Shared error and configuration types
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server, routes and JSON error mapping
//!   - Auth service, token issuing, password hashing, user stores
//!
//! - **`client`** - Client-side auth state
//!   - HTTP API client (reqwest)
//!   - Durable token storage
//!   - `AuthStore` state machine and provider scope
//!
//! # Feature Flags
//!
//! - **`ssr`** - Server-side code (enabled by default)
//!   - Includes Axum, sqlx, bcrypt and jsonwebtoken
//!   - Required for the `shopsmart-server` binary
//!
//! # Usage
//!
//! ## Server-Side
//!
//! ```rust,no_run
//! use shopsmart::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(ServerConfig::from_env()).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! ## Client
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use shopsmart::client::{AuthStore, Config, FileTokenStorage, HttpAuthApi};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::new();
//! let store = AuthStore::new(
//!     Arc::new(HttpAuthApi::new(&config)),
//!     Arc::new(FileTokenStorage::in_data_dir()?),
//! );
//! store.bootstrap().await;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `Result<T, E>` with `?` for fallible operations
//! - Custom error types in `shared::error`, `backend::error` and `client::error`

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

/// Client-side auth state
pub mod client;
