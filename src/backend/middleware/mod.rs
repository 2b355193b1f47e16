//! Middleware Module
//!
//! This module contains request-processing pieces that run before handlers.
//!
//! # Architecture
//!
//! - **`auth`** - `BearerToken` extractor for routes that require a token
//!
//! # Example
//!
//! ```rust,no_run
//! use shopsmart::backend::middleware::BearerToken;
//!
//! async fn protected(BearerToken(token): BearerToken) -> String {
//!     format!("{} byte token", token.len())
//! }
//! ```

pub mod auth;

pub use auth::BearerToken;
