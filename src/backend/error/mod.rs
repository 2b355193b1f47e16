//! Backend Error Module
//!
//! This module defines error types specific to the backend server.
//! These errors are used in HTTP handlers and can be converted to HTTP responses.
//!
//! # Architecture
//!
//! - **`types`** - Error type definitions and constructors
//! - **`conversion`** - Error conversion implementations (IntoResponse, From)
//!
//! # Error Types
//!
//! - `Validation` - Malformed or missing input (400)
//! - `Conflict` - Duplicate email (409)
//! - `Unauthorized` - Bad credentials or bad/missing/expired token (401)
//! - `NotFound` - Token valid but subject missing (404)
//! - `Internal` - Anything unexpected (500, details logged, never returned)

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
