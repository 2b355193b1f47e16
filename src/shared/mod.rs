//! Shared Module
//!
//! This module contains types and data structures that are shared between
//! the client and the backend. These types are used for serialization and
//! communication over the HTTP API.
//!
//! # Overview
//!
//! The shared module provides platform-agnostic types that can be used
//! in both server and client code. All wire types are designed for JSON
//! serialization with camelCase field names.

/// Request and response types for the HTTP API
pub mod api;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use api::{
    ApiResponse, AuthData, HealthResponse, LoginRequest, SignupRequest, UserData, UserResponse,
};
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::SharedError;
