//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Architecture
//!
//! - **`router`** - Main router creation, layers and fallback
//! - **`api_routes`** - API endpoints (health, auth)
//! - **`health`** - Health check handler
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! ├── api_routes.rs   - API endpoint table
//! └── health.rs       - Health check handler
//! ```
//!
//! # Routes
//!
//! - `GET /api/health` - Liveness check
//! - `POST /api/auth/signup` - User registration
//! - `POST /api/auth/login` - User login
//! - `GET /api/auth/me` - Get current user
//!
//! Any other path answers 404 `{"success": false, "message": "Route not found"}`.

/// Main router creation
pub mod router;

/// API endpoint table
pub mod api_routes;

/// Health check handler
pub mod health;

pub use router::build_router;
