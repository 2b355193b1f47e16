//! Client Module
//!
//! Client-side authentication state for ShopSmart front ends. The store
//! talks to the auth endpoints over HTTP, keeps the bearer token in durable
//! storage between runs, and exposes who is logged in.
//!
//! # Architecture
//!
//! - **`config`** - API base URL and storage location
//! - **`api`** - `AuthApi` trait and its reqwest implementation
//! - **`storage`** - `TokenStorage` trait with file and in-memory slots
//! - **`store`** - `AuthStore`, the client auth state machine
//! - **`context`** - Provider scope (`provide` / `use_auth`)
//! - **`error`** - `ClientError`
//!
//! # Module Structure
//!
//! ```text
//! client/
//! ├── mod.rs          - Module exports and documentation
//! ├── config.rs       - Client configuration
//! ├── api.rs          - HTTP API client
//! ├── storage.rs      - Durable token storage
//! ├── store.rs        - Auth store
//! ├── context.rs      - Provider scope
//! └── error.rs        - Client errors
//! ```

pub mod api;
pub mod config;
pub mod context;
pub mod error;
pub mod storage;
pub mod store;

pub use api::{AuthApi, HttpAuthApi};
pub use config::Config;
pub use context::{provide, use_auth};
pub use error::{ClientError, NETWORK_ERROR_MESSAGE};
pub use storage::{FileTokenStorage, MemoryTokenStorage, TokenStorage, TOKEN_SLOT};
pub use store::{AuthOutcome, AuthState, AuthStatus, AuthStore};
