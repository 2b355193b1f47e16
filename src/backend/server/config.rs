/**
 * Server Configuration
 *
 * This module handles loading of server configuration from the environment
 * and the user store it selects.
 *
 * # Configuration Sources
 *
 * Configuration is read from environment variables (a `.env` file is loaded
 * by the binary first), with defaults suitable for local development:
 *
 * | Variable | Default |
 * |---|---|
 * | `SERVER_PORT` | `3000` |
 * | `DATABASE_URL` | unset: in-memory user store |
 * | `JWT_SECRET` | development secret (logged as a warning) |
 * | `JWT_EXPIRES_IN_SECS` | `604800` (7 days) |
 * | `BCRYPT_COST` | `bcrypt::DEFAULT_COST` |
 * | `CORS_ORIGIN` | unset: any origin |
 *
 * # Error Handling
 *
 * Unparseable or out-of-range values (a `BCRYPT_COST` outside 4..=31) are
 * logged and replaced by their default; they do not prevent startup. A configured database that cannot be reached does.
 */

use std::sync::Arc;
use std::time::Duration;

use sqlx::PgPool;

use crate::backend::auth::{MemoryUserStore, PgUserStore, UserStore};
use crate::backend::server::init::StartupError;

pub const DEFAULT_PORT: u16 = 3000;
/// 7 days
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 7 * 24 * 60 * 60;
/// Used only when `JWT_SECRET` is unset
pub const DEVELOPMENT_JWT_SECRET: &str = "shopsmart-development-secret-change-me";
/// Work factors bcrypt accepts
pub const BCRYPT_COST_RANGE: std::ops::RangeInclusive<u32> = 4..=31;

/// Server settings
#[derive(Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// PostgreSQL URL; `None` selects the in-memory store
    pub database_url: Option<String>,
    pub jwt_secret: String,
    pub token_ttl: Duration,
    pub bcrypt_cost: u32,
    /// Allowed CORS origin; `None` allows any origin
    pub cors_origin: Option<String>,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("port", &self.port)
            .field("database_url", &self.database_url.as_ref().map(|_| "<set>"))
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl", &self.token_ttl)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("cors_origin", &self.cors_origin)
            .finish()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: None,
            jwt_secret: DEVELOPMENT_JWT_SECRET.to_string(),
            token_ttl: Duration::from_secs(DEFAULT_TOKEN_TTL_SECS),
            bcrypt_cost: bcrypt::DEFAULT_COST,
            cors_origin: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from process environment variables
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use shopsmart::backend::server::config::ServerConfig;
    ///
    /// dotenv::dotenv().ok();
    /// let config = ServerConfig::from_env();
    /// println!("listening on {}", config.port);
    /// ```
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let jwt_secret = get("JWT_SECRET").unwrap_or_else(|| {
            tracing::warn!("JWT_SECRET not set. Using an insecure development secret.");
            defaults.jwt_secret.clone()
        });

        Self {
            port: parse_or("SERVER_PORT", get("SERVER_PORT"), defaults.port),
            database_url: get("DATABASE_URL"),
            jwt_secret,
            token_ttl: Duration::from_secs(parse_or(
                "JWT_EXPIRES_IN_SECS",
                get("JWT_EXPIRES_IN_SECS"),
                DEFAULT_TOKEN_TTL_SECS,
            )),
            bcrypt_cost: bcrypt_cost_or(get("BCRYPT_COST"), defaults.bcrypt_cost),
            cors_origin: get("CORS_ORIGIN"),
        }
    }
}

fn parse_or<T>(key: &str, value: Option<String>, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
{
    match value {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("{} has invalid value {:?}; using {}", key, raw, default);
            default
        }),
    }
}

fn bcrypt_cost_or(value: Option<String>, default: u32) -> u32 {
    let cost = parse_or("BCRYPT_COST", value, default);
    if BCRYPT_COST_RANGE.contains(&cost) {
        cost
    } else {
        tracing::warn!("BCRYPT_COST {} is outside {:?}; using {}", cost, BCRYPT_COST_RANGE, default);
        default
    }
}

/// Select and initialize the user store
///
/// This function:
/// 1. Uses the in-memory store when `database_url` is unset
/// 2. Otherwise creates a PostgreSQL connection pool
/// 3. Runs database migrations
///
/// # Errors
///
/// Returns an error if the configured database is unreachable or its
/// migrations fail.
pub async fn load_user_store(config: &ServerConfig) -> Result<Arc<dyn UserStore>, StartupError> {
    let Some(database_url) = &config.database_url else {
        tracing::warn!("DATABASE_URL not set. Users are kept in memory and lost on restart.");
        return Ok(Arc::new(MemoryUserStore::new()));
    };

    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(database_url)
        .await
        .map_err(StartupError::Database)?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!()
        .run(&pool)
        .await
        .map_err(StartupError::Migration)?;
    tracing::info!("Database migrations completed successfully");

    Ok(Arc::new(PgUserStore::new(pool)))
}
