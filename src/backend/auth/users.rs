/**
 * User Model and Stores
 *
 * This module defines the stored user record and the `UserStore` capability
 * the auth service depends on, with two implementations:
 *
 * - `PgUserStore` - PostgreSQL through sqlx
 * - `MemoryUserStore` - process memory, used when no database is configured
 *   and in tests
 *
 * Both enforce email uniqueness and report a duplicate as
 * `StoreError::DuplicateEmail`.
 */

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use thiserror::Error;

use crate::shared::UserResponse;

/// User struct representing a user in the store
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct User {
    /// Store-assigned ID
    pub id: i64,
    /// User email address (unique, case-sensitive)
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            created_at: user.created_at,
        }
    }
}

/// Fields needed to create a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// User store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// The email is already taken
    #[error("a user with this email already exists")]
    DuplicateEmail,
    #[error("database error: {0}")]
    Database(sqlx::Error),
    #[error("user store unavailable: {0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return Self::DuplicateEmail;
            }
        }
        Self::Database(err)
    }
}

/// Persistence capability used by the auth service
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fetch a user by exact email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Fetch a user by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError>;

    /// Create a user, assigning its ID and creation time
    async fn create(&self, new_user: NewUser) -> Result<User, StoreError>;
}

/// PostgreSQL user store
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, first_name, last_name, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, first_name, last_name, password_hash, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn create(&self, new_user: NewUser) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password_hash, first_name, last_name)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, first_name, last_name, password_hash, created_at
            "#,
        )
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .bind(&new_user.first_name)
        .bind(&new_user.last_name)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }
}

#[derive(Debug)]
struct MemoryUsers {
    users: Vec<User>,
    next_id: i64,
}

/// In-memory user store
///
/// IDs start at 1 and increase by one per created user.
#[derive(Debug)]
pub struct MemoryUserStore {
    inner: Mutex<MemoryUsers>,
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self {
            inner: Mutex::new(MemoryUsers {
                users: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub fn len(&self) -> usize {
        self.inner.lock().map(|inner| inner.users.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, MemoryUsers>, StoreError> {
        self.inner
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let inner = self.lock()?;
        Ok(inner.users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError> {
        let inner = self.lock()?;
        Ok(inner.users.iter().find(|u| u.id == id).cloned())
    }

    async fn create(&self, new_user: NewUser) -> Result<User, StoreError> {
        let mut inner = self.lock()?;
        if inner.users.iter().any(|u| u.email == new_user.email) {
            return Err(StoreError::DuplicateEmail);
        }

        let user = User {
            id: inner.next_id,
            email: new_user.email,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            password_hash: new_user.password_hash,
            created_at: Utc::now(),
        };
        inner.next_id += 1;
        inner.users.push(user.clone());

        Ok(user)
    }
}
