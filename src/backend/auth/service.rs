/**
 * Auth Service
 *
 * `AuthService` implements the signup, login and current-user operations
 * against three collaborators:
 *
 * - a `UserStore` (find by email, find by id, create)
 * - a `CredentialHasher` (hash, verify)
 * - a `TokenService` (issue, verify)
 *
 * Handlers stay thin: they extract the request, call the service and wrap
 * the result in the response envelope.
 *
 * # Blocking work
 *
 * bcrypt is deliberately slow, so hashing and verification run on the
 * blocking thread pool.
 */

use std::sync::Arc;

use crate::backend::auth::password::CredentialHasher;
use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users::{NewUser, UserStore};
use crate::backend::auth::validation::{validate_login, validate_signup};
use crate::backend::auth::{
    DUPLICATE_EMAIL_MESSAGE, INVALID_CREDENTIALS_MESSAGE, USER_NOT_FOUND_MESSAGE,
};
use crate::backend::error::BackendError;
use crate::shared::{AuthData, LoginRequest, SignupRequest, UserResponse};

/// Signup, login and current-user operations
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    hasher: Arc<dyn CredentialHasher>,
    tokens: TokenService,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<dyn CredentialHasher>,
        tokens: TokenService,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }

    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }

    /// Register a new user and issue a token
    ///
    /// # Errors
    ///
    /// * `Validation` - missing fields, bad email format, short password
    /// * `Conflict` - the email is already registered
    /// * `Internal` - hashing, storage or token failures
    pub async fn signup(&self, request: SignupRequest) -> Result<AuthData, BackendError> {
        let input = validate_signup(request)?;

        if self.users.find_by_email(&input.email).await?.is_some() {
            tracing::warn!(email = %input.email, "signup rejected: email already registered");
            return Err(BackendError::conflict(DUPLICATE_EMAIL_MESSAGE));
        }

        let password_hash = self.hash_password(input.password).await?;

        // A concurrent signup can still win the race; the store reports it as
        // DuplicateEmail, which converts to the same conflict.
        let user = self
            .users
            .create(NewUser {
                email: input.email,
                password_hash,
                first_name: input.first_name,
                last_name: input.last_name,
            })
            .await?;

        let token = self.tokens.issue(&user)?;
        tracing::info!(user_id = user.id, "user created");

        Ok(AuthData {
            user: UserResponse::from(&user),
            token,
        })
    }

    /// Authenticate with email and password and issue a token
    ///
    /// Unknown email and wrong password fail identically.
    pub async fn login(&self, request: LoginRequest) -> Result<AuthData, BackendError> {
        let input = validate_login(request)?;

        let Some(user) = self.users.find_by_email(&input.email).await? else {
            tracing::warn!("login rejected: unknown email");
            return Err(BackendError::unauthorized(INVALID_CREDENTIALS_MESSAGE));
        };

        if !self.verify_password(input.password, user.password_hash.clone()).await? {
            tracing::warn!(user_id = user.id, "login rejected: wrong password");
            return Err(BackendError::unauthorized(INVALID_CREDENTIALS_MESSAGE));
        }

        let token = self.tokens.issue(&user)?;
        tracing::info!(user_id = user.id, "user logged in");

        Ok(AuthData {
            user: UserResponse::from(&user),
            token,
        })
    }

    /// Resolve a bearer token to its user
    ///
    /// # Errors
    ///
    /// * `Unauthorized` - bad signature, expired, or malformed subject
    /// * `NotFound` - the token's user no longer exists
    pub async fn current_user(&self, token: &str) -> Result<UserResponse, BackendError> {
        let claims = self.tokens.verify(token).map_err(|e| {
            tracing::warn!(error = %e, "token rejected");
            BackendError::from(e)
        })?;
        let user_id = claims.user_id()?;

        let user = self.users.find_by_id(user_id).await?.ok_or_else(|| {
            tracing::warn!(user_id, "token subject not found");
            BackendError::not_found(USER_NOT_FOUND_MESSAGE)
        })?;

        Ok(UserResponse::from(&user))
    }

    async fn hash_password(&self, password: String) -> Result<String, BackendError> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| BackendError::internal(format!("hashing task failed: {e}")))?
            .map_err(|e| BackendError::internal(e.to_string()))
    }

    async fn verify_password(&self, password: String, hash: String) -> Result<bool, BackendError> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| BackendError::internal(format!("verification task failed: {e}")))?
            .map_err(|e| BackendError::internal(e.to_string()))
    }
}
