/**
 * Auth Store
 *
 * Client-side authentication state: who is logged in, with which token, and
 * whether a stored token is still being resolved.
 *
 * # States
 *
 * ```text
 * Unauthenticated ──login/signup──▶ Authenticated
 *        ▲                               │
 *        └──────────── logout ───────────┘
 *
 * (stored token) Resolving ──me ok──▶ Authenticated
 *                    └────me fails──▶ Unauthenticated (token removed)
 * ```
 *
 * # Concurrency
 *
 * The state lock is never held across an `.await`. Concurrent operations
 * are not deduplicated or cancelled; whichever response arrives last
 * decides the final state.
 */

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::client::api::AuthApi;
use crate::client::error::ClientError;
use crate::client::storage::TokenStorage;
use crate::shared::{AuthData, LoginRequest, SignupRequest, UserResponse};

/// Snapshot of the client's authentication state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<UserResponse>,
    pub token: Option<String>,
    /// A held token is being resolved to its user
    pub loading: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn status(&self) -> AuthStatus {
        if self.user.is_some() {
            AuthStatus::Authenticated
        } else if self.token.is_some() && self.loading {
            AuthStatus::Resolving
        } else {
            AuthStatus::Unauthenticated
        }
    }
}

/// Derived authentication status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    Unauthenticated,
    Resolving,
    Authenticated,
}

/// Result of a signup or login attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Success,
    Failure { message: String },
}

impl AuthOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Failure message, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success => None,
            Self::Failure { message } => Some(message.as_str()),
        }
    }
}

/// Shared client auth store
///
/// Cloning yields another handle to the same state.
#[derive(Clone)]
pub struct AuthStore {
    api: Arc<dyn AuthApi>,
    storage: Arc<dyn TokenStorage>,
    state: Arc<RwLock<AuthState>>,
}

impl std::fmt::Debug for AuthStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.read();
        f.debug_struct("AuthStore")
            .field("status", &state.status())
            .field("user", &state.user.as_ref().map(|u| u.id))
            .finish_non_exhaustive()
    }
}

impl AuthStore {
    /// Create a store, picking up any token left in storage
    ///
    /// A found token puts the store in `Resolving` until
    /// [`bootstrap`](Self::bootstrap) runs.
    pub fn new(api: Arc<dyn AuthApi>, storage: Arc<dyn TokenStorage>) -> Self {
        let token = storage.load().unwrap_or_else(|e| {
            tracing::warn!("Failed to read stored token: {}", e);
            None
        });
        let state = AuthState {
            loading: token.is_some(),
            token,
            user: None,
        };

        Self {
            api,
            storage,
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Resolve the stored token at startup
    ///
    /// Without a token this finishes immediately and makes no request.
    pub async fn bootstrap(&self) -> AuthStatus {
        self.resolve_held_token().await
    }

    /// Re-resolve the held token, e.g. to pick up a server-side change
    pub async fn refresh(&self) -> AuthStatus {
        self.resolve_held_token().await
    }

    /// Register and log in
    pub async fn signup(&self, request: SignupRequest) -> AuthOutcome {
        let result = self.api.signup(&request).await;
        self.finish_credentials(result)
    }

    /// Log in with email and password
    pub async fn login(&self, email: impl Into<String>, password: impl Into<String>) -> AuthOutcome {
        let request = LoginRequest::new(email, password);
        let result = self.api.login(&request).await;
        self.finish_credentials(result)
    }

    /// Forget the session locally
    ///
    /// Takes effect before returning; the service is not contacted.
    pub fn logout(&self) {
        self.discard_token();
        tracing::info!("Logged out");
    }

    pub fn state(&self) -> AuthState {
        self.read().clone()
    }

    pub fn status(&self) -> AuthStatus {
        self.read().status()
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().is_authenticated()
    }

    pub fn is_loading(&self) -> bool {
        self.read().loading
    }

    pub fn user(&self) -> Option<UserResponse> {
        self.read().user.clone()
    }

    pub fn token(&self) -> Option<String> {
        self.read().token.clone()
    }

    async fn resolve_held_token(&self) -> AuthStatus {
        let token = {
            let mut state = self.write();
            state.loading = state.token.is_some();
            state.token.clone()
        };

        let Some(token) = token else {
            return AuthStatus::Unauthenticated;
        };

        let result = self.api.me(&token).await;

        // A logout or new login during the request replaced the token
        {
            let state = self.read();
            if state.token.as_deref() != Some(token.as_str()) {
                tracing::debug!("Held token changed while resolving; dropping result");
                return state.status();
            }
        }

        match result {
            Ok(user) => {
                let mut state = self.write();
                if state.token.as_deref() == Some(token.as_str()) {
                    state.user = Some(user);
                    state.loading = false;
                }
                state.status()
            }
            Err(e) => {
                tracing::warn!("Stored token rejected: {}", e);
                self.discard_token();
                AuthStatus::Unauthenticated
            }
        }
    }

    fn finish_credentials(&self, result: Result<AuthData, ClientError>) -> AuthOutcome {
        match result {
            Ok(AuthData { user, token }) => {
                if let Err(e) = self.storage.save(&token) {
                    tracing::warn!("Failed to persist token: {}", e);
                }
                let mut state = self.write();
                state.user = Some(user);
                state.token = Some(token);
                state.loading = false;
                AuthOutcome::Success
            }
            Err(e) => {
                tracing::debug!("Authentication failed: {}", e);
                AuthOutcome::Failure {
                    message: e.user_message(),
                }
            }
        }
    }

    fn discard_token(&self) {
        if let Err(e) = self.storage.clear() {
            tracing::warn!("Failed to remove stored token: {}", e);
        }
        *self.write() = AuthState::default();
    }

    fn read(&self) -> RwLockReadGuard<'_, AuthState> {
        self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, AuthState> {
        self.state.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
