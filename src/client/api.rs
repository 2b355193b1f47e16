/**
 * Auth API Client
 *
 * HTTP client functions for signup, login and current-user lookup. Every
 * endpoint answers with the `ApiResponse` envelope; this module turns it
 * into either the payload or a `ClientError`.
 *
 * # Error Mapping
 *
 * - Non-2xx with a readable envelope: `ClientError::Service` carrying the
 *   service's message
 * - Connection failure or unreadable body: `ClientError::Transport`
 */

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::client::config::Config;
use crate::client::error::ClientError;
use crate::shared::{ApiResponse, AuthData, LoginRequest, SignupRequest, UserData, UserResponse};

/// Auth endpoints as seen by the client
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// POST /api/auth/signup
    async fn signup(&self, request: &SignupRequest) -> Result<AuthData, ClientError>;

    /// POST /api/auth/login
    async fn login(&self, request: &LoginRequest) -> Result<AuthData, ClientError>;

    /// GET /api/auth/me
    async fn me(&self, token: &str) -> Result<UserResponse, ClientError>;
}

/// reqwest-backed [`AuthApi`]
#[derive(Debug, Clone)]
pub struct HttpAuthApi {
    client: Client,
    config: Config,
}

impl HttpAuthApi {
    pub fn new(config: &Config) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Use an existing reqwest client (shared pool, custom timeouts)
    pub fn with_client(client: Client, config: &Config) -> Self {
        Self {
            client,
            config: config.clone(),
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!("Network error: {}", e);
            ClientError::from(e)
        })?;

        let status = response.status();
        let envelope: ApiResponse<T> = response.json().await.map_err(|e| {
            tracing::warn!("Failed to parse response ({}): {}", status, e);
            ClientError::from(e)
        })?;

        if !status.is_success() || !envelope.success {
            let message = envelope
                .message
                .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));
            return Err(ClientError::Service {
                status: status.as_u16(),
                message,
            });
        }

        envelope
            .data
            .ok_or_else(|| ClientError::Transport("response envelope has no data".to_string()))
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn signup(&self, request: &SignupRequest) -> Result<AuthData, ClientError> {
        let url = self.config.api_url("/api/auth/signup");
        self.send(self.client.post(url).json(request)).await
    }

    async fn login(&self, request: &LoginRequest) -> Result<AuthData, ClientError> {
        let url = self.config.api_url("/api/auth/login");
        self.send(self.client.post(url).json(request)).await
    }

    async fn me(&self, token: &str) -> Result<UserResponse, ClientError> {
        let url = self.config.api_url("/api/auth/me");
        let data: UserData = self.send(self.client.get(url).bearer_auth(token)).await?;
        Ok(data.user)
    }
}
