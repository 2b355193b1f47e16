//! Client error types

use thiserror::Error;

use crate::shared::ConfigError;

/// Message shown for any failure to reach the service or read its reply
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

/// Client-side errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// The service answered with a failure envelope
    #[error("{message} (HTTP {status})")]
    Service { status: u16, message: String },

    /// The service could not be reached, or its reply could not be read
    #[error("transport error: {0}")]
    Transport(String),

    /// Durable token storage failed
    #[error("token storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("use_auth must be called within an auth provider scope")]
    OutsideProvider,

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ClientError {
    /// Text suitable for showing to the user
    ///
    /// Service failures carry the service's own message; transport failures
    /// collapse to [`NETWORK_ERROR_MESSAGE`].
    pub fn user_message(&self) -> String {
        match self {
            Self::Service { message, .. } => message.clone(),
            Self::Transport(_) => NETWORK_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }

    /// HTTP status of a service failure
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Service { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
