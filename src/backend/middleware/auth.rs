/**
 * Bearer Token Extraction
 *
 * This module provides the extractor used by routes that require
 * authentication. It reads the `Authorization` header and yields the raw
 * token; verification is left to the auth service so that signature and
 * expiry failures get their own message.
 */

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::backend::auth::NO_TOKEN_MESSAGE;
use crate::backend::error::BackendError;

const BEARER_PREFIX: &str = "Bearer ";

/// Raw bearer token from the `Authorization` header
///
/// Rejects with 401 "No token provided" when the header is missing, is not
/// valid ASCII, does not start with `Bearer `, or carries an empty token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BearerToken(pub String);

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| {
                tracing::warn!("Missing Authorization header");
                BackendError::unauthorized(NO_TOKEN_MESSAGE)
            })?;

        let token = header
            .strip_prefix(BEARER_PREFIX)
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                tracing::warn!("Invalid Authorization header format");
                BackendError::unauthorized(NO_TOKEN_MESSAGE)
            })?;

        Ok(BearerToken(token.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Request, StatusCode};

    async fn extract(header: Option<&str>) -> Result<BearerToken, BackendError> {
        let mut builder = Request::builder().uri("http://example.com/api/auth/me");
        if let Some(value) = header {
            builder = builder.header(AUTHORIZATION, value);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();
        BearerToken::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_extracts_token() {
        let token = extract(Some("Bearer abc.def.ghi")).await.unwrap();
        assert_eq!(token, BearerToken("abc.def.ghi".to_string()));
    }

    #[tokio::test]
    async fn test_missing_header() {
        let err = extract(None).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.message(), NO_TOKEN_MESSAGE);
    }

    #[tokio::test]
    async fn test_non_bearer_scheme() {
        for value in ["Basic dXNlcjpwYXNz", "bearer abc", "Bearerabc", "abc"] {
            let err = extract(Some(value)).await.unwrap_err();
            assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
            assert_eq!(err.message(), NO_TOKEN_MESSAGE);
        }
    }

    #[tokio::test]
    async fn test_empty_token() {
        let err = extract(Some("Bearer ")).await.unwrap_err();
        assert_eq!(err.message(), NO_TOKEN_MESSAGE);
    }
}
