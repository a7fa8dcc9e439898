//! Bearer-token verification against the external auth service.
//!
//! Authentication is delegated wholesale: the server never mints or stores
//! credentials, it only asks the auth provider who a bearer token belongs to
//! and threads the resulting `CurrentUser` capability into the handlers that
//! need ownership checks.

use std::collections::HashMap;

use async_trait::async_trait;
use axum::http::HeaderMap;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;

/// The authenticated caller, resolved once per request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: String,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("no bearer token supplied")]
    MissingToken,
    #[error("bearer token was rejected")]
    InvalidToken,
    #[error("auth service is not configured")]
    NotConfigured,
    #[error("auth service unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait AuthVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<CurrentUser, AuthError>;
}

pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(axum::http::header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Verifies tokens against the auth provider's user-info endpoint
/// (`GET {base_url}/auth/v1/user`).
#[derive(Clone)]
pub struct HttpAuthVerifier {
    http: Client,
    base_url: Option<String>,
    api_key: Option<SecretString>,
}

#[derive(Debug, Deserialize)]
struct UserInfoResponse {
    id: String,
}

impl HttpAuthVerifier {
    pub fn new(http: Client, base_url: Option<String>, api_key: Option<SecretString>) -> Self {
        Self { http, base_url, api_key }
    }
}

#[async_trait]
impl AuthVerifier for HttpAuthVerifier {
    async fn verify(&self, token: &str) -> Result<CurrentUser, AuthError> {
        let base_url = self.base_url.as_deref().ok_or(AuthError::NotConfigured)?;

        let mut request = self
            .http
            .get(format!("{}/auth/v1/user", base_url.trim_end_matches('/')))
            .bearer_auth(token);
        if let Some(api_key) = &self.api_key {
            request = request.header("apikey", api_key.expose_secret());
        }

        let response =
            request.send().await.map_err(|error| AuthError::Unavailable(error.to_string()))?;

        match response.status() {
            StatusCode::OK => {
                let user: UserInfoResponse = response
                    .json()
                    .await
                    .map_err(|error| AuthError::Unavailable(error.to_string()))?;
                Ok(CurrentUser { id: user.id })
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(AuthError::InvalidToken),
            status => Err(AuthError::Unavailable(format!("status {status}"))),
        }
    }
}

/// Fixed token → user mapping for tests.
#[derive(Default)]
pub struct StaticAuthVerifier {
    users: HashMap<String, String>,
}

impl StaticAuthVerifier {
    pub fn with_user(mut self, token: &str, user_id: &str) -> Self {
        self.users.insert(token.to_string(), user_id.to_string());
        self
    }
}

#[async_trait]
impl AuthVerifier for StaticAuthVerifier {
    async fn verify(&self, token: &str) -> Result<CurrentUser, AuthError> {
        self.users
            .get(token)
            .map(|id| CurrentUser { id: id.clone() })
            .ok_or(AuthError::InvalidToken)
    }
}
