// Client for the upstream authentication API (login + register).

pub mod models;

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error, instrument, warn};

pub use crate::models::{AuthSuccess, LoginRequest, RegisterRequest};

/// Upstream used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "http://203.0.113.10:8000";

pub const LOGIN_PATH: &str = "/api/auth/login/";
pub const REGISTER_PATH: &str = "/api/auth/register/";

#[derive(Error, Debug)]
pub enum AuthApiError {
    /// The API answered with a non-success status. `body` is the parsed JSON
    /// payload, or a JSON string holding the raw text when it was not JSON.
    #[error("Auth API rejected request with status {status}")]
    Rejected { status: StatusCode, body: Value },

    #[error("Request to auth API failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid auth API response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Clone)]
pub struct AuthApiClient {
    client: Client,
    base_url: String,
}

impl AuthApiClient {
    /// Build a client for `base_url`, falling back to [`DEFAULT_BASE_URL`]
    /// when none (or an empty one) is given.
    pub fn new(base_url: Option<String>) -> Self {
        let base_url = base_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(15))
                .build()
                .unwrap_or_default(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[instrument(skip(self, request), fields(user = %request.email_or_username))]
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthSuccess, AuthApiError> {
        self.post_json(LOGIN_PATH, request).await
    }

    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthSuccess, AuthApiError> {
        self.post_json(REGISTER_PATH, request).await
    }

    async fn post_json<T: Serialize>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<AuthSuccess, AuthApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "Calling auth API");

        let response = self.client.post(&url).json(body).send().await.map_err(|e| {
            error!(error = %e, url = %url, "Auth API request failed");
            AuthApiError::Transport(e)
        })?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            warn!(status = %status, "Auth API returned an error");
            let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
            return Err(AuthApiError::Rejected { status, body });
        }

        serde_json::from_str(&text).map_err(|e| AuthApiError::InvalidResponse(e.to_string()))
    }
}
