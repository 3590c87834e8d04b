use std::sync::Arc;

use async_trait::async_trait;
use auth_client::{AuthApiClient, AuthApiError, AuthSuccess, LoginRequest, RegisterRequest};

use super::traits::BaseAuthApi;
use crate::config::Config;

/// Wraps the HTTP auth client behind [`BaseAuthApi`].
#[derive(Clone)]
pub struct AuthApiAdapter(pub Arc<AuthApiClient>);

impl AuthApiAdapter {
    pub fn new(client: Arc<AuthApiClient>) -> Self {
        Self(client)
    }

    /// Client for `AUTH_API_BASE_URL`, or the default upstream when unset.
    pub fn from_config(config: &Config) -> Self {
        Self::new(Arc::new(AuthApiClient::new(config.auth_api_base_url.clone())))
    }
}

#[async_trait]
impl BaseAuthApi for AuthApiAdapter {
    async fn login(&self, request: &LoginRequest) -> Result<AuthSuccess, AuthApiError> {
        self.0.login(request).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthSuccess, AuthApiError> {
        self.0.register(request).await
    }
}
