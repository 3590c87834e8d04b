//! Login and signup orchestration.
//!
//! Validates locally, calls the auth API, and persists tokens only when the
//! API accepts. Every failure maps to an [`AuthError`] whose `alert()` is what
//! the form shows.

use std::sync::Arc;

use auth_client::{LoginRequest, RegisterRequest};
use tracing::{info, warn};

use super::models::alert::Alert;
use super::models::session::AuthSession;
use super::{validate_login, validate_signup, AuthError};
use crate::common::storage::keys;
use crate::common::SessionStore;
use crate::kernel::BaseAuthApi;

const LOGIN_FALLBACK: &str = "Login failed. Please check your credentials and try again.";
const SIGNUP_FALLBACK: &str = "Registration failed. Please try again.";

pub const LOGIN_SUCCESS: &str = "Login successful!";
pub const SIGNUP_SUCCESS: &str = "Account created successfully!";

pub struct AuthFlow {
    api: Arc<dyn BaseAuthApi>,
    store: Arc<dyn SessionStore>,
}

impl AuthFlow {
    pub fn new(api: Arc<dyn BaseAuthApi>, store: Arc<dyn SessionStore>) -> Self {
        Self { api, store }
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<AuthSession, AuthError> {
        validate_login(request)?;

        let success = self.api.login(request).await.map_err(|e| {
            warn!(error = %e, "Login failed");
            AuthError::from_api(e, LOGIN_FALLBACK)
        })?;

        let session = AuthSession::from(success);
        self.persist(&session);
        info!("User logged in");
        Ok(session)
    }

    pub async fn signup(&self, request: &RegisterRequest) -> Result<AuthSession, AuthError> {
        validate_signup(request)?;

        let success = self.api.register(request).await.map_err(|e| {
            warn!(error = %e, "Registration failed");
            AuthError::from_api(e, SIGNUP_FALLBACK)
        })?;

        let session = AuthSession::from(success);
        self.persist(&session);
        info!("User registered");
        Ok(session)
    }

    /// Login as the form submits it: the outcome is the alert to show.
    pub async fn submit_login(&self, request: &LoginRequest) -> Alert {
        match self.login(request).await {
            Ok(_) => Alert::success(LOGIN_SUCCESS),
            Err(e) => e.alert(),
        }
    }

    pub async fn submit_signup(&self, request: &RegisterRequest) -> Alert {
        match self.signup(request).await {
            Ok(_) => Alert::success(SIGNUP_SUCCESS),
            Err(e) => e.alert(),
        }
    }

    pub fn logout(&self) {
        logout(self.store.as_ref());
    }

    fn persist(&self, session: &AuthSession) {
        self.store.set(keys::ACCESS_TOKEN, session.access_token.clone());
        self.store.set(keys::REFRESH_TOKEN, session.refresh_token.clone());
        self.store.set(keys::USER, session.user.to_string());
    }
}

/// Session stored by a previous login, if all three keys are present.
pub fn current_session(store: &dyn SessionStore) -> Option<AuthSession> {
    let access_token = store.get(keys::ACCESS_TOKEN)?;
    let refresh_token = store.get(keys::REFRESH_TOKEN)?;
    let user = serde_json::from_str(&store.get(keys::USER)?).ok()?;
    Some(AuthSession {
        access_token,
        refresh_token,
        user,
    })
}

pub fn logout(store: &dyn SessionStore) {
    for key in [keys::ACCESS_TOKEN, keys::REFRESH_TOKEN, keys::USER] {
        store.remove(key);
    }
}
