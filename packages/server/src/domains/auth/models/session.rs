use auth_client::AuthSuccess;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tokens and user profile persisted after a successful login or signup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub refresh_token: String,
    pub user: Value,
}

impl From<AuthSuccess> for AuthSession {
    fn from(success: AuthSuccess) -> Self {
        Self {
            access_token: success.access,
            refresh_token: success.refresh,
            user: success.user,
        }
    }
}
