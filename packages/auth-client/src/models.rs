use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email_or_username: String,
    pub password: String,
}

/// Registration payload. `confirm_password` travels to the API as well; the
/// upstream re-checks it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub first_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub last_name: String,
}

/// Token pair and user profile returned by both login and register.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthSuccess {
    pub access: String,
    pub refresh: String,
    #[serde(default)]
    pub user: Value,
}
