use auth_client::AuthApiError;
use serde_json::Value;
use thiserror::Error;

use super::models::alert::Alert;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Caught before any network call.
    #[error("{0}")]
    Validation(String),

    /// The API answered and said no.
    #[error("{0}")]
    Rejected(String),

    #[error("Unable to reach the server. Please try again later.")]
    Unavailable(#[source] AuthApiError),
}

impl AuthError {
    pub fn alert(&self) -> Alert {
        Alert::error(self.to_string())
    }

    /// Turn an API failure into a user-facing error, falling back to
    /// `fallback` when the body carries nothing displayable.
    pub fn from_api(err: AuthApiError, fallback: &str) -> Self {
        match err {
            AuthApiError::Rejected { body, .. } => Self::Rejected(
                extract_error_message(&body).unwrap_or_else(|| fallback.to_string()),
            ),
            AuthApiError::InvalidResponse(_) => Self::Rejected(fallback.to_string()),
            transport @ AuthApiError::Transport(_) => Self::Unavailable(transport),
        }
    }
}

/// First displayable message in an API error body.
///
/// Looks at `error`, `errors`, `detail` and `message` in that order, each of
/// which may be a string, a list, or an object of field errors. Bodies made
/// only of field errors (`{"email": ["taken"]}`) resolve to the first one.
pub fn extract_error_message(body: &Value) -> Option<String> {
    match body {
        Value::Object(map) => ["error", "errors", "detail", "message"]
            .iter()
            .filter_map(|key| map.get(*key))
            .find_map(first_message)
            .or_else(|| first_message(body)),
        other => first_message(other),
    }
}

fn first_message(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }
        Value::Array(items) => items.iter().find_map(first_message),
        Value::Object(map) => map.values().find_map(first_message),
        _ => None,
    }
}
