use std::time::{Duration, Instant};

use serde::Serialize;

/// How long an alert stays up before it dismisses itself.
pub const AUTO_DISMISS: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    Success,
    Error,
}

/// Dismissible message shown above the login/signup forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Error,
            message: message.into(),
        }
    }

    pub fn is_expired(&self, shown_at: Instant, now: Instant) -> bool {
        now.saturating_duration_since(shown_at) >= AUTO_DISMISS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismisses_after_five_seconds() {
        let alert = Alert::error("Invalid credentials");
        let shown = Instant::now();

        assert!(!alert.is_expired(shown, shown + Duration::from_secs(4)));
        assert!(alert.is_expired(shown, shown + AUTO_DISMISS));
    }
}
