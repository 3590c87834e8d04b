use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    postcodes: PostcodeHealth,
}

#[derive(Serialize)]
pub struct PostcodeHealth {
    status: String,
    loaded: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Health check endpoint
///
/// Returns 200 OK when the postcode asset loaded, 503 Service Unavailable
/// otherwise.
pub async fn health_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let postcodes = match &*state.postcodes {
        Ok(index) => PostcodeHealth {
            status: "ok".to_string(),
            loaded: index.len(),
            error: None,
        },
        Err(e) => PostcodeHealth {
            status: "error".to_string(),
            loaded: 0,
            error: Some(e.to_string()),
        },
    };

    let is_healthy = postcodes.error.is_none();

    let overall_status = if is_healthy {
        "healthy"
    } else {
        "unhealthy"
    };

    let status_code = if is_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(HealthResponse {
            status: overall_status.to_string(),
            postcodes,
        }),
    )
}
