//! Pass-through proxy for the upstream auth API.
//!
//! `POST /api/proxy/<path>` forwards the raw body to
//! `<upstream>/<path>` and relays status and body unchanged. Anything other
//! than POST gets 405; a failed forward gets 500 with `{ error, details }`.

use axum::{
    body::Bytes,
    extract::{Extension, Path},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::server::app::AppState;

#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("Method {0} not allowed")]
    MethodNotAllowed(Method),

    #[error("Proxy request failed")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        match self {
            Self::MethodNotAllowed(_) => (
                StatusCode::METHOD_NOT_ALLOWED,
                [(header::ALLOW, HeaderValue::from_static("POST"))],
                Json(json!({ "error": "Method not allowed" })),
            )
                .into_response(),
            Self::Upstream(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Proxy request failed",
                    "details": e.to_string(),
                })),
            )
                .into_response(),
        }
    }
}

/// ANY /api/proxy
pub async fn proxy_root_handler(
    Extension(state): Extension<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    forward(&state, method, "", uri.query(), &headers, body).await
}

/// ANY /api/proxy/*path
pub async fn proxy_handler(
    Extension(state): Extension<AppState>,
    method: Method,
    Path(path): Path<String>,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    forward(&state, method, &path, uri.query(), &headers, body).await
}

/// Upstream URL for a proxied path. Keeps the trailing slash the upstream
/// routes expect.
pub fn upstream_url(upstream: &str, path: &str, query: Option<&str>) -> String {
    let mut url = format!(
        "{}/{}",
        upstream.trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(query);
    }
    url
}

async fn forward(
    state: &AppState,
    method: Method,
    path: &str,
    query: Option<&str>,
    headers: &HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    if method != Method::POST {
        debug!(method = %method, "Rejecting non-POST proxy request");
        return Err(ProxyError::MethodNotAllowed(method));
    }

    let url = upstream_url(&state.proxy_upstream, path, query);
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static("application/json"));

    info!(url = %url, bytes = body.len(), "Forwarding proxy request");

    let upstream = state
        .http
        .post(&url)
        .header(header::CONTENT_TYPE, content_type)
        .body(body)
        .send()
        .await
        .map_err(|e| {
            error!(error = %e, url = %url, "Upstream request failed");
            ProxyError::Upstream(e)
        })?;

    let status = upstream.status();
    let upstream_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await?;

    debug!(status = %status, bytes = bytes.len(), "Upstream responded");

    let mut response_headers = HeaderMap::new();
    if let Some(value) = upstream_type {
        response_headers.insert(header::CONTENT_TYPE, value);
    }

    Ok((status, response_headers, bytes).into_response())
}
