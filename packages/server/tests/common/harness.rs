//! Test harness: router under test plus a throwaway upstream.

use axum::{
    body::{to_bytes, Body, Bytes},
    http::{header, HeaderMap, Request, StatusCode},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tablefinder_core::server::{build_app, AppState};
use tower::ServiceExt;

use super::postcode_index;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Router wired to `upstream` with the fixture postcodes loaded.
pub fn test_app(upstream: &str) -> Router {
    init_tracing();
    build_app(AppState::new(postcode_index(), upstream), &[])
}

pub fn app_with_state(state: AppState) -> Router {
    init_tracing();
    build_app(state, &[])
}

/// Fake auth upstream. `/api/auth/register/` echoes the request body and
/// content type back with status 201; `/api/auth/login/` accepts the password
/// "secret" and answers 401 otherwise.
pub async fn spawn_upstream() -> String {
    let app = Router::new()
        .route(
            "/api/auth/register/",
            post(|headers: HeaderMap, body: Bytes| async move {
                let content_type = headers
                    .get(header::CONTENT_TYPE)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("none")
                    .to_string();
                (
                    StatusCode::CREATED,
                    [(header::CONTENT_TYPE, content_type)],
                    body,
                )
            }),
        )
        .route(
            "/api/auth/login/",
            post(|body: Bytes| async move {
                let accepted = serde_json::from_slice::<Value>(&body)
                    .map(|v| v["password"] == "secret")
                    .unwrap_or(false);
                if accepted {
                    (
                        StatusCode::OK,
                        [(header::CONTENT_TYPE, "application/json")],
                        r#"{"access":"a1","refresh":"r1","user":{"username":"sam"}}"#,
                    )
                } else {
                    (
                        StatusCode::UNAUTHORIZED,
                        [(header::CONTENT_TYPE, "application/json")],
                        r#"{"detail":"No active account found"}"#,
                    )
                }
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Fake geocoding service: Nominatim-style `/reverse` resolves to Newtown and
/// ipapi-style `/json/` resolves to Sydney. Any other path is a 404, so
/// `{base}/broken` works as a failing reverse endpoint.
pub async fn spawn_geocoder() -> String {
    let app = Router::new()
        .route(
            "/reverse",
            get(|| async {
                Json(json!({
                    "display_name": "Newtown, Sydney",
                    "address": {
                        "suburb": "Newtown",
                        "postcode": "2042",
                        "state": "New South Wales"
                    }
                }))
            }),
        )
        .route(
            "/json/",
            get(|| async {
                Json(json!({
                    "city": "Sydney",
                    "postal": "2000",
                    "region": "New South Wales",
                    "latitude": -33.8688,
                    "longitude": 151.2093
                }))
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Address nothing listens on.
pub fn dead_upstream() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response) -> Bytes {
    to_bytes(response.into_body(), usize::MAX).await.unwrap()
}

pub async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
