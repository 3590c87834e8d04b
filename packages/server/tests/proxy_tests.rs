//! Auth proxy behaviour: method gate, pass-through, transport failures.

mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use common::*;

fn proxy_request(method: Method, uri: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::ORIGIN, "https://app.example")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn non_post_methods_get_405() {
    let app = test_app(&dead_upstream());

    for method in [Method::GET, Method::PUT, Method::DELETE, Method::PATCH] {
        let response = send(
            app.clone(),
            proxy_request(method.clone(), "/api/proxy/api/auth/login/", ""),
        )
        .await;

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{method}");
        assert_eq!(response.headers()[header::ALLOW], "POST");
        let body = body_json(response).await;
        assert_eq!(body["error"], "Method not allowed");
    }
}

#[tokio::test]
async fn post_passes_status_and_body_through() {
    let upstream = spawn_upstream().await;
    let app = test_app(&upstream);

    let response = send(
        app,
        proxy_request(
            Method::POST,
            "/api/proxy/api/auth/register/",
            r#"{"username":"sam"}"#,
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
    assert_eq!(&body_bytes(response).await[..], br#"{"username":"sam"}"#);
}

#[tokio::test]
async fn upstream_error_status_is_not_rewritten() {
    let upstream = spawn_upstream().await;
    let app = test_app(&upstream);

    let response = send(
        app,
        proxy_request(Method::POST, "/api/proxy/api/auth/login/", "{}"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["detail"], "No active account found");
}

#[tokio::test]
async fn transport_failure_is_500_with_details() {
    let app = test_app(&dead_upstream());

    let response = send(
        app,
        proxy_request(Method::POST, "/api/proxy/api/auth/login/", "{}"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Proxy request failed");
    assert!(body["details"].as_str().is_some_and(|d| !d.is_empty()));
}

#[tokio::test]
async fn preflight_is_answered_with_permissive_cors() {
    let app = test_app(&dead_upstream());

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/proxy/api/auth/login/")
        .header(header::ORIGIN, "https://app.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = send(app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}
