//! FILENAME: tests/common/mod.rs
//! Test harness for calc-server integration tests.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use calc_server::{build_router, serve, ServerConfig};
use http_body_util::BodyExt;
use tokio::net::TcpListener;
use tower::ServiceExt;

/// Router built from the default configuration.
pub fn test_app() -> Router {
    build_router(&ServerConfig::default())
}

/// Sends one request through the router in-process and returns status and body text.
pub async fn send(app: Router, method: Method, uri: &str, body: impl Into<Body>) -> (StatusCode, String) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .expect("request should build");

    let response = app.oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();

    (status, String::from_utf8(bytes.to_vec()).expect("body should be utf-8"))
}

/// POSTs `{"expression": <expression>}` to `/`.
pub async fn post_expression(expression: &str) -> (StatusCode, String) {
    let body = serde_json::json!({ "expression": expression }).to_string();
    send(test_app(), Method::POST, "/", body).await
}

/// Starts a real server on an ephemeral port and returns its base URL.
/// The server runs until the test's runtime shuts down.
pub async fn spawn_server(config: ServerConfig) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("ephemeral port should bind");
    let addr = listener.local_addr().expect("listener has an address");

    tokio::spawn(async move {
        serve(listener, &config, std::future::pending()).await
    });

    format!("http://{}", addr)
}
