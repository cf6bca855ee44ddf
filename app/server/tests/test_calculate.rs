//! FILENAME: tests/test_calculate.rs
//! In-process tests for the evaluation endpoint.

mod common;

use axum::http::{Method, StatusCode};
use calc_server::{build_router, ServerConfig};
use common::{post_expression, send, test_app};

// ============================================================================
// SUCCESSFUL EVALUATION
// ============================================================================

#[tokio::test]
async fn test_valid_expression() {
    let (status, body) = post_expression("2+2").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("result: 4.000000"), "got {body}");
}

#[tokio::test]
async fn test_precedence_and_grouping() {
    assert_eq!(post_expression("2+3*4").await.1, "result: 14.000000");
    assert_eq!(post_expression("(2+3)*4").await.1, "result: 20.000000");
    assert_eq!(post_expression("8/2/2").await.1, "result: 2.000000");
}

#[tokio::test]
async fn test_whitespace_and_decimals() {
    assert_eq!(post_expression(" 2 + 2 ").await.1, "result: 4.000000");
    assert_eq!(post_expression("1/3").await.1, "result: 0.333333");
    assert_eq!(post_expression("-1.5*2").await.1, "result: -3.000000");
}

#[tokio::test]
async fn test_extra_fields_are_ignored() {
    let body = r#"{"expression": "5*3", "precision": 2, "id": "abc"}"#;
    let (status, text) = send(test_app(), Method::POST, "/", body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(text, "result: 15.000000");
}

#[tokio::test]
async fn test_content_type_is_not_required() {
    let app = test_app();
    let request = axum::http::Request::builder()
        .method(Method::POST)
        .uri("/")
        .body(axum::body::Body::from(r#"{"expression": "1+1"}"#))
        .unwrap();
    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// ============================================================================
// EVALUATION ERRORS (still 200 OK)
// ============================================================================

#[tokio::test]
async fn test_invalid_expression() {
    let (status, body) = post_expression("2+a").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("err: invalid expression"), "got {body}");
}

#[tokio::test]
async fn test_parse_errors_are_invalid_expression() {
    for expression in ["", "2+", "(1+2", "2 2", "*"] {
        let (status, body) = post_expression(expression).await;
        assert_eq!(status, StatusCode::OK);
        assert!(
            body.starts_with("err: invalid expression"),
            "{expression:?} gave {body}"
        );
    }
}

#[tokio::test]
async fn test_division_by_zero() {
    let (status, body) = post_expression("1/0").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "err: division by zero");
}

// ============================================================================
// TRANSPORT ERRORS
// ============================================================================

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let (status, body) = send(test_app(), Method::POST, "/", "not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "err: invalid request body");
}

#[tokio::test]
async fn test_missing_expression_field_is_bad_request() {
    let (status, _) = send(test_app(), Method::POST, "/", r#"{"expr": "1+1"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_non_string_expression_is_bad_request() {
    let (status, _) = send(test_app(), Method::POST, "/", r#"{"expression": 5}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let config = ServerConfig {
        max_body_bytes: 32,
        ..ServerConfig::default()
    };
    let body = serde_json::json!({ "expression": "1+".repeat(100) + "1" }).to_string();
    let (status, _) = send(build_router(&config), Method::POST, "/", body).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_get_on_root_is_not_allowed() {
    let (status, _) = send(test_app(), Method::GET, "/", "").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(test_app(), Method::GET, "/health", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}
