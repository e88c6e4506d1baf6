use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::middleware;
use axum::routing::get;
use tower::ServiceExt;

use doctasks::infrastructure::observability::{
    REQUEST_ID_HEADER, request_id_middleware, sanitize_prompt,
};

#[test]
fn given_empty_prompt_when_sanitizing_then_returns_empty_marker() {
    assert_eq!(sanitize_prompt(""), "[EMPTY]");
    assert_eq!(sanitize_prompt("   "), "[EMPTY]");
}

#[test]
fn given_long_multibyte_prompt_when_sanitizing_then_truncates_on_char_boundary() {
    let prompt = "é".repeat(150);

    let result = sanitize_prompt(&prompt);

    assert!(result.starts_with(&"é".repeat(100)));
    assert!(result.ends_with("... (150 chars total)"));
}

#[test]
fn given_hub_token_when_sanitizing_then_redacts_every_occurrence() {
    let result = sanitize_prompt("use hf_abcDEF123 or hf_zzz for auth");

    assert!(!result.contains("abcDEF123"));
    assert!(!result.contains("zzz"));
    assert_eq!(result, "use hf_[REDACTED] or hf_[REDACTED] for auth");
}

#[test]
fn given_bearer_header_when_sanitizing_then_redacts_token() {
    let result = sanitize_prompt("Authorization: Bearer sk-abc123xyz");

    assert_eq!(result, "Authorization: Bearer [REDACTED]");
}

fn echo_router() -> Router {
    Router::new()
        .route("/", get(|| async { "ok" }))
        .layer(middleware::from_fn(request_id_middleware))
}

#[tokio::test]
async fn given_request_without_id_when_handled_then_response_carries_generated_id() {
    let response = echo_router()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let id = response.headers().get(REQUEST_ID_HEADER).unwrap();
    assert_eq!(id.to_str().unwrap().len(), 36);
}

#[tokio::test]
async fn given_request_with_id_when_handled_then_echoes_it() {
    let response = echo_router()
        .oneshot(
            Request::builder()
                .uri("/")
                .header(REQUEST_ID_HEADER, "trace-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers().get(REQUEST_ID_HEADER).unwrap(), "trace-42");
}
