use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use serde_json::{Value, json};
use tokio::net::TcpListener;

use doctasks::application::ports::{
    InferenceError, ModelProvider, QuestionAnswerer, SummaryParams, Summarizer, TextClassifier,
    Translator,
};
use doctasks::infrastructure::inference::{HuggingFaceClient, HuggingFaceProvider};

const TOKEN: &str = "hf_test_token";

async fn summarize(headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    let expected = format!("Bearer {TOKEN}");
    if headers.get("authorization").and_then(|v| v.to_str().ok()) != Some(expected.as_str()) {
        return (StatusCode::UNAUTHORIZED, Json(json!({"error": "bad token"})));
    }
    let max_length = body["parameters"]["max_length"].as_u64().unwrap_or_default();
    let do_sample = body["parameters"]["do_sample"].as_bool().unwrap_or(true);
    (
        StatusCode::OK,
        Json(json!([{ "summary_text": format!("max={max_length} sample={do_sample}") }])),
    )
}

async fn answer(Json(body): Json<Value>) -> Json<Value> {
    assert_eq!(body["inputs"]["question"], "Who?");
    // Offsets are character indices: "Zoë" starts at char 7, byte 7, and ends at char 10, byte 11.
    Json(json!({ "answer": "Zoë", "score": 0.75, "start": 7, "end": 10 }))
}

async fn classify_nested() -> Json<Value> {
    Json(json!([[{ "label": "POSITIVE", "score": 0.9 }, { "label": "NEGATIVE", "score": 0.1 }]]))
}

async fn classify_flat() -> Json<Value> {
    Json(json!([{ "label": "NEGATIVE", "score": 0.6 }]))
}

async fn translate(Json(body): Json<Value>) -> Json<Value> {
    Json(json!([{ "translation_text": format!("fr:{}", body["inputs"].as_str().unwrap_or_default()) }]))
}

async fn rate_limited() -> StatusCode {
    StatusCode::TOO_MANY_REQUESTS
}

async fn loading() -> StatusCode {
    StatusCode::SERVICE_UNAVAILABLE
}

async fn server_error() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "boom")
}

async fn not_json() -> &'static str {
    "<html>nope</html>"
}

async fn spawn_stub() -> String {
    let router = Router::new()
        .route("/models/org/summarizer", post(summarize))
        .route("/models/org/qa", post(answer))
        .route("/models/org/nested", post(classify_nested))
        .route("/models/org/flat", post(classify_flat))
        .route("/models/org/translator", post(translate))
        .route("/models/org/busy", post(rate_limited))
        .route("/models/org/loading", post(loading))
        .route("/models/org/broken", post(server_error))
        .route("/models/org/html", post(not_json));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/")
}

fn client(base_url: &str, model_id: &str) -> HuggingFaceClient {
    HuggingFaceClient::new(reqwest::Client::new(), base_url, TOKEN.to_string(), model_id)
}

#[tokio::test]
async fn given_summarization_request_when_calling_then_sends_params_and_token() {
    let base = spawn_stub().await;

    let summary = client(&base, "org/summarizer")
        .summarize(
            "Long text",
            SummaryParams {
                max_length: 130,
                min_length: 30,
            },
        )
        .await
        .unwrap();

    assert_eq!(summary, "max=130 sample=false");
}

#[tokio::test]
async fn given_multibyte_context_when_answering_then_converts_offsets_to_bytes() {
    let base = spawn_stub().await;
    let context = "Asked: Zoë did.";

    let span = client(&base, "org/qa").answer("Who?", context).await.unwrap();

    assert_eq!(span.answer, "Zoë");
    assert_eq!((span.start, span.end), (7, 11));
    assert_eq!(&context[span.start..span.end], "Zoë");
}

#[tokio::test]
async fn given_nested_or_flat_label_lists_when_classifying_then_both_decode() {
    let base = spawn_stub().await;

    let nested = client(&base, "org/nested").classify("great").await.unwrap();
    let flat = client(&base, "org/flat").classify("meh").await.unwrap();

    assert_eq!(nested.len(), 2);
    assert_eq!(nested[0].label, "POSITIVE");
    assert_eq!(flat.len(), 1);
    assert_eq!(flat[0].label, "NEGATIVE");
}

#[tokio::test]
async fn given_provider_when_loading_translator_then_posts_to_model_endpoint() {
    let base = spawn_stub().await;
    let provider = HuggingFaceProvider::new(base, TOKEN, Duration::from_secs(5)).unwrap();

    let translator = provider.load_translator("org/translator").await.unwrap();

    assert_eq!(translator.translate("hello").await.unwrap(), "fr:hello");
}

#[tokio::test]
async fn given_error_statuses_when_calling_then_maps_to_inference_errors() {
    let base = spawn_stub().await;

    let busy = client(&base, "org/busy").translate("x").await;
    let loading = client(&base, "org/loading").translate("x").await;
    let broken = client(&base, "org/broken").translate("x").await;

    assert!(matches!(busy, Err(InferenceError::RateLimited)));
    assert!(matches!(loading, Err(InferenceError::ModelLoading(m)) if m == "org/loading"));
    assert!(matches!(broken, Err(InferenceError::ApiRequestFailed(m)) if m.contains("boom")));
}

#[tokio::test]
async fn given_undecodable_body_when_calling_then_reports_invalid_response() {
    let base = spawn_stub().await;

    let result = client(&base, "org/html").translate("x").await;

    assert!(matches!(result, Err(InferenceError::InvalidResponse(_))));
}

#[tokio::test]
async fn given_unreachable_host_when_calling_then_reports_request_failure() {
    let result = client("http://127.0.0.1:9", "org/any").translate("x").await;

    assert!(matches!(result, Err(InferenceError::ApiRequestFailed(_))));
}
