//! `OpenAIBackend` against a local chat-completions endpoint.

mod common;

use axum::{
    extract::{Json, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
    Router,
};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

use common::{credential, fast_params};
use postsmith::llm::{generate_post, CompletionBackend, OpenAIBackend};
use postsmith::prompt::SYSTEM_PROMPT;
use postsmith::{GenerationError, LLMParams};

struct Upstream {
    hits: AtomicUsize,
    status: StatusCode,
    body: String,
    last_request: Mutex<Option<(Option<String>, Value)>>,
}

impl Upstream {
    fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

async fn chat_completions(
    State(upstream): State<Arc<Upstream>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    upstream.hits.fetch_add(1, Ordering::SeqCst);
    let auth = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    *upstream.last_request.lock().unwrap() = Some((auth, body));

    (
        upstream.status,
        [(header::CONTENT_TYPE, "application/json")],
        upstream.body.clone(),
    )
}

/// Starts an endpoint that always answers with `status` and `body`.
async fn start_upstream(status: StatusCode, body: &str) -> (Arc<Upstream>, OpenAIBackend) {
    let upstream = Arc::new(Upstream {
        hits: AtomicUsize::new(0),
        status,
        body: body.to_string(),
        last_request: Mutex::new(None),
    });

    let app = Router::new()
        .route("/v1/chat/completions", post(chat_completions))
        .with_state(upstream.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let backend = OpenAIBackend::new(format!("http://{}/v1", addr)).unwrap();
    (upstream, backend)
}

fn completion_body(content: &str) -> String {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "created": 0,
        "model": "gpt-3.5-turbo",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop",
            "logprobs": null
        }]
    })
    .to_string()
}

#[tokio::test]
async fn test_reply_is_trimmed_and_request_carries_params() {
    let (upstream, backend) = start_upstream(StatusCode::OK, &completion_body("  Hello  ")).await;
    let params = LLMParams::default();

    let result = generate_post(&backend, &credential(), "LinkedIn", "Write a post", &params).await;

    assert_eq!(result, Ok("Hello".to_string()));
    assert_eq!(upstream.hits(), 1);

    let (auth, body) = upstream.last_request.lock().unwrap().take().unwrap();
    assert_eq!(auth.as_deref(), Some("Bearer sk-test"));
    assert_eq!(body["model"], "gpt-3.5-turbo");
    assert_eq!(body["max_tokens"], 500);
    assert!((body["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][0]["content"], SYSTEM_PROMPT);
    assert_eq!(body["messages"][1]["role"], "user");
    assert_eq!(body["messages"][1]["content"], "Write a post");
}

#[tokio::test]
async fn test_rate_limit_is_not_retried() {
    let body = json!({
        "error": {
            "message": "Rate limit reached",
            "type": "requests",
            "param": null,
            "code": "rate_limit_exceeded"
        }
    })
    .to_string();
    let (upstream, backend) = start_upstream(StatusCode::TOO_MANY_REQUESTS, &body).await;

    let result = backend
        .complete(&credential(), SYSTEM_PROMPT, "Write a post", &fast_params())
        .await;

    assert_eq!(result, Err(GenerationError::Api("Rate limit reached".to_string())));
    assert_eq!(upstream.hits(), 1);
}

#[tokio::test]
async fn test_unauthorized_reports_provider_message() {
    let body = json!({
        "error": {
            "message": "Incorrect API key provided",
            "type": "invalid_request_error",
            "param": null,
            "code": "invalid_api_key"
        }
    })
    .to_string();
    let (upstream, backend) = start_upstream(StatusCode::UNAUTHORIZED, &body).await;

    let result = backend
        .complete(&credential(), SYSTEM_PROMPT, "Write a post", &fast_params())
        .await;

    assert_eq!(
        result,
        Err(GenerationError::Api("Incorrect API key provided".to_string()))
    );
    assert_eq!(upstream.hits(), 1);
}

#[tokio::test]
async fn test_no_choices_is_empty_response() {
    let body = json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "created": 0,
        "model": "gpt-3.5-turbo",
        "choices": []
    })
    .to_string();
    let (_upstream, backend) = start_upstream(StatusCode::OK, &body).await;

    let result = backend
        .complete(&credential(), SYSTEM_PROMPT, "Write a post", &fast_params())
        .await;

    assert_eq!(result, Err(GenerationError::EmptyResponse));
}

#[tokio::test]
async fn test_malformed_body_is_an_api_error() {
    let (upstream, backend) = start_upstream(StatusCode::OK, "{not json").await;

    let result = backend
        .complete(&credential(), SYSTEM_PROMPT, "Write a post", &fast_params())
        .await;

    assert!(matches!(result, Err(GenerationError::Api(_))), "got {:?}", result);
    assert_eq!(upstream.hits(), 1);
}
