// Integration tests for the generation endpoints
//
// Each test drives the full router against a wiremock chat completion gateway:
// - forced tool call request shape
// - tool call argument round trip into the response envelope
// - 429 / 402 / other status translation
// - no outbound call for invalid actions or missing credentials

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use rstest::rstest;
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::matchers::{bearer_token, body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use studymate::api::{app_state::AppState, create_router};
use studymate::config::config::GatewayConfig;
use studymate::config::credentials::{CredentialSource, StaticCredentials};
use studymate::observability::AppMetrics;

const COMPLETIONS_PATH: &str = "/v1/chat/completions";

fn app_for(server: &MockServer, credentials: impl CredentialSource + 'static) -> Router {
    let config = GatewayConfig {
        endpoint: format!("{}{}", server.uri(), COMPLETIONS_PATH),
        ..GatewayConfig::default()
    };
    let state = AppState::from_config(&config, Arc::new(credentials), Arc::new(AppMetrics::default()))
        .expect("gateway client");
    create_router(state)
}

fn tool_call_reply(function: &str, arguments: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "finish_reason": "tool_calls",
            "message": {
                "role": "assistant",
                "content": null,
                "tool_calls": [{
                    "id": "call_0",
                    "type": "function",
                    "function": { "name": function, "arguments": arguments }
                }]
            }
        }]
    })
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_mindmap_round_trip() {
    let server = MockServer::start().await;
    let arguments = json!({
        "central": "Photosynthesis",
        "branches": [
            { "title": "Light reactions", "subbranches": ["Photosystem II", "Electron transport", "ATP synthase"] },
            { "title": "Calvin cycle", "subbranches": ["Carbon fixation", "Reduction", "Regeneration"] }
        ]
    });

    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .and(bearer_token("test-key"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({
            "model": "google/gemini-2.5-flash",
            "tools": [{ "type": "function", "function": { "name": "create_mindmap" } }],
            "tool_choice": { "type": "function", "function": { "name": "create_mindmap" } }
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(tool_call_reply("create_mindmap", &arguments.to_string())),
        )
        .expect(1)
        .mount(&server)
        .await;

    let app = app_for(&server, StaticCredentials::new("test-key"));
    let (status, body) = post_json(
        app,
        "/functions/v1/generate-mindmap",
        json!({ "concept": "Photosynthesis" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "mindmap": arguments }));
}

#[rstest]
#[case("summarize", "create_summary", json!({ "summary": "Short.", "keyPoints": ["a", "b"] }))]
#[case("flashcards", "create_flashcards", json!({ "flashcards": [{ "question": "Q", "answer": "A" }] }))]
#[case("quiz", "create_quiz", json!({ "questions": [{ "question": "Q", "options": ["a", "b", "c", "d"], "correctAnswer": 2, "explanation": "E" }] }))]
#[case("explain", "explain_concept", json!({ "explanation": "E", "examples": ["x"], "relatedConcepts": ["y"] }))]
#[tokio::test]
async fn test_study_round_trip(#[case] action: &str, #[case] function: &str, #[case] arguments: Value) {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .and(body_partial_json(json!({
            "tool_choice": { "type": "function", "function": { "name": function } }
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(tool_call_reply(function, &arguments.to_string())),
        )
        .expect(1)
        .mount(&server)
        .await;

    let app = app_for(&server, StaticCredentials::new("test-key"));
    let (status, body) = post_json(
        app,
        "/functions/v1/study-helper",
        json!({ "content": "The mitochondria is the powerhouse of the cell.", "action": action }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "result": arguments }));
}

#[rstest]
#[case(429, StatusCode::TOO_MANY_REQUESTS, "Rate limit exceeded. Please try again later.")]
#[case(402, StatusCode::PAYMENT_REQUIRED, "Payment required. Please add credits to continue.")]
#[case(500, StatusCode::INTERNAL_SERVER_ERROR, "AI gateway error")]
#[case(401, StatusCode::INTERNAL_SERVER_ERROR, "AI gateway error")]
#[tokio::test]
async fn test_gateway_status_translation(
    #[case] upstream: u16,
    #[case] expected: StatusCode,
    #[case] message: &str,
) {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(upstream)
                .set_body_json(json!({ "error": { "message": "upstream detail that must not leak" } })),
        )
        .mount(&server)
        .await;

    let app = app_for(&server, StaticCredentials::new("test-key"));
    let (status, body) = post_json(
        app,
        "/functions/v1/study-helper",
        json!({ "content": "x", "action": "quiz" }),
    )
    .await;

    assert_eq!(status, expected);
    assert_eq!(body, json!({ "error": message }));
}

#[tokio::test]
async fn test_invalid_action_never_calls_gateway() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let app = app_for(&server, StaticCredentials::new("test-key"));
    let (status, body) = post_json(
        app,
        "/functions/v1/study-helper",
        json!({ "content": "x", "action": "rewrite" }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Invalid action" }));
}

#[tokio::test]
async fn test_missing_credential_never_calls_gateway() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let app = app_for(&server, StaticCredentials::missing("LOVABLE_API_KEY"));
    let (status, body) = post_json(
        app,
        "/functions/v1/generate-mindmap",
        json!({ "concept": "Rust" }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "LOVABLE_API_KEY is not configured" }));
}

#[tokio::test]
async fn test_invalid_tool_arguments() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(tool_call_reply("create_mindmap", "{\"central\": \"Rust\", ")),
        )
        .mount(&server)
        .await;

    let app = app_for(&server, StaticCredentials::new("test-key"));
    let (status, body) = post_json(
        app,
        "/functions/v1/generate-mindmap",
        json!({ "concept": "Rust" }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().starts_with("Failed to parse AI result"));
}

#[tokio::test]
async fn test_reply_without_tool_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "role": "assistant", "content": "Here is your mind map" } }]
        })))
        .mount(&server)
        .await;

    let app = app_for(&server, StaticCredentials::new("test-key"));
    let (status, body) = post_json(
        app,
        "/functions/v1/generate-mindmap",
        json!({ "concept": "Rust" }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "No tool call in response" }));
}
