//! Integration tests for the chat API, driving the axum router with
//! in-process mock backends.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header;
use axum::http::Request;
use axum::http::StatusCode;
use axum::Router;
use tower::ServiceExt;

use ragchat::api::handlers::AppState;
use ragchat::api::routes;
use ragchat::api::types::ErrorEnvelope;
use ragchat::api::types::HealthResponse;
use ragchat::llm::CompletionBackend;
use ragchat::llm::GenerationPrompt;
use ragchat::llm::GenerationResult;
use ragchat::rag::ChatService;
use ragchat::rag::PromptBuilder;
use ragchat::search::DocumentRetriever;
use ragchat::search::RetrievedDocument;
use ragchat::RagChatError;
use ragchat::Result;

struct FixedRetriever {
    documents: Vec<RetrievedDocument>,
}

#[async_trait]
impl DocumentRetriever for FixedRetriever {
    async fn retrieve(&self, _query: &str, top_k: usize) -> Result<Vec<RetrievedDocument>> {
        let mut documents = self.documents.clone();
        documents.truncate(top_k);
        Ok(documents)
    }
}

struct FixedCompletion {
    answer: String,
}

#[async_trait]
impl CompletionBackend for FixedCompletion {
    async fn complete(&self, _prompt: &GenerationPrompt) -> Result<GenerationResult> {
        Ok(GenerationResult {
            text: self.answer.clone(),
        })
    }
}

struct FailingCompletion;

#[async_trait]
impl CompletionBackend for FailingCompletion {
    async fn complete(&self, _prompt: &GenerationPrompt) -> Result<GenerationResult> {
        Err(RagChatError::Generation("model unavailable".to_string()))
    }
}

fn onboarding_router() -> Router {
    let retriever = Arc::new(FixedRetriever {
        documents: vec![RetrievedDocument {
            id: "doc1".to_string(),
            text: "Onboarding is...".to_string(),
            score: 0.9,
        }],
    });
    let completion = Arc::new(FixedCompletion {
        answer: "Onboarding means joining a team and learning its processes.".to_string(),
    });
    router_with(retriever, completion)
}

fn router_with(
    retriever: Arc<dyn DocumentRetriever>,
    completion: Arc<dyn CompletionBackend>,
) -> Router {
    let service = ChatService::from_backends(retriever, completion, PromptBuilder::new(), 5);
    let state = AppState {
        chat_service: Arc::new(service),
    };
    Router::new()
        .nest("/api", routes::api_routes(state.clone()))
        .merge(routes::compat_routes(state))
}

fn chat_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_chat_happy_path() {
    let app = onboarding_router();

    let response = app
        .oneshot(chat_request(
            "/api/chat",
            r#"{"query": "What is onboarding?"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );

    let body = body_string(response).await;
    // Pretty-printed body: one field per line
    assert!(body.contains("\n"));

    let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(parsed["query"], "What is onboarding?");
    assert_eq!(
        parsed["response"],
        "Onboarding means joining a team and learning its processes."
    );
    assert_eq!(parsed["context_used"], "Onboarding is...");

    let timestamp = parsed["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    assert!(timestamp.ends_with('Z'));
}

#[tokio::test]
async fn test_chat_alias_route() {
    let app = onboarding_router();

    let response = app
        .oneshot(chat_request("/chat", r#"{"query": "What is onboarding?"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_empty_query_returns_400_envelope() {
    let app = onboarding_router();

    let response = app
        .oneshot(chat_request("/api/chat", r#"{"query": ""}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let envelope: ErrorEnvelope = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(envelope.error, "Missing 'query' in request body");
}

#[tokio::test]
async fn test_malformed_body_returns_400_envelope() {
    let app = onboarding_router();

    let response = app
        .oneshot(chat_request("/api/chat", "this is not json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let envelope: ErrorEnvelope = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(envelope.error, "Malformed JSON in request body");
}

#[tokio::test]
async fn test_generation_failure_returns_500_envelope() {
    let retriever = Arc::new(FixedRetriever {
        documents: vec![RetrievedDocument {
            id: "doc1".to_string(),
            text: "Some context.".to_string(),
            score: 0.8,
        }],
    });
    let app = router_with(retriever, Arc::new(FailingCompletion));

    let response = app
        .oneshot(chat_request("/api/chat", r#"{"query": "hi"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    // No partial ChatResponse: the body is exactly the error envelope
    let body = body_string(response).await;
    let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        parsed["error"],
        "Internal server error: model unavailable"
    );
    assert!(parsed.get("response").is_none());
    assert!(parsed.get("context_used").is_none());
}

#[tokio::test]
async fn test_zero_documents_still_answers() {
    let app = router_with(
        Arc::new(FixedRetriever { documents: vec![] }),
        Arc::new(FixedCompletion {
            answer: "I don't have enough information to answer that.".to_string(),
        }),
    );

    let response = app
        .oneshot(chat_request("/api/chat", r#"{"query": "anything?"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let parsed: serde_json::Value =
        serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(parsed["context_used"], "");
}

#[tokio::test]
async fn test_health_check() {
    let app = onboarding_router();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let health: HealthResponse = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(health.status, "healthy");
    assert!(!health.version.is_empty());
}
