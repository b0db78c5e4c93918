/// API request handlers
use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use tracing::error;
use tracing::info;

use crate::api::types::HealthResponse;
use crate::errors::RagChatError;
use crate::rag::ChatService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ChatService>,
}

/// Health check handler
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Chat handler (POST /api/chat)
///
/// Takes the raw body so the pipeline's validator owns all payload
/// checks and 400 messages, rather than the framework's JSON extractor.
pub async fn chat(State(state): State<AppState>, body: String) -> Response {
    info!("POST /api/chat");

    match state.chat_service.handle(&body).await {
        Ok(response) => match serde_json::to_string_pretty(&response) {
            Ok(json) => (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                json,
            )
                .into_response(),
            Err(e) => {
                error!("Error serializing chat response: {}", e);
                RagChatError::Serialization(e).into_response()
            }
        },
        Err(e) => {
            error!("Error processing chat request: {}", e);
            e.into_response()
        }
    }
}
