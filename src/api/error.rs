//! Translation of pipeline failures into HTTP responses
//!
//! Single entry point: every error raised by any stage becomes a status
//! code plus an [`ErrorEnvelope`], so the caller always receives a JSON
//! body with one human-readable message and nothing internal leaks.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;

use crate::api::types::ErrorEnvelope;
use crate::errors::RagChatError;

impl IntoResponse for RagChatError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            RagChatError::Validation(message) => (StatusCode::BAD_REQUEST, message.clone()),
            other => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Internal server error: {}", other.detail()),
            ),
        };

        (status, Json(ErrorEnvelope::new(message))).into_response()
    }
}
