//! Inbound request validation

use serde::Deserialize;

use crate::errors::RagChatError;
use crate::errors::Result;

/// Message returned when `query` is missing, not a string, or blank
pub const MISSING_QUERY_MESSAGE: &str = "Missing 'query' in request body";

/// Message returned when the body is not parsable JSON
pub const MALFORMED_BODY_MESSAGE: &str = "Malformed JSON in request body";

/// A validated chat request
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub query: String,
}

/// Parse and validate a raw request body.
///
/// The query must be present, a string, and non-empty after trimming.
/// The original (untrimmed) string is kept; trimming only gates the
/// emptiness check.
///
/// # Errors
/// - `Validation` with [`MALFORMED_BODY_MESSAGE`] when the body is not JSON
/// - `Validation` with [`MISSING_QUERY_MESSAGE`] when `query` is absent,
///   not a string, or blank
pub fn parse_chat_request(body: &str) -> Result<ChatRequest> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|_| RagChatError::Validation(MALFORMED_BODY_MESSAGE.to_string()))?;

    let query = value
        .get("query")
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default();

    if query.trim().is_empty() {
        return Err(RagChatError::Validation(MISSING_QUERY_MESSAGE.to_string()));
    }

    Ok(ChatRequest {
        query: query.to_string(),
    })
}
