//! Response assembly

use chrono::SecondsFormat;
use chrono::Utc;
use serde::Serialize;

use crate::llm::GenerationResult;

/// The structured reply returned to the caller. `context_used` is the
/// exact context string the prompt was built from, so the caller can
/// trace what was retrieved against what was answered.
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub query: String,
    pub response: String,
    pub context_used: String,
    pub timestamp: String,
}

/// Build the final response with a freshly generated UTC timestamp
#[must_use]
pub fn assemble(query: &str, result: &GenerationResult, context: &str) -> ChatResponse {
    ChatResponse {
        query: query.to_string(),
        response: result.text.clone(),
        context_used: context.to_string(),
        timestamp: utc_timestamp(),
    }
}

/// Current instant as ISO-8601 UTC with millisecond precision
#[must_use]
pub fn utc_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
