use thiserror::Error;

#[derive(Error, Debug)]
pub enum RagChatError {
    /// Caller-fixable request error. Displays as the validator's message
    /// so it can be returned to the client verbatim.
    #[error("{0}")]
    Validation(String),

    #[error("Search backend error: {0}")]
    Retrieval(String),

    #[error("Generation backend error: {0}")]
    Generation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP client error: {0}")]
    Http(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParsing(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RagChatError {
    /// The upstream detail carried by a backend failure, without the
    /// stage prefix. Used by the HTTP error mapper.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::Retrieval(detail) | Self::Generation(detail) => detail.clone(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RagChatError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_validation_error_displays_message_verbatim() {
        let error = RagChatError::Validation("Missing 'query' in request body".to_string());
        assert_eq!(format!("{error}"), "Missing 'query' in request body");
    }

    #[test]
    fn test_retrieval_error_display() {
        let error = RagChatError::Retrieval("index not found (404)".to_string());
        let display = format!("{error}");
        assert!(display.starts_with("Search backend error:"));
        assert!(display.contains("index not found"));
    }

    #[test]
    fn test_generation_error_detail_strips_prefix() {
        let error = RagChatError::Generation("quota exceeded".to_string());
        assert_eq!(error.detail(), "quota exceeded");
    }

    #[test]
    fn test_io_error_detail_keeps_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing file");
        let error: RagChatError = io_err.into();
        assert!(matches!(error, RagChatError::Io(_)));
        assert!(error.detail().contains("missing file"));
    }

    #[test]
    fn test_error_from_serde_json() {
        let parse_result: std::result::Result<serde_json::Value, _> =
            serde_json::from_str("{invalid json}");
        let json_err = parse_result.unwrap_err();
        let error: RagChatError = json_err.into();
        assert!(matches!(error, RagChatError::Serialization(_)));
    }
}
