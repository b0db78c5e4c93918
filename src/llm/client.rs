//! HTTP client for the text completion service

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use crate::config::GenerationConfig;
use crate::errors::RagChatError;
use crate::errors::Result;
use crate::llm::CompletionBackend;
use crate::llm::GenerationPrompt;
use crate::llm::GenerationResult;

/// Client for the external completion service (OpenAI-compatible chat API)
pub struct CompletionClient {
    endpoint: String,
    deployment: String,
    api_key: String,
    max_tokens: u32,
    temperature: f32,
    client: Client,
}

impl CompletionClient {
    /// Create a new completion client
    ///
    /// # Errors
    /// - HTTP client build errors (invalid configuration)
    pub fn new(config: &GenerationConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| RagChatError::Http(e.to_string()))?;

        Ok(Self {
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            deployment: config.deployment.clone(),
            api_key: config.api_key.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            client,
        })
    }
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

#[async_trait]
impl CompletionBackend for CompletionClient {
    async fn complete(&self, prompt: &GenerationPrompt) -> Result<GenerationResult> {
        let url = format!("{}/chat/completions", self.endpoint);
        debug!("Calling completion API: {} (model={})", url, self.deployment);

        let request = CompletionRequest {
            model: &self.deployment,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &prompt.system_instruction,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt.user_content,
                },
            ],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        // Single attempt: retry policy, if any, belongs to the transport layer
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| RagChatError::Generation(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(RagChatError::Generation(format!(
                "completion API error ({status}): {error_text}"
            )));
        }

        let result: CompletionResponse = response
            .json()
            .await
            .map_err(|e| RagChatError::Generation(format!("failed to parse response: {e}")))?;

        result
            .choices
            .into_iter()
            .next()
            .map(|choice| GenerationResult {
                text: choice.message.content,
            })
            .ok_or_else(|| RagChatError::Generation("no completion in response".to_string()))
    }
}
