//! Complete chat pipeline: Validate -> Retrieve -> Prompt -> Generate -> Assemble

use std::sync::Arc;

use tracing::debug;
use tracing::info;

use crate::config::AppConfig;
use crate::errors::Result;
use crate::llm::CompletionBackend;
use crate::llm::CompletionClient;
use crate::rag::prompt::PromptBuilder;
use crate::rag::request::parse_chat_request;
use crate::rag::response;
use crate::rag::response::ChatResponse;
use crate::search::DocumentRetriever;
use crate::search::SearchClient;

/// The request orchestrator. One instance serves all requests; each
/// call owns its data end to end and shares nothing across requests.
pub struct ChatService {
    retriever: Arc<dyn DocumentRetriever>,
    completion: Arc<dyn CompletionBackend>,
    prompt_builder: PromptBuilder,
    top_k: usize,
}

impl ChatService {
    /// Create a service wired to the configured search and completion backends
    ///
    /// # Errors
    /// - Search client configuration errors
    /// - Completion client configuration errors
    pub fn new(config: &AppConfig) -> Result<Self> {
        let retriever = Arc::new(SearchClient::new(&config.search)?);
        let completion = Arc::new(CompletionClient::new(&config.generation)?);
        let prompt_builder = PromptBuilder::with_system_instruction(config.system_prompt());

        Ok(Self {
            retriever,
            completion,
            prompt_builder,
            top_k: config.top_k(),
        })
    }

    /// Create from existing backends
    #[must_use]
    pub fn from_backends(
        retriever: Arc<dyn DocumentRetriever>,
        completion: Arc<dyn CompletionBackend>,
        prompt_builder: PromptBuilder,
        top_k: usize,
    ) -> Self {
        Self {
            retriever,
            completion,
            prompt_builder,
            top_k,
        }
    }

    /// Run the full pipeline for one raw request body.
    ///
    /// Every stage fails fast: there is no fallback to answering without
    /// context and no partial answer is ever returned.
    ///
    /// # Errors
    /// - `Validation` when the body or query is invalid
    /// - `Retrieval` when the search call fails
    /// - `Generation` when the completion call fails
    pub async fn handle(&self, body: &str) -> Result<ChatResponse> {
        let request = parse_chat_request(body)?;
        info!("Processing chat query: {}", request.query);

        debug!("Step 1: Retrieving documents");
        let documents = self.retriever.retrieve(&request.query, self.top_k).await?;
        debug!("Retrieved {} documents", documents.len());

        // An empty result set is not an error: generation proceeds with
        // an empty context and the model says it cannot answer.
        debug!("Step 2: Building prompt");
        let context = self.prompt_builder.join_context(&documents);
        let prompt = self.prompt_builder.build(&request.query, &context);

        debug!("Step 3: Generating answer");
        let result = self.completion.complete(&prompt).await?;

        info!("Chat query completed successfully");
        Ok(response::assemble(&request.query, &result, &context))
    }
}
