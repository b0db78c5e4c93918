//! HTTP client for the semantic search service

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use crate::config::SearchConfig;
use crate::errors::RagChatError;
use crate::errors::Result;
use crate::search::DocumentRetriever;
use crate::search::RetrievedDocument;

/// Client for the external search index
pub struct SearchClient {
    endpoint: String,
    index_name: String,
    api_key: String,
    client: Client,
}

impl SearchClient {
    /// Create a new search client
    ///
    /// # Errors
    /// - HTTP client build errors (invalid configuration)
    pub fn new(config: &SearchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| RagChatError::Http(e.to_string()))?;

        Ok(Self {
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            index_name: config.index_name.clone(),
            api_key: config.api_key.clone(),
            client,
        })
    }
}

#[derive(Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
    top_k: usize,
}

#[derive(Deserialize)]
struct SearchResponse {
    results: Vec<RetrievedDocument>,
}

#[async_trait]
impl DocumentRetriever for SearchClient {
    async fn retrieve(&self, query: &str, top_k: usize) -> Result<Vec<RetrievedDocument>> {
        let url = format!("{}/indexes/{}/search", self.endpoint, self.index_name);
        debug!("Calling search API: {} (top_k={})", url, top_k);

        let request = SearchRequest { query, top_k };

        // Single attempt: retry policy, if any, belongs to the transport layer
        let response = self
            .client
            .post(&url)
            .header("api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| RagChatError::Retrieval(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(RagChatError::Retrieval(format!(
                "search API error ({status}): {error_text}"
            )));
        }

        let result: SearchResponse = response
            .json()
            .await
            .map_err(|e| RagChatError::Retrieval(format!("failed to parse response: {e}")))?;

        // The backend returns ranked results; enforce only the top-K bound
        let mut documents = result.results;
        documents.truncate(top_k);

        debug!("Search returned {} documents", documents.len());
        Ok(documents)
    }
}
