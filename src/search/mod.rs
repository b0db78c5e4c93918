//! Search backend adapter
//!
//! This module talks to the external search index: one top-K semantic
//! search call per chat request, returning ranked documents. The index's
//! own ranking and storage are not this crate's concern.

pub mod client;

pub use client::SearchClient;

use async_trait::async_trait;
use serde::Deserialize;
use serde::Serialize;

use crate::errors::Result;

/// A document returned by the search index, ranked by relevance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievedDocument {
    pub id: String,
    pub text: String,
    pub score: f32,
}

/// Seam over the search backend so the pipeline can be exercised
/// without network access.
#[async_trait]
pub trait DocumentRetriever: Send + Sync {
    /// Retrieve up to `top_k` documents relevant to `query`, ranked by
    /// relevance score descending. An empty result is valid.
    async fn retrieve(&self, query: &str, top_k: usize) -> Result<Vec<RetrievedDocument>>;
}
