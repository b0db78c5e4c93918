//! Generation backend adapter
//!
//! One completion call per chat request. The model's output is passed
//! through verbatim: this crate never inspects, re-ranks, or
//! post-processes what the backend generates.

pub mod client;

pub use client::CompletionClient;

use async_trait::async_trait;

use crate::errors::Result;

/// A fully composed prompt for the generation backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPrompt {
    pub system_instruction: String,
    pub user_content: String,
}

/// Raw output from the completion backend
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub text: String,
}

/// Seam over the generation backend so the pipeline can be exercised
/// without network access.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Generate a completion for the prompt. Exactly one attempt.
    async fn complete(&self, prompt: &GenerationPrompt) -> Result<GenerationResult>;
}
