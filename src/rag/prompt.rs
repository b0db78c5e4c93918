//! Prompt composition from retrieved context

use crate::llm::GenerationPrompt;
use crate::search::RetrievedDocument;

/// System instruction used when none is configured
pub const DEFAULT_SYSTEM_INSTRUCTION: &str = "You are a helpful assistant that answers questions \
     based on the provided context. Use the context to provide accurate and relevant answers. \
     If the context doesn't contain enough information to answer the question, say so politely.";

/// Separator between document texts in the joined context
const CONTEXT_SEPARATOR: &str = "\n\n";

/// Builder folding retrieved documents and the user query into a
/// generation prompt. Deterministic and free of I/O.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    system_instruction: String,
}

impl PromptBuilder {
    /// Create a builder with the default system instruction
    #[must_use]
    pub fn new() -> Self {
        Self {
            system_instruction: DEFAULT_SYSTEM_INSTRUCTION.to_string(),
        }
    }

    /// Create a builder with a custom system instruction
    #[must_use]
    pub fn with_system_instruction(system_instruction: impl Into<String>) -> Self {
        Self {
            system_instruction: system_instruction.into(),
        }
    }

    /// Join document texts, in ranked order, into a single context string
    #[must_use]
    pub fn join_context(&self, documents: &[RetrievedDocument]) -> String {
        documents
            .iter()
            .map(|document| document.text.as_str())
            .collect::<Vec<_>>()
            .join(CONTEXT_SEPARATOR)
    }

    /// Compose the generation prompt from the query and joined context
    #[must_use]
    pub fn build(&self, query: &str, context: &str) -> GenerationPrompt {
        GenerationPrompt {
            system_instruction: self.system_instruction.clone(),
            user_content: format!("Context: {context}\n\nQuestion: {query}\n\nAnswer:"),
        }
    }
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}
