//! Retrieval-augmented chat pipeline
//!
//! This module is the orchestration core: it validates an inbound
//! request, drives retrieval and generation in sequence, and assembles
//! the final provenance-carrying response:
//! - Request validation from the raw JSON body
//! - Context and prompt composition from retrieved documents
//! - Staged pipeline with fail-fast error propagation
//! - Response assembly with the exact context that was used
//!
//! # Examples
//!
//! ```rust,no_run
//! use ragchat::config::AppConfig;
//! use ragchat::rag::ChatService;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::load()?;
//!     let service = ChatService::new(&config)?;
//!
//!     let response = service.handle(r#"{"query": "What is onboarding?"}"#).await?;
//!     println!("Answer: {}", response.response);
//!     println!("Context: {}", response.context_used);
//!
//!     Ok(())
//! }
//! ```

pub mod pipeline;
pub mod prompt;
pub mod request;
pub mod response;

pub use pipeline::ChatService;
pub use prompt::PromptBuilder;
pub use request::ChatRequest;
pub use response::ChatResponse;
