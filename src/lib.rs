//! ragchat - a retrieval-augmented chat service
//!
//! Answers a natural-language query by fetching relevant context from a
//! search index, asking a generation backend for an answer grounded in
//! that context, and returning the answer together with the context
//! that was used.

pub mod api;
pub mod config;
pub mod errors;
pub mod llm;
pub mod logging;
pub mod rag;
pub mod search;

pub use config::AppConfig;
pub use errors::*;
