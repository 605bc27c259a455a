//! Core traits and types for askpdf
//!
//! This crate defines the pieces of the question-answering pipeline that do
//! not talk to the network: the error type, the passage and message types,
//! the provider traits, and the pure functions that turn retrieved passages
//! into a chat conversation. Keeping these network-free makes every stage
//! testable with mocks.

pub mod context;
pub mod error;
pub mod llm;
pub mod prompt;
pub mod rag;
pub mod types;
pub mod vector_store;


pub use context::{format_context, format_passage, PASSAGE_SEPARATOR};
pub use error::{Error, Result};
pub use llm::{ChatModel, Embedder, CHAT_MODEL, EMBEDDING_DIMENSION, EMBEDDING_MODEL};
pub use prompt::{build_conversation, render_system_prompt, CONTEXT_PLACEHOLDER, SYSTEM_PROMPT_TEMPLATE};
pub use rag::Retriever;
pub use types::{ChatMessage, Conversation, RetrievedPassage, Role};
pub use vector_store::{SearchConfig, VectorIndex, DEFAULT_SEARCH_LIMIT};
