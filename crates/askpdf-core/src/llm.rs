//! Embedding and chat-completion provider traits

use async_trait::async_trait;

use crate::{Conversation, Result};

/// Embedding model used both at indexing time and at query time
pub const EMBEDDING_MODEL: &str = "text-embedding-3-large";

/// Vector size produced by [`EMBEDDING_MODEL`]
pub const EMBEDDING_DIMENSION: u64 = 3072;

/// Chat model that writes the answer
pub const CHAT_MODEL: &str = "gpt-4o-mini";

/// Trait for embedding providers
///
/// Turns a piece of text into the vector used for similarity search.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Embed a single query string
    async fn embed_query(&self, text: &str) -> Result<Vec<f32>>;

    /// Length of the vectors this embedder produces
    fn dimension(&self) -> u64;

    /// Get the model ID being used
    fn model_id(&self) -> &str;
}

/// Trait for chat-completion providers
///
/// A single request is made per conversation and the text of the first
/// choice is returned as-is.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Generate a reply to the conversation
    async fn complete(&self, conversation: &Conversation) -> Result<String>;

    /// Get the model ID being used
    fn model_id(&self) -> &str;
}
