//! Retriever trait

use async_trait::async_trait;

use crate::{Result, RetrievedPassage};

/// Trait for retrievers
///
/// Given the raw query text, returns the matching passages in relevance
/// order. The query is not trimmed or validated.
#[async_trait]
pub trait Retriever: Send + Sync {
    async fn retrieve(&self, query: &str) -> Result<Vec<RetrievedPassage>>;
}
