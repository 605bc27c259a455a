//! Vector index trait and search settings

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{Result, RetrievedPassage};

/// Number of hits returned when the caller does not ask for a specific limit
pub const DEFAULT_SEARCH_LIMIT: u64 = 4;

/// Configuration for vector search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub limit: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

/// Trait for read-only vector indexes (e.g., a Qdrant collection)
///
/// Implementations must return hits in the ranking order produced by the
/// index, capped at `config.limit`, without filtering or reordering them.
#[async_trait]
pub trait VectorIndex: Send + Sync {
    /// Nearest-neighbour search for an already embedded query
    async fn search_by_vector(
        &self,
        vector: Vec<f32>,
        config: &SearchConfig,
    ) -> Result<Vec<RetrievedPassage>>;

    /// Name of the collection being searched
    fn collection_name(&self) -> &str;
}
