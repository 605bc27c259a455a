//! Retriever implementation

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

use askpdf_core::{Embedder, Result, RetrievedPassage, Retriever, SearchConfig, VectorIndex};

/// Retriever that embeds the query and runs a similarity search
pub struct EmbeddingRetriever<E: Embedder, V: VectorIndex> {
    embedder: Arc<E>,
    index: Arc<V>,
    search_config: SearchConfig,
}

impl<E: Embedder, V: VectorIndex> EmbeddingRetriever<E, V> {
    /// Create a new retriever using the default search settings
    pub fn new(embedder: Arc<E>, index: Arc<V>) -> Self {
        Self {
            embedder,
            index,
            search_config: SearchConfig::default(),
        }
    }
}

#[async_trait]
impl<E: Embedder + 'static, V: VectorIndex + 'static> Retriever for EmbeddingRetriever<E, V> {
    async fn retrieve(&self, query: &str) -> Result<Vec<RetrievedPassage>> {
        let vector = self.embedder.embed_query(query).await?;
        debug!(
            model = self.embedder.model_id(),
            dimension = vector.len(),
            "embedded query"
        );

        let passages = self
            .index
            .search_by_vector(vector, &self.search_config)
            .await?;

        info!(
            collection = self.index.collection_name(),
            hits = passages.len(),
            "retrieved passages"
        );
        for (rank, passage) in passages.iter().enumerate() {
            debug!(rank, page = %passage.page_label, score = ?passage.score, "hit");
        }

        Ok(passages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use askpdf_core::Error;
    use std::sync::Mutex;

    struct RecordingEmbedder {
        seen: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Embedder for RecordingEmbedder {
        async fn embed_query(&self, text: &str) -> Result<Vec<f32>> {
            self.seen.lock().unwrap().push(text.to_string());
            Ok(vec![1.0, 0.0, 0.0])
        }

        fn dimension(&self) -> u64 {
            3
        }

        fn model_id(&self) -> &str {
            "recording"
        }
    }

    struct FixedIndex {
        hits: Vec<RetrievedPassage>,
        seen_limit: Mutex<Option<u64>>,
    }

    #[async_trait]
    impl VectorIndex for FixedIndex {
        async fn search_by_vector(
            &self,
            vector: Vec<f32>,
            config: &SearchConfig,
        ) -> Result<Vec<RetrievedPassage>> {
            assert_eq!(vector, vec![1.0, 0.0, 0.0]);
            *self.seen_limit.lock().unwrap() = Some(config.limit);
            Ok(self.hits.clone())
        }

        fn collection_name(&self) -> &str {
            "fixed"
        }
    }

    struct DownIndex;

    #[async_trait]
    impl VectorIndex for DownIndex {
        async fn search_by_vector(
            &self,
            _vector: Vec<f32>,
            _config: &SearchConfig,
        ) -> Result<Vec<RetrievedPassage>> {
            Err(Error::IndexUnreachable("connection refused".to_string()))
        }

        fn collection_name(&self) -> &str {
            "down"
        }
    }

    fn embedder() -> Arc<RecordingEmbedder> {
        Arc::new(RecordingEmbedder {
            seen: Mutex::new(Vec::new()),
        })
    }

    #[tokio::test]
    async fn test_retrieve_keeps_index_order() {
        let hits = vec![
            RetrievedPassage::new("b", "2", "doc.pdf").with_score(0.9),
            RetrievedPassage::new("a", "1", "doc.pdf").with_score(0.4),
            RetrievedPassage::new("b", "2", "doc.pdf").with_score(0.3),
        ];
        let index = Arc::new(FixedIndex {
            hits: hits.clone(),
            seen_limit: Mutex::new(None),
        });
        let retriever = EmbeddingRetriever::new(embedder(), index.clone());

        let passages = retriever.retrieve("where is b?").await.unwrap();

        assert_eq!(passages, hits);
        assert_eq!(*index.seen_limit.lock().unwrap(), Some(4));
    }

    #[tokio::test]
    async fn test_whitespace_query_is_not_trimmed() {
        let embedder = embedder();
        let index = Arc::new(FixedIndex {
            hits: Vec::new(),
            seen_limit: Mutex::new(None),
        });
        let retriever = EmbeddingRetriever::new(embedder.clone(), index);

        let passages = retriever.retrieve(" \t ").await.unwrap();

        assert!(passages.is_empty());
        assert_eq!(*embedder.seen.lock().unwrap(), vec![" \t ".to_string()]);
    }

    #[tokio::test]
    async fn test_index_failure_propagates() {
        let retriever = EmbeddingRetriever::new(embedder(), Arc::new(DownIndex));

        let err = retriever.retrieve("q").await.unwrap_err();
        assert!(matches!(err, Error::IndexUnreachable(_)));
    }
}
