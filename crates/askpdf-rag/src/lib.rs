//! Passage retrieval for askpdf
//!
//! This crate provides the Qdrant vector index handle and the retriever that
//! embeds a question and searches the index with it.

mod config;
mod retriever;
mod vector_store;

pub use config::{IndexConfig, DEFAULT_COLLECTION, DEFAULT_QDRANT_URL};
pub use retriever::EmbeddingRetriever;
pub use vector_store::{passage_from_payload, QdrantIndex};

// Re-export core types for convenience
pub use askpdf_core::{
    Error, Result, RetrievedPassage, Retriever, SearchConfig, VectorIndex, DEFAULT_SEARCH_LIMIT,
};
