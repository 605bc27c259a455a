//! Error types for askpdf

use thiserror::Error;

/// Result type alias using our custom Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Every failure the query pipeline can report.
///
/// Nothing is retried; each external call maps its failures onto one of
/// these variants and hands them back to the caller.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Vector index unreachable: {0}")]
    IndexUnreachable(String),

    #[error("Collection not found: {0}")]
    CollectionNotFound(String),

    #[error("Embedding dimension mismatch: collection stores {actual}-d vectors, embedder produces {expected}-d")]
    DimensionMismatch { expected: u64, actual: u64 },

    #[error("Vector store error: {0}")]
    VectorStore(String),

    #[error("Malformed search hit: {0}")]
    MalformedPayload(String),

    #[error("Embedding failed: {0}")]
    Embedding(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Generation failed: {0}")]
    Generation(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
