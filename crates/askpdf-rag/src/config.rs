//! Vector index configuration

use serde::{Deserialize, Serialize};
use std::env;
use url::Url;

use askpdf_core::{Error, Result};

/// gRPC port of the local Qdrant server the collection was built on
pub const DEFAULT_QDRANT_URL: &str = "http://localhost:6334";
pub const DEFAULT_COLLECTION: &str = "langchain_rag_docs";

/// Where the pre-built collection lives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexConfig {
    pub url: String,
    pub api_key: Option<String>,
    pub collection_name: String,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_QDRANT_URL.to_string(),
            api_key: None,
            collection_name: DEFAULT_COLLECTION.to_string(),
        }
    }
}

impl IndexConfig {
    /// Create configuration from environment variables, falling back to the
    /// local default collection
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create configuration from any key/value source
    pub fn from_lookup<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = get("QDRANT_URL").unwrap_or_else(|| DEFAULT_QDRANT_URL.to_string());
        Url::parse(&url)
            .map_err(|e| Error::Configuration(format!("Invalid QDRANT_URL '{}': {}", url, e)))?;

        let api_key = get("QDRANT_API_KEY").filter(|key| !key.is_empty());
        let collection_name =
            get("QDRANT_COLLECTION").unwrap_or_else(|| DEFAULT_COLLECTION.to_string());

        if collection_name.is_empty() {
            return Err(Error::Configuration(
                "QDRANT_COLLECTION must not be empty".to_string(),
            ));
        }

        Ok(Self {
            url,
            api_key,
            collection_name,
        })
    }
}
