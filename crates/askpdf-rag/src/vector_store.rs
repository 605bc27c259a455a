//! Qdrant vector index

use async_trait::async_trait;
use qdrant_client::qdrant::point_id::PointIdOptions;
use qdrant_client::qdrant::value::Kind;
use qdrant_client::qdrant::vectors_config::Config as VectorsConfig;
use qdrant_client::qdrant::{PointId, ScoredPoint, SearchPointsBuilder, Value};
use qdrant_client::{Qdrant, QdrantError};
use std::collections::HashMap;
use tracing::{debug, info};

use askpdf_core::{Error, Result, RetrievedPassage, SearchConfig, VectorIndex};

use crate::config::IndexConfig;

/// Payload key holding the chunk text
pub const CONTENT_KEY: &str = "page_content";
/// Payload key holding the nested metadata object
pub const METADATA_KEY: &str = "metadata";
/// Metadata key holding the page number label
pub const PAGE_LABEL_KEY: &str = "page_label";
/// Metadata key holding the source file path
pub const SOURCE_KEY: &str = "source";

// gRPC status codes
const GRPC_DEADLINE_EXCEEDED: i32 = 4;
const GRPC_NOT_FOUND: i32 = 5;
const GRPC_PERMISSION_DENIED: i32 = 7;
const GRPC_UNAVAILABLE: i32 = 14;
const GRPC_UNAUTHENTICATED: i32 = 16;

/// Read-only handle on an existing Qdrant collection.
///
/// The collection is never created, modified or deleted from here.
pub struct QdrantIndex {
    client: Qdrant,
    collection_name: String,
    connected: bool,
}

impl QdrantIndex {
    /// Build the client. No request is made until [`QdrantIndex::connect`].
    pub fn new(config: &IndexConfig) -> Result<Self> {
        let builder = Qdrant::from_url(&config.url);
        let builder = if let Some(ref key) = config.api_key {
            builder.api_key(key.clone())
        } else {
            builder
        };

        let client = builder
            .build()
            .map_err(|e| Error::Configuration(format!("Failed to create Qdrant client: {}", e)))?;

        Ok(Self {
            client,
            collection_name: config.collection_name.clone(),
            connected: false,
        })
    }

    /// Check the collection exists and stores vectors of the expected size
    pub async fn connect(&mut self, expected_dimension: u64) -> Result<()> {
        let exists = self
            .client
            .collection_exists(self.collection_name.as_str())
            .await
            .map_err(|e| map_qdrant_error(e, &self.collection_name))?;

        if !exists {
            return Err(Error::CollectionNotFound(self.collection_name.clone()));
        }

        let info = self
            .client
            .collection_info(self.collection_name.as_str())
            .await
            .map_err(|e| map_qdrant_error(e, &self.collection_name))?;

        let vectors_config = info
            .result
            .and_then(|info| info.config)
            .and_then(|config| config.params)
            .and_then(|params| params.vectors_config)
            .and_then(|vectors| vectors.config);

        match vectors_config {
            Some(VectorsConfig::Params(params)) => {
                check_dimension(expected_dimension, params.size)?;
            }
            // Named vectors: the unnamed one the search targets cannot be checked up front
            Some(VectorsConfig::ParamsMap(_)) | None => {
                debug!(collection = %self.collection_name, "vector size not checked");
            }
        }

        info!(collection = %self.collection_name, "connected to vector index");
        self.connected = true;
        Ok(())
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }
}

#[async_trait]
impl VectorIndex for QdrantIndex {
    async fn search_by_vector(
        &self,
        vector: Vec<f32>,
        config: &SearchConfig,
    ) -> Result<Vec<RetrievedPassage>> {
        if !self.connected {
            return Err(Error::VectorStore(
                "Vector index not connected. Call connect() first.".to_string(),
            ));
        }

        let request =
            SearchPointsBuilder::new(self.collection_name.as_str(), vector, config.limit)
                .with_payload(true);

        let response = self
            .client
            .search_points(request)
            .await
            .map_err(|e| map_qdrant_error(e, &self.collection_name))?;

        debug!(hits = response.result.len(), "similarity search finished");

        response.result.into_iter().map(passage_from_point).collect()
    }

    fn collection_name(&self) -> &str {
        &self.collection_name
    }
}

fn check_dimension(expected: u64, actual: u64) -> Result<()> {
    if expected != actual {
        return Err(Error::DimensionMismatch { expected, actual });
    }
    Ok(())
}

/// Translate a client failure into the error taxonomy
fn map_qdrant_error(err: QdrantError, collection: &str) -> Error {
    match err {
        QdrantError::ResponseError { status } => {
            classify_status(status.code() as i32, status.message(), collection)
        }
        other => Error::VectorStore(other.to_string()),
    }
}

fn classify_status(code: i32, message: &str, collection: &str) -> Error {
    match code {
        GRPC_NOT_FOUND => Error::CollectionNotFound(format!("{}: {}", collection, message)),
        GRPC_UNAVAILABLE | GRPC_DEADLINE_EXCEEDED => Error::IndexUnreachable(message.to_string()),
        GRPC_UNAUTHENTICATED | GRPC_PERMISSION_DENIED => {
            Error::Authentication(format!("Qdrant rejected the request: {}", message))
        }
        _ if message.contains("Failed to connect") => Error::IndexUnreachable(message.to_string()),
        _ => Error::VectorStore(format!("Qdrant returned code {}: {}", code, message)),
    }
}

fn point_id_string(id: Option<PointId>) -> String {
    match id.and_then(|id| id.point_id_options) {
        Some(PointIdOptions::Uuid(uuid)) => uuid,
        Some(PointIdOptions::Num(num)) => num.to_string(),
        None => "unknown".to_string(),
    }
}

fn passage_from_point(point: ScoredPoint) -> Result<RetrievedPassage> {
    let id = point_id_string(point.id);
    let passage = passage_from_payload(&id, &point.payload)?;
    Ok(passage.with_score(point.score))
}

/// Pull content, page label and source out of a stored chunk's payload.
///
/// A chunk stored without `page_content` reads as empty text; the metadata
/// object with its page label and source is required.
pub fn passage_from_payload(
    point_id: &str,
    payload: &HashMap<String, Value>,
) -> Result<RetrievedPassage> {
    let missing = |key: &str| Error::MalformedPayload(format!("point {} has no '{}'", point_id, key));

    let content = match payload.get(CONTENT_KEY) {
        Some(value) => scalar_to_string(value).ok_or_else(|| missing(CONTENT_KEY))?,
        None => String::new(),
    };

    let metadata = match payload.get(METADATA_KEY).and_then(|v| v.kind.as_ref()) {
        Some(Kind::StructValue(metadata)) => &metadata.fields,
        _ => return Err(missing(METADATA_KEY)),
    };

    let page_label = metadata
        .get(PAGE_LABEL_KEY)
        .and_then(scalar_to_string)
        .ok_or_else(|| missing("metadata.page_label"))?;

    let source_path = metadata
        .get(SOURCE_KEY)
        .and_then(scalar_to_string)
        .ok_or_else(|| missing("metadata.source"))?;

    Ok(RetrievedPassage::new(content, page_label, source_path))
}

/// Render a scalar payload value as text.
///
/// Whole floats keep a trailing `.0` and booleans are capitalised, matching
/// how the indexing side prints them; exponent notation for very large or
/// small floats is not reproduced.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value.kind.as_ref()? {
        Kind::StringValue(s) => Some(s.clone()),
        Kind::IntegerValue(i) => Some(i.to_string()),
        Kind::DoubleValue(d) => Some(float_to_string(*d)),
        Kind::BoolValue(true) => Some("True".to_string()),
        Kind::BoolValue(false) => Some("False".to_string()),
        _ => None,
    }
}

fn float_to_string(d: f64) -> String {
    if d.is_finite() && d.fract() == 0.0 {
        format!("{:.1}", d)
    } else {
        d.to_string()
    }
}
