//! Catalog source boundary
//!
//! The search-system connection is owned and lifecycle-managed by the
//! surrounding pipeline; this module defines the read-only trait the
//! extractor pulls the raw index catalog through, plus the typed shape of
//! that catalog.
//!
//! All maps preserve the source system's key order: both column order and
//! the single-document-type selection are ordered by arrival.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error type for catalog client operations
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Malformed catalog response: {0}")]
    MalformedResponse(String),
}

/// Raw index catalog as returned by the source system: index name to
/// metadata, in source order
pub type IndexCatalog = IndexMap<String, IndexMetadata>;

/// Raw metadata for one index
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct IndexMetadata {
    /// Document-type name to mapping; the source system supports a single
    /// document type per index, but its name is arbitrary
    #[serde(default)]
    pub mappings: IndexMap<String, DocumentMapping>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Value>,
}

/// Mapping section of one document type
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DocumentMapping {
    #[serde(default)]
    pub properties: IndexMap<String, PropertyMetadata>,
}

/// Raw metadata for one indexed property
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PropertyMetadata {
    #[serde(default, rename = "type")]
    pub field_type: Option<String>,
    /// Remaining property attributes the extractor does not interpret
    #[serde(flatten)]
    pub rest: IndexMap<String, Value>,
}

/// Read-only handle to the connected search system.
///
/// Implementations wrap whatever client the pipeline already holds; the
/// extractor calls [`indices`](CatalogClient::indices) exactly once per
/// lifetime, on first pull.
pub trait CatalogClient {
    /// Fetch the full index catalog
    fn indices(&self) -> Result<IndexCatalog, ClientError>;
}

#[cfg(feature = "http-client")]
pub mod http;
#[cfg(feature = "http-client")]
pub use http::HttpCatalogClient;
