//! Data Catalog SDK - metadata extraction and multi-sink serialization
//!
//! Provides the extraction layer of a data-cataloging pipeline:
//! - A pull-based extraction contract (`init` via fallible constructors,
//!   `extract()` until `None`, a static `scope()` per extractor)
//! - A search-index extractor that turns a raw index catalog into canonical
//!   table metadata units
//! - Multi-sink serializable models that project themselves into
//!   property-graph, relational, and secondary-catalog records, all sharing
//!   one deterministic identity-key scheme
//! - Validated extractor configuration with explicit defaults

pub mod client;
pub mod config;
pub mod extractor;
pub mod models;
pub mod serialize;

// Re-export commonly used types
pub use client::{CatalogClient, ClientError, IndexCatalog};
#[cfg(feature = "http-client")]
pub use client::HttpCatalogClient;
pub use config::{ConfigError, ElasticsearchConfig, FetchErrorPolicy};
pub use extractor::{EsIndexExtractor, ExtractError, Extractor};
pub use serialize::{CatalogSerializable, GraphSerializable, RelationalSerializable};

// Re-export models
pub use models::{
    table_key, CatalogEntity, CatalogOperation, CatalogRelationship, ColumnMetadata, GraphNode,
    GraphRelationship, RelationalRecord, TableMetadata, TableOwner, TableOwnerRecord, UserRecord,
};
