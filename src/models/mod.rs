//! Models module for the SDK
//!
//! Defines the canonical metadata shapes produced by extractors and the
//! sink record types model objects serialize into (property graph,
//! relational store, secondary catalog).

pub mod catalog;
pub mod graph;
pub mod owner;
pub mod relational;
pub mod table;

pub use catalog::{CatalogEntity, CatalogOperation, CatalogRelationship};
pub use graph::{GraphNode, GraphRelationship};
pub use owner::TableOwner;
pub use relational::{RelationalRecord, TableOwnerRecord, UserRecord};
pub use table::{table_key, ColumnMetadata, TableMetadata};
