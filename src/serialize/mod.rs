//! Multi-sink serialization contracts
//!
//! A model object implements one trait per downstream sink it can project
//! itself into. Each accessor is a pull cursor: it returns the next record,
//! or `None` once exhausted, and keeps returning `None` on every later call.
//! Exhaustion is normal control flow, never an error.
//!
//! Cursors on one model advance independently and make no ordering promise
//! relative to each other; each cursor's own sequence is strictly ordered.
//! Cursors carry no locking, so a model instance must be driven by a single
//! consumer at a time.

use crate::models::catalog::{CatalogEntity, CatalogRelationship};
use crate::models::graph::{GraphNode, GraphRelationship};
use crate::models::relational::RelationalRecord;

/// Projection into property-graph records
pub trait GraphSerializable {
    /// Next graph node, or `None` when the node cursor is exhausted
    fn create_next_node(&mut self) -> Option<GraphNode>;

    /// Next graph relationship, or `None` when exhausted
    fn create_next_relation(&mut self) -> Option<GraphRelationship>;
}

/// Projection into relational rows
pub trait RelationalSerializable {
    /// Next relational record, or `None` when exhausted
    fn create_next_record(&mut self) -> Option<RelationalRecord>;
}

/// Projection into secondary-catalog records
pub trait CatalogSerializable {
    /// Next catalog entity, or `None` when exhausted
    fn create_next_entity(&mut self) -> Option<CatalogEntity>;

    /// Next catalog relationship, or `None` when exhausted
    fn create_next_relationship(&mut self) -> Option<CatalogRelationship>;
}
