//! Property-graph sink records
//!
//! Nodes and relationships as consumed by a property-graph loader. Attribute
//! maps preserve insertion order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A node in the property graph
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphNode {
    /// Identity key; shared with every other sink representation of the
    /// same logical entity
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub attributes: IndexMap<String, Value>,
}

/// A directed relationship between two graph nodes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphRelationship {
    pub start_key: String,
    pub start_label: String,
    pub end_key: String,
    pub end_label: String,
    #[serde(rename = "type")]
    pub relation_type: String,
    pub reverse_type: String,
    #[serde(default)]
    pub attributes: IndexMap<String, Value>,
}
