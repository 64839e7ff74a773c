//! Secondary-catalog sink records
//!
//! Entity and relationship shapes for the secondary catalog-graph protocol.
//! Qualified names reuse the same identity keys as the graph and relational
//! sinks.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Entity type name for users in the secondary catalog
pub const USER_TYPE_NAME: &str = "User";
/// Entity type name for tables
pub const TABLE_TYPE_NAME: &str = "Table";
/// Relationship type linking a table to an owning user
pub const OWNERSHIP_RELATION_TYPE: &str = "TableOwner";
/// Attribute key carrying an entity's qualified name
pub const QUALIFIED_NAME_ATTR: &str = "qualifiedName";

/// Operation the secondary-catalog publisher should perform for an entity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum CatalogOperation {
    Create,
    Update,
}

/// An entity in the secondary catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogEntity {
    pub type_name: String,
    pub operation: CatalogOperation,
    pub attributes: IndexMap<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationships: Option<IndexMap<String, Value>>,
}

/// A relationship between two secondary-catalog entities
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogRelationship {
    pub relationship_type: String,
    pub entity_type_1: String,
    pub qualified_name_1: String,
    pub entity_type_2: String,
    pub qualified_name_2: String,
    #[serde(default)]
    pub attributes: IndexMap<String, Value>,
}
