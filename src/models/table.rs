//! Table metadata model
//!
//! The canonical structural description of a tabular or indexed resource,
//! independent of the source system it was extracted from. Extractors emit
//! these units; downstream serializers consume them.

use serde::{Deserialize, Serialize};

/// Build the identity key for a table from its ordered identity tuple.
///
/// The delimiter scheme (`db://cluster.schema/name`) guarantees that tables
/// with the same name in different cluster/schema pairs never collide. Every
/// sink representation of the same table must use this exact key.
pub fn table_key(database: &str, cluster: &str, schema: &str, name: &str) -> String {
    format!("{database}://{cluster}.{schema}/{name}")
}

/// A single column (or indexed field) of an extracted table.
///
/// Column order follows the source system's property order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColumnMetadata {
    /// Column name
    pub name: String,
    /// Column description; empty when the source provides none
    #[serde(default)]
    pub description: String,
    /// Source-system type name; empty when the source does not report one
    #[serde(default)]
    pub col_type: String,
    /// Display order for downstream rendering (default: 0)
    #[serde(default)]
    pub sort_order: i32,
}

impl ColumnMetadata {
    /// Create a new column with the given name, description, type and order
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        col_type: impl Into<String>,
        sort_order: i32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            col_type: col_type.into(),
            sort_order,
        }
    }
}

/// Canonical extraction unit for a table or index.
///
/// Identity is the ordered tuple (database, cluster, schema, name); see
/// [`table_key`]. Synthetic units derived from the same source row share the
/// primary unit's name and column list and differ only in `description` and
/// `description_source`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableMetadata {
    pub database: String,
    pub cluster: String,
    pub schema: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub columns: Vec<ColumnMetadata>,
    #[serde(default)]
    pub is_view: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Which substructure of the source row the description was rendered
    /// from (e.g. "aliases", "settings"); `None` for primary units
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_source: Option<String>,
}

impl TableMetadata {
    /// Identity key of this unit, stable across every sink
    pub fn key(&self) -> String {
        table_key(&self.database, &self.cluster, &self.schema, &self.name)
    }
}
