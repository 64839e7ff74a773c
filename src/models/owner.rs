//! Table ownership model
//!
//! Associates a table with its owners and projects the association into
//! every supported sink: property-graph nodes and relationships, relational
//! rows, and secondary-catalog entities and relationships. All cursors share
//! one identity-key scheme, so a given owner or table resolves to the same
//! key in every downstream store.
//!
//! The five cursors are built eagerly at construction and advance
//! independently; each returns `None` once exhausted and keeps returning
//! `None` thereafter. A model instance is for exclusive use by one consumer
//! at a time.

use std::vec::IntoIter;

use indexmap::IndexMap;
use serde_json::Value;

use super::catalog::{
    CatalogEntity, CatalogOperation, CatalogRelationship, OWNERSHIP_RELATION_TYPE,
    QUALIFIED_NAME_ATTR, TABLE_TYPE_NAME, USER_TYPE_NAME,
};
use super::graph::{GraphNode, GraphRelationship};
use super::relational::{RelationalRecord, TableOwnerRecord, UserRecord};
use super::table::table_key;
use crate::serialize::{CatalogSerializable, GraphSerializable, RelationalSerializable};

/// Node label for user entities in the property graph
pub const USER_NODE_LABEL: &str = "User";
/// Attribute key carrying the owner's email on a user node
pub const USER_NODE_EMAIL: &str = "email";
/// Node label for table entities
pub const TABLE_NODE_LABEL: &str = "Table";
/// Relation type from an owner to the object it owns
pub const OWNER_OF_OBJECT_RELATION_TYPE: &str = "OWNER_OF";
/// Reverse relation type from an object to its owner
pub const OWNER_RELATION_TYPE: &str = "OWNER";

/// Identity key for an owner, stable across every sink.
///
/// The key template is the owner's email itself.
pub fn owner_key(owner: &str) -> String {
    owner.to_string()
}

/// Ownership association between a table and an ordered list of owners.
///
/// Owners are trimmed on construction; entries that are empty after trimming
/// stay in the list but are skipped by every cursor, so the remaining owners
/// keep their relative order.
#[derive(Debug)]
pub struct TableOwner {
    database: String,
    cluster: String,
    schema: String,
    table: String,
    owners: Vec<String>,
    node_iter: IntoIter<GraphNode>,
    relation_iter: IntoIter<GraphRelationship>,
    record_iter: IntoIter<RelationalRecord>,
    entity_iter: IntoIter<CatalogEntity>,
    catalog_relation_iter: IntoIter<CatalogRelationship>,
}

impl TableOwner {
    /// Create an ownership association from an explicit owner list
    pub fn new(
        database: impl Into<String>,
        schema: impl Into<String>,
        table: impl Into<String>,
        owners: Vec<String>,
        cluster: impl Into<String>,
    ) -> Self {
        let database = database.into();
        let schema = schema.into();
        let table = table.into();
        let cluster = cluster.into();
        let owners: Vec<String> = owners.iter().map(|o| o.trim().to_string()).collect();

        let table_key = table_key(&database, &cluster, &schema, &table);
        let live: Vec<&str> = owners
            .iter()
            .filter(|o| !o.is_empty())
            .map(String::as_str)
            .collect();

        let nodes: Vec<GraphNode> = live.iter().map(|o| Self::build_node(o)).collect();
        let relations: Vec<GraphRelationship> = live
            .iter()
            .map(|o| Self::build_relation(o, &table_key))
            .collect();
        let records: Vec<RelationalRecord> = live
            .iter()
            .flat_map(|o| Self::build_records(o, &table_key))
            .collect();
        let entities: Vec<CatalogEntity> = live.iter().map(|o| Self::build_entity(o)).collect();
        let catalog_relations: Vec<CatalogRelationship> = live
            .iter()
            .map(|o| Self::build_catalog_relation(o, &table_key))
            .collect();

        Self {
            database,
            cluster,
            schema,
            table,
            owners,
            node_iter: nodes.into_iter(),
            relation_iter: relations.into_iter(),
            record_iter: records.into_iter(),
            entity_iter: entities.into_iter(),
            catalog_relation_iter: catalog_relations.into_iter(),
        }
    }

    /// Create an ownership association from a comma-delimited owner string
    pub fn from_csv(
        database: impl Into<String>,
        schema: impl Into<String>,
        table: impl Into<String>,
        owners: &str,
        cluster: impl Into<String>,
    ) -> Self {
        let owners = owners.split(',').map(str::to_string).collect();
        Self::new(database, schema, table, owners, cluster)
    }

    /// Normalized owner list, in input order (empty entries retained)
    pub fn owners(&self) -> &[String] {
        &self.owners
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn cluster(&self) -> &str {
        &self.cluster
    }

    pub fn schema(&self) -> &str {
        &self.schema
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Identity key of the owned table
    pub fn table_key(&self) -> String {
        table_key(&self.database, &self.cluster, &self.schema, &self.table)
    }

    fn build_node(owner: &str) -> GraphNode {
        let mut attributes = IndexMap::new();
        attributes.insert(USER_NODE_EMAIL.to_string(), Value::String(owner.to_string()));
        GraphNode {
            key: owner_key(owner),
            label: USER_NODE_LABEL.to_string(),
            attributes,
        }
    }

    fn build_relation(owner: &str, table_key: &str) -> GraphRelationship {
        GraphRelationship {
            start_key: owner_key(owner),
            start_label: USER_NODE_LABEL.to_string(),
            end_key: table_key.to_string(),
            end_label: TABLE_NODE_LABEL.to_string(),
            relation_type: OWNER_OF_OBJECT_RELATION_TYPE.to_string(),
            reverse_type: OWNER_RELATION_TYPE.to_string(),
            attributes: IndexMap::new(),
        }
    }

    // The user row must precede the join row that references it.
    fn build_records(owner: &str, table_key: &str) -> [RelationalRecord; 2] {
        [
            RelationalRecord::User(UserRecord {
                rk: owner_key(owner),
                email: owner.to_string(),
            }),
            RelationalRecord::TableOwner(TableOwnerRecord {
                table_rk: table_key.to_string(),
                user_rk: owner_key(owner),
            }),
        ]
    }

    fn build_entity(owner: &str) -> CatalogEntity {
        let mut attributes = IndexMap::new();
        attributes.insert(
            QUALIFIED_NAME_ATTR.to_string(),
            Value::String(owner_key(owner)),
        );
        attributes.insert(USER_NODE_EMAIL.to_string(), Value::String(owner.to_string()));
        CatalogEntity {
            type_name: USER_TYPE_NAME.to_string(),
            operation: CatalogOperation::Create,
            attributes,
            relationships: None,
        }
    }

    fn build_catalog_relation(owner: &str, table_key: &str) -> CatalogRelationship {
        CatalogRelationship {
            relationship_type: OWNERSHIP_RELATION_TYPE.to_string(),
            entity_type_1: TABLE_TYPE_NAME.to_string(),
            qualified_name_1: table_key.to_string(),
            entity_type_2: USER_TYPE_NAME.to_string(),
            qualified_name_2: owner_key(owner),
            attributes: IndexMap::new(),
        }
    }
}

impl GraphSerializable for TableOwner {
    fn create_next_node(&mut self) -> Option<GraphNode> {
        self.node_iter.next()
    }

    fn create_next_relation(&mut self) -> Option<GraphRelationship> {
        self.relation_iter.next()
    }
}

impl RelationalSerializable for TableOwner {
    fn create_next_record(&mut self) -> Option<RelationalRecord> {
        self.record_iter.next()
    }
}

impl CatalogSerializable for TableOwner {
    fn create_next_entity(&mut self) -> Option<CatalogEntity> {
        self.entity_iter.next()
    }

    fn create_next_relationship(&mut self) -> Option<CatalogRelationship> {
        self.catalog_relation_iter.next()
    }
}
