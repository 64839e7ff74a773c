//! Relational sink records
//!
//! Row types bound to the target relational schema. The record cursor on a
//! model yields these through the [`RelationalRecord`] enum; referential
//! integrity in the target store relies on the emission order the model
//! guarantees (referenced rows before referencing rows).

use serde::{Deserialize, Serialize};

/// User row in the target relational schema
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserRecord {
    /// Row key (the owner identity key)
    pub rk: String,
    pub email: String,
}

/// Join row linking a table to an owning user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableOwnerRecord {
    pub table_rk: String,
    pub user_rk: String,
}

/// Row emitted by a relational record cursor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "record_type", rename_all = "snake_case")]
pub enum RelationalRecord {
    User(UserRecord),
    TableOwner(TableOwnerRecord),
}
