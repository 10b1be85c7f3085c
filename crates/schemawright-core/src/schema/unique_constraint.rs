use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::schema::names::ColumnName;

/// A named (or unnamed) unique constraint, as reported by a catalog adapter.
/// Column order matters: the Relationship Inferencer treats a foreign key's
/// local columns as matching a unique constraint only if they match this
/// list exactly, in order (see [`crate::table::TableDef`]'s one-to-one
/// classification rule).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UniqueConstraintDef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub columns: Vec<ColumnName>,
}
