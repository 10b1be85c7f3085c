use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::schema::{
    column::ColumnDef, names::TableName, unique_constraint::UniqueConstraintDef,
};

/// A monikerized view of a [`crate::table::TableDef`] — the unit the
/// Relationship Inferencer and Name Resolver actually operate on. Built by
/// the Monikerizer once per table and threaded through the rest of the
/// pipeline instead of re-deriving a table's moniker at every call site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SourceDef {
    pub moniker: String,
    pub table_ref: TableName,
    /// `TableDef::sanitized_name` — relationship name seeds derive from this,
    /// not from `table_ref`.
    pub sanitized_name: TableName,
    pub columns: Vec<ColumnDef>,
    pub primary_key: Vec<String>,
    pub uniques: Vec<UniqueConstraintDef>,
}
