use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::schema::names::{ColumnName, TableName};

/// A foreign-key edge as reported by a catalog adapter. `local_columns[i]`
/// references `remote_columns[i]`; the pairing is positional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ForeignKeyDef {
    pub local_table: TableName,
    pub local_columns: Vec<ColumnName>,
    pub remote_table: TableName,
    pub remote_columns: Vec<ColumnName>,
}

/// Column-count mismatch between a foreign key's local and remote column
/// lists. Fatal: the Inferencer aborts rather than guess a partial mapping.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error(
    "foreign key {local_table}({local_columns:?}) -> {remote_table}({remote_columns:?}) has mismatched arity: {local_len} local column(s), {remote_len} remote column(s)"
)]
pub struct ForeignKeyArityError {
    pub local_table: TableName,
    pub local_columns: Vec<ColumnName>,
    pub remote_table: TableName,
    pub remote_columns: Vec<ColumnName>,
    pub local_len: usize,
    pub remote_len: usize,
}

impl ForeignKeyDef {
    /// Enforces `len(local_columns) == len(remote_columns)`.
    pub fn validate(&self) -> Result<(), ForeignKeyArityError> {
        if self.local_columns.len() == self.remote_columns.len() {
            return Ok(());
        }
        Err(ForeignKeyArityError {
            local_table: self.local_table.clone(),
            local_columns: self.local_columns.clone(),
            remote_table: self.remote_table.clone(),
            remote_columns: self.remote_columns.clone(),
            local_len: self.local_columns.len(),
            remote_len: self.remote_columns.len(),
        })
    }
}
