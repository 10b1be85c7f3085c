use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::schema::{
    column::ColumnDef, names::TableName, unique_constraint::UniqueConstraintDef,
};

/// A table as reported by a catalog adapter, before monikerization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TableDef {
    /// The name as the catalog reported it; may carry a schema prefix or
    /// exotic characters.
    pub raw_name: TableName,
    /// `normalize(sanitize(raw_name))`, used everywhere else in the pipeline.
    pub sanitized_name: TableName,
    pub columns: Vec<ColumnDef>,
    pub primary_key: Vec<String>,
    pub unique_constraints: Vec<UniqueConstraintDef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// A `primary_key` or `unique_constraints` entry names a column that does
/// not appear in `columns`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableValidationError {
    #[error("table '{table}' primary key references unknown column '{column}'")]
    UnknownPrimaryKeyColumn { table: TableName, column: String },
    #[error(
        "table '{table}' unique constraint {constraint:?} references unknown column '{column}'"
    )]
    UnknownUniqueConstraintColumn {
        table: TableName,
        constraint: Option<String>,
        column: String,
    },
}

impl TableDef {
    /// Checks that every column named in `primary_key` and in each
    /// `unique_constraints` entry actually exists among `columns`.
    pub fn validate(&self) -> Result<(), TableValidationError> {
        let known: HashSet<&str> = self.columns.iter().map(|c| c.name.as_str()).collect();

        for column in &self.primary_key {
            if !known.contains(column.as_str()) {
                return Err(TableValidationError::UnknownPrimaryKeyColumn {
                    table: self.sanitized_name.clone(),
                    column: column.clone(),
                });
            }
        }

        for constraint in &self.unique_constraints {
            for column in &constraint.columns {
                if !known.contains(column.as_str()) {
                    return Err(TableValidationError::UnknownUniqueConstraintColumn {
                        table: self.sanitized_name.clone(),
                        constraint: constraint.name.clone(),
                        column: column.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// True if `columns` exactly equals this table's primary key, in order.
    pub fn matches_primary_key(&self, columns: &[String]) -> bool {
        !self.primary_key.is_empty() && self.primary_key == columns
    }

    /// True if `columns` exactly equals any of this table's unique
    /// constraints, in order.
    pub fn matches_unique_constraint(&self, columns: &[String]) -> bool {
        self.unique_constraints
            .iter()
            .any(|uc| uc.columns == columns)
    }
}
