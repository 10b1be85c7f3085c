use schemawright_core::ForeignKeyArityError;
use thiserror::Error;

/// Fatal conditions that abort `build_plan` immediately. Non-fatal
/// conditions (a `_rel` rename, an unmapped numeric disambiguation) never
/// appear here — they accumulate in [`crate::diagnostics::Diagnostics`]
/// instead.
#[derive(Debug, Error)]
pub enum RelationsError {
    #[error(
        "foreign key {local_table}({local_columns:?}) -> {remote_table}({remote_columns:?}) has mismatched arity: {local_len} local column(s), {remote_len} remote column(s)"
    )]
    SchemaMismatch {
        local_table: String,
        local_columns: Vec<String>,
        remote_table: String,
        remote_columns: Vec<String>,
        local_len: usize,
        remote_len: usize,
    },
    #[error(
        "could not resolve a unique name for relationship '{name}' on source '{moniker}' within {budget} suffix attempts"
    )]
    NameCollisionBudgetExceeded {
        moniker: String,
        name: String,
        budget: usize,
    },
    #[error("catalog adapter error: {0}")]
    Catalog(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<ForeignKeyArityError> for RelationsError {
    fn from(err: ForeignKeyArityError) -> Self {
        RelationsError::SchemaMismatch {
            local_table: err.local_table,
            local_columns: err.local_columns,
            remote_table: err.remote_table,
            remote_columns: err.remote_columns,
            local_len: err.local_len,
            remote_len: err.remote_len,
        }
    }
}
