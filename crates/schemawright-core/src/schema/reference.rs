use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The `ON DELETE` / `ON UPDATE` action a foreign key carries, surfaced on a
/// `BelongsTo` relationship's default attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceAction {
    Cascade,
    Restrict,
    SetNull,
    SetDefault,
    NoAction,
}
