use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::schema::{names::ColumnName, reference::ReferenceAction};

/// How a relationship's owning source relates to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipMethod {
    /// The owning source holds the foreign key.
    BelongsTo,
    /// The target holds a foreign key back to the owning source, and more
    /// than one target row may reference a given owner (`HasMany`'s
    /// complement for a plain, non-unique foreign key).
    HasMany,
    /// The target holds a foreign key back to the owning source, and the
    /// foreign key's local columns are constrained unique — at most one
    /// target row per owner.
    MightHave,
}

impl RelationshipMethod {
    /// `BelongsTo=3, HasMany=2, MightHave=1`, the ordering used to break
    /// ties during the second-pass numeric disambiguation in the Name
    /// Resolver.
    pub fn priority(self) -> u8 {
        match self {
            RelationshipMethod::BelongsTo => 3,
            RelationshipMethod::HasMany => 2,
            RelationshipMethod::MightHave => 1,
        }
    }
}

/// The join strategy a relationship's query should use, surfaced as an
/// attribute value rather than a dedicated field so `relationship_attrs`
/// overrides can replace it uniformly with the other attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum JoinType {
    Inner,
    Left,
}

/// A single default or user-overridden relationship attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case", untagged)]
pub enum AttrValue {
    Bool(bool),
    Str(String),
    Enum(ReferenceAction),
    JoinType(JoinType),
}

/// Free-form relationship attributes. A `BTreeMap` rather than a `HashMap`
/// so serialized plans are byte-identical across runs (the Determinism
/// invariant), without a separate sort pass before emission.
pub type AttrMap = BTreeMap<String, AttrValue>;

/// Where a relationship came from — which foreign key produced it, and
/// which monikers were involved on each side. Kept distinct from
/// `owning_source`/`target_source` because provenance survives any later
/// renaming of those monikers during disambiguation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Provenance {
    /// Index of the originating foreign key in catalog iteration order.
    /// Used as the stable tie-break when ordering duplicate relationship
    /// names for numeric disambiguation.
    pub origin_fk: usize,
    pub local_moniker: String,
    pub remote_moniker: String,
}

/// One directed, named edge between two sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub owning_source: String,
    pub method: RelationshipMethod,
    pub name: String,
    pub target_source: String,
    pub column_map: Vec<(ColumnName, ColumnName)>,
    pub attrs: AttrMap,
    pub provenance: Provenance,
}
