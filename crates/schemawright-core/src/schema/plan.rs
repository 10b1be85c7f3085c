use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::schema::relationship::Relationship;

/// The final, post-resolution assignment of relationships to sources.
///
/// `sources` preserves catalog iteration order (useful for an emitter that
/// wants to walk sources in the order the host originally listed tables);
/// `by_source` is keyed by moniker and is a `BTreeMap`, again for the
/// Determinism invariant on serialized output.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipPlan {
    pub sources: Vec<String>,
    pub by_source: BTreeMap<String, Vec<Relationship>>,
}

impl RelationshipPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Relationships owned by `moniker`, in the order they were emitted.
    pub fn relationships_for(&self, moniker: &str) -> &[Relationship] {
        self.by_source
            .get(moniker)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn push(&mut self, moniker: &str, relationship: Relationship) {
        if !self.sources.iter().any(|m| m == moniker) {
            self.sources.push(moniker.to_string());
        }
        self.by_source
            .entry(moniker.to_string())
            .or_default()
            .push(relationship);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::relationship::{AttrMap, Provenance, RelationshipMethod};

    fn relationship(name: &str) -> Relationship {
        Relationship {
            owning_source: "Book".to_string(),
            method: RelationshipMethod::BelongsTo,
            name: name.to_string(),
            target_source: "Author".to_string(),
            column_map: vec![("author_id".to_string(), "id".to_string())],
            attrs: AttrMap::new(),
            provenance: Provenance {
                origin_fk: 0,
                local_moniker: "Book".to_string(),
                remote_moniker: "Author".to_string(),
            },
        }
    }

    #[test]
    fn push_preserves_first_seen_source_order() {
        let mut plan = RelationshipPlan::new();
        plan.push("Book", relationship("author"));
        plan.push("Author", relationship("books"));
        plan.push("Book", relationship("editor"));
        assert_eq!(plan.sources, vec!["Book".to_string(), "Author".to_string()]);
        assert_eq!(plan.relationships_for("Book").len(), 2);
    }

    #[test]
    fn relationships_for_unknown_source_is_empty() {
        let plan = RelationshipPlan::new();
        assert!(plan.relationships_for("Ghost").is_empty());
    }
}
