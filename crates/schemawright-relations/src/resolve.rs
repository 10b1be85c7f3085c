//! Name Resolver: collision resolution against inherited/catalog methods,
//! and duplicate-name disambiguation between relationships on the same
//! source.

use std::collections::HashMap;

use schemawright_core::RelationshipMethod;
use schemawright_naming::{to_plural, to_singular};

use crate::adjective::extract_adjectives;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::RelationsError;
use crate::moniker::inflect_with_override;
use crate::options::{Options, RelNameContext};

const REL_SUFFIX_BUDGET: usize = 16;

/// One relationship candidate awaiting final naming, tracked while a
/// source's edges are still being processed.
#[derive(Debug, Clone)]
pub(crate) struct PendingRelationship {
    /// The pre-inflection name seed — re-inflected whenever disambiguation
    /// appends a qualifier or numeric suffix.
    pub stem: String,
    pub name: String,
    /// True once `name` came from a `rel_name_map` override at any stage —
    /// suppresses "please supply a name" warnings later.
    pub mapped: bool,
    pub method: RelationshipMethod,
    pub target_source: String,
    pub column_map: Vec<(String, String)>,
    pub attrs: schemawright_core::AttrMap,
    pub origin_fk: usize,
    pub local_moniker: String,
    pub remote_moniker: String,
}

/// If `name` collides with an inherited/catalog method on `moniker`,
/// rename it. A configured `rel_collision_map` rule wins;
/// otherwise `_rel` is appended repeatedly (capped at
/// [`REL_SUFFIX_BUDGET`], a fatal budget past which `build_plan` aborts).
pub(crate) fn resolve_inherited_collision(
    name: &str,
    moniker: &str,
    is_result_class_method: &dyn Fn(&str, &str) -> bool,
    options: &Options,
    diagnostics: &mut Diagnostics,
) -> Result<String, RelationsError> {
    if !is_result_class_method(name, moniker) {
        return Ok(name.to_string());
    }

    if let Some(templated) = options.rel_collision_map.resolve(name) {
        return Ok(templated);
    }

    let mut candidate = name.to_string();
    for _ in 0..REL_SUFFIX_BUDGET {
        candidate = format!("{candidate}_rel");
        if !is_result_class_method(&candidate, moniker) {
            diagnostics.push(Diagnostic::RelSuffixApplied {
                moniker: moniker.to_string(),
                original: name.to_string(),
                resolved: candidate.clone(),
            });
            return Ok(candidate);
        }
    }

    Err(RelationsError::NameCollisionBudgetExceeded {
        moniker: moniker.to_string(),
        name: name.to_string(),
        budget: REL_SUFFIX_BUDGET,
    })
}

pub(crate) fn reinflect_stem(stem: &str, method: RelationshipMethod, options: &Options) -> (String, bool) {
    match method {
        RelationshipMethod::HasMany => {
            inflect_with_override(stem, options.inflect_plural.as_ref(), to_plural)
        }
        RelationshipMethod::BelongsTo | RelationshipMethod::MightHave => {
            inflect_with_override(stem, options.inflect_singular.as_ref(), to_singular)
        }
    }
}

fn apply_rel_name_map(
    pending: &PendingRelationship,
    candidate: &str,
    options: &Options,
) -> (String, bool) {
    if let Some(rel_name_map) = &options.rel_name_map {
        let ctx = RelNameContext {
            name: candidate.to_string(),
            method: pending.method,
            local_moniker: pending.local_moniker.clone(),
            local_columns: pending.column_map.iter().map(|(l, _)| l.clone()).collect(),
            remote_moniker: pending.remote_moniker.clone(),
            remote_columns: pending.column_map.iter().map(|(_, r)| r.clone()).collect(),
        };
        if let Some(mapped) = rel_name_map.resolve(&ctx)
            && !mapped.is_empty()
        {
            return (mapped, true);
        }
    }
    (candidate.to_string(), false)
}

/// After all edges on `owning_moniker` have produced a candidate name,
/// resolve any remaining duplicates — first via adjective extraction,
/// then via a stable numeric suffix.
pub(crate) fn resolve_duplicates(
    owning_moniker: &str,
    pending: &mut [PendingRelationship],
    options: &Options,
    is_result_class_method: &dyn Fn(&str, &str) -> bool,
    diagnostics: &mut Diagnostics,
) -> Result<(), RelationsError> {
    adjective_pass(owning_moniker, pending, options, is_result_class_method, diagnostics)?;
    numeric_pass(owning_moniker, pending, options, is_result_class_method, diagnostics)
}

fn groups_by_name(pending: &[PendingRelationship]) -> HashMap<String, Vec<usize>> {
    let mut groups: HashMap<String, Vec<usize>> = HashMap::new();
    for (index, candidate) in pending.iter().enumerate() {
        groups.entry(candidate.name.clone()).or_default().push(index);
    }
    groups
}

fn adjective_pass(
    owning_moniker: &str,
    pending: &mut [PendingRelationship],
    options: &Options,
    is_result_class_method: &dyn Fn(&str, &str) -> bool,
    diagnostics: &mut Diagnostics,
) -> Result<(), RelationsError> {
    let groups = groups_by_name(pending);

    for (_, indices) in groups {
        if indices.len() < 2 {
            continue;
        }

        let might_have_targets: HashMap<String, usize> = indices
            .iter()
            .filter(|&&i| pending[i].method == RelationshipMethod::MightHave)
            .fold(HashMap::new(), |mut acc, &i| {
                *acc.entry(pending[i].remote_moniker.clone()).or_insert(0) += 1;
                acc
            });

        for &index in &indices {
            if pending[index].method == RelationshipMethod::BelongsTo {
                continue;
            }

            let tokens: Vec<String> = pending[index]
                .column_map
                .iter()
                .flat_map(|(_, remote_col)| schemawright_naming::split_name(remote_col))
                .collect();
            let mut adjectives = extract_adjectives(&tokens, &pending[index].stem);

            if adjectives.is_empty()
                && pending[index].method == RelationshipMethod::MightHave
                && might_have_targets
                    .get(&pending[index].remote_moniker)
                    .copied()
                    .unwrap_or(0)
                    == 2
            {
                adjectives.push("active".to_string());
            }

            if adjectives.is_empty() {
                continue;
            }

            adjectives.sort();
            let new_stem = format!("{}_{}", adjectives.join("_"), pending[index].stem);
            let (inflected, inflect_mapped) = reinflect_stem(&new_stem, pending[index].method, options);
            let (mapped_name, rel_name_mapped) = apply_rel_name_map(&pending[index], &inflected, options);
            let resolved = resolve_inherited_collision(
                &mapped_name,
                owning_moniker,
                is_result_class_method,
                options,
                diagnostics,
            )?;

            pending[index].stem = new_stem;
            pending[index].name = resolved;
            pending[index].mapped = pending[index].mapped || inflect_mapped || rel_name_mapped;
        }
    }

    Ok(())
}

fn numeric_pass(
    owning_moniker: &str,
    pending: &mut [PendingRelationship],
    options: &Options,
    is_result_class_method: &dyn Fn(&str, &str) -> bool,
    diagnostics: &mut Diagnostics,
) -> Result<(), RelationsError> {
    let groups = groups_by_name(pending);

    for (original_name, mut indices) in groups {
        if indices.len() < 2 {
            continue;
        }

        indices.sort_by_key(|&i| (std::cmp::Reverse(pending[i].method.priority()), pending[i].origin_fk));

        for (position, &index) in indices.iter().enumerate().skip(1) {
            let suffix = position + 1;
            let new_stem = format!("{}_{suffix}", pending[index].stem);
            let (inflected, inflect_mapped) = reinflect_stem(&new_stem, pending[index].method, options);
            let (mapped_name, rel_name_mapped) = apply_rel_name_map(&pending[index], &inflected, options);
            let resolved = resolve_inherited_collision(
                &mapped_name,
                owning_moniker,
                is_result_class_method,
                options,
                diagnostics,
            )?;

            let was_mapped = pending[index].mapped || inflect_mapped || rel_name_mapped;
            if !was_mapped {
                diagnostics.push(Diagnostic::UnmappedNumericDisambiguation {
                    moniker: owning_moniker.to_string(),
                    original: original_name.clone(),
                    resolved: resolved.clone(),
                });
            }

            pending[index].stem = new_stem;
            pending[index].name = resolved;
            pending[index].mapped = was_mapped;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemawright_core::AttrMap;

    fn is_never_reserved(_name: &str, _moniker: &str) -> bool {
        false
    }

    fn pending(name: &str, method: RelationshipMethod, origin_fk: usize, remote_moniker: &str, remote_col: &str) -> PendingRelationship {
        PendingRelationship {
            stem: name.to_string(),
            name: name.to_string(),
            mapped: false,
            method,
            target_source: remote_moniker.to_string(),
            column_map: vec![("id".to_string(), remote_col.to_string())],
            attrs: AttrMap::new(),
            origin_fk,
            local_moniker: "User".to_string(),
            remote_moniker: remote_moniker.to_string(),
        }
    }

    #[test]
    fn inherited_collision_appends_rel_suffix() {
        let options = Options::new();
        let mut diagnostics = Diagnostics::new();
        let resolved = resolve_inherited_collision(
            "new",
            "Book",
            &|name, _| name == "new",
            &options,
            &mut diagnostics,
        )
        .unwrap();
        assert_eq!(resolved, "new_rel");
        assert_eq!(diagnostics.entries().len(), 1);
    }

    #[test]
    fn inherited_collision_uses_collision_map_template() {
        let options = Options {
            rel_collision_map: crate::options::RelCollisionMap::new()
                .with_rule(regex::Regex::new("^new$").unwrap(), "new_{0}"),
            ..Options::new()
        };
        let mut diagnostics = Diagnostics::new();
        let resolved = resolve_inherited_collision(
            "new",
            "Book",
            &|name, _| name == "new",
            &options,
            &mut diagnostics,
        )
        .unwrap();
        assert_eq!(resolved, "new_new");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn inherited_collision_budget_exceeded_is_fatal() {
        let options = Options::new();
        let mut diagnostics = Diagnostics::new();
        let result = resolve_inherited_collision("x", "Book", &|_, _| true, &options, &mut diagnostics);
        assert!(matches!(
            result,
            Err(RelationsError::NameCollisionBudgetExceeded { .. })
        ));
    }

    #[test]
    fn numeric_pass_orders_by_priority_then_catalog_order() {
        let options = Options::new();
        let mut diagnostics = Diagnostics::new();
        let mut items = vec![
            pending("messages", RelationshipMethod::HasMany, 1, "Message", "sender_id"),
            pending("messages", RelationshipMethod::HasMany, 0, "Message", "recipient_id"),
        ];
        numeric_pass("User", &mut items, &options, &is_never_reserved, &mut diagnostics).unwrap();
        assert_eq!(items[0].name, "messages");
        assert_eq!(items[1].name, "messages_2");
        assert_eq!(diagnostics.entries().len(), 1);
    }

    #[test]
    fn adjective_pass_disambiguates_using_remote_column_tokens() {
        let options = Options::new();
        let mut diagnostics = Diagnostics::new();
        let mut items = vec![
            pending("profile", RelationshipMethod::MightHave, 0, "Profile", "primary_user_id"),
            pending("profile", RelationshipMethod::MightHave, 1, "Profile", "secondary_user_id"),
        ];
        adjective_pass("User", &mut items, &options, &is_never_reserved, &mut diagnostics).unwrap();
        assert_eq!(items[0].name, "primary_profile");
        assert_eq!(items[1].name, "secondary_profile");
    }
}
