//! Relationship Inferencer: the heart of the engine.
//!
//! Consumes a [`Catalog`]'s foreign keys and emits, for each edge, two
//! [`Relationship`]s — a `BelongsTo` on the local (owning) table and a
//! `HasMany`/`MightHave` on the remote table — naming both sides through
//! the Monikerizer and Name Resolver, then running a final per-source
//! duplicate pass once every edge in the catalog has been seen.

use std::collections::HashMap;

use schemawright_core::{
    AttrMap, AttrValue, ForeignKeyDef, JoinType, Provenance, ReferenceAction, Relationship,
    RelationshipMethod, RelationshipPlan, SourceDef, TableDef,
};
use schemawright_naming::{extract_relation_prefix, normalize, strip_ref_column_suffix};

use crate::diagnostics::Diagnostics;
use crate::error::RelationsError;
use crate::moniker::build_sources;
use crate::options::{Options, RelNameContext};
use crate::resolve::{reinflect_stem, resolve_duplicates, resolve_inherited_collision, PendingRelationship};
use schemawright_catalog::{Catalog, PriorNamesIndex};

/// Main entry point: builds a [`RelationshipPlan`] from a catalog, plus the
/// non-fatal [`Diagnostics`] accumulated along the way.
///
/// Processing order: tables in catalog order (after `constraint`/`exclude`
/// filtering), each table's foreign keys in catalog order. A final
/// duplicate-naming pass runs once per source, in the order that source's
/// moniker was first produced by an edge — this is what gives the result
/// its stability across runs on an identical catalog.
pub fn build_plan<C: Catalog>(
    catalog: &C,
    options: &Options,
) -> Result<(RelationshipPlan, Diagnostics), RelationsError> {
    let mut diagnostics = Diagnostics::new();

    let raw_tables = catalog
        .list_tables()
        .map_err(|e| RelationsError::Catalog(Box::new(e)))?;

    let mut tables: Vec<TableDef> = Vec::new();
    for raw_name in &raw_tables {
        if !options.table_included(raw_name) {
            continue;
        }
        let table = catalog
            .describe_table(raw_name)
            .map_err(|e| RelationsError::Catalog(Box::new(e)))?;
        tables.push(table);
    }

    let sources = build_sources(&tables, options);
    let raw_to_moniker: HashMap<&str, &str> = sources
        .iter()
        .map(|s| (s.table_ref.as_str(), s.moniker.as_str()))
        .collect();
    let raw_to_source: HashMap<&str, &SourceDef> =
        sources.iter().map(|s| (s.table_ref.as_str(), s)).collect();

    // Bridge a remote moniker's previously emitted class file into this
    // run's prior-names index before any disambiguation happens below.
    let mut merged_options = options.clone();
    for source in &sources {
        if let Some(path) = catalog.get_dump_filename(&source.moniker)
            && let Some(contents) = catalog.read_dump(&path)
        {
            merged_options.prior_names.merge(&PriorNamesIndex::parse_dump(&contents));
        }
    }
    let options = &merged_options;

    let is_result_class_method =
        |name: &str, moniker: &str| catalog.is_result_class_method(name, moniker);

    let mut moniker_order: Vec<String> = Vec::new();
    let mut pending: HashMap<String, Vec<PendingRelationship>> = HashMap::new();
    let mut origin_fk: usize = 0;

    for table in &tables {
        let local_moniker = match raw_to_moniker.get(table.raw_name.as_str()) {
            Some(m) => m.to_string(),
            None => continue,
        };

        let edges = catalog
            .foreign_keys(&table.raw_name)
            .map_err(|e| RelationsError::Catalog(Box::new(e)))?;

        let mut included_edges: Vec<&ForeignKeyDef> = Vec::new();
        for edge in &edges {
            edge.validate()?;
            if raw_to_moniker.contains_key(edge.remote_table.as_str()) {
                included_edges.push(edge);
            } else {
                tracing::debug!(
                    local_table = %table.raw_name,
                    remote_table = %edge.remote_table,
                    "skipping foreign key to an excluded/unknown table"
                );
            }
        }

        let mut counters: HashMap<&str, usize> = HashMap::new();
        for edge in &included_edges {
            *counters.entry(edge.remote_table.as_str()).or_default() += 1;
        }

        for edge in included_edges {
            let remote_moniker = raw_to_moniker[edge.remote_table.as_str()].to_string();
            let remote_source = raw_to_source[edge.remote_table.as_str()];

            let remote_method = if table.matches_primary_key(&edge.local_columns)
                || table.matches_unique_constraint(&edge.local_columns)
            {
                RelationshipMethod::MightHave
            } else {
                RelationshipMethod::HasMany
            };

            let is_disambiguated_pair = counters[edge.remote_table.as_str()] > 1;

            let (local_name, local_mapped) =
                belongs_to_seed(edge, remote_source, options);

            let (remote_name, remote_mapped) = remote_side_seed(
                edge,
                table,
                &remote_moniker,
                remote_method,
                is_disambiguated_pair,
                options,
            );

            let local_ctx = RelNameContext {
                name: local_name,
                method: RelationshipMethod::BelongsTo,
                local_moniker: local_moniker.clone(),
                local_columns: edge.local_columns.clone(),
                remote_moniker: remote_moniker.clone(),
                remote_columns: edge.remote_columns.clone(),
            };
            let (local_name, local_name_mapped) = apply_rel_name_map(&local_ctx, options);
            let local_mapped = local_mapped || local_name_mapped;
            let local_name = resolve_inherited_collision(
                &local_name,
                &local_moniker,
                &is_result_class_method,
                options,
                &mut diagnostics,
            )?;

            let remote_ctx = RelNameContext {
                name: remote_name,
                method: remote_method,
                local_moniker: local_moniker.clone(),
                local_columns: edge.local_columns.clone(),
                remote_moniker: remote_moniker.clone(),
                remote_columns: edge.remote_columns.clone(),
            };
            let (remote_name, remote_name_mapped) = apply_rel_name_map(&remote_ctx, options);
            let remote_mapped = remote_mapped || remote_name_mapped;
            let remote_name = resolve_inherited_collision(
                &remote_name,
                &remote_moniker,
                &is_result_class_method,
                options,
                &mut diagnostics,
            )?;

            let local_columns_nullable = edge.local_columns.iter().any(|col| {
                table
                    .columns
                    .iter()
                    .find(|c| &c.name == col)
                    .map(|c| c.nullable)
                    .unwrap_or(false)
            });

            let belongs_to_attrs = belongs_to_attrs(local_columns_nullable, options);
            let remote_attrs = remote_side_attrs(remote_method, options);

            let column_map: Vec<(String, String)> = edge
                .local_columns
                .iter()
                .cloned()
                .zip(edge.remote_columns.iter().cloned())
                .collect();
            let reverse_column_map: Vec<(String, String)> =
                column_map.iter().map(|(l, r)| (r.clone(), l.clone())).collect();

            ensure_moniker(&mut moniker_order, &mut pending, &local_moniker);
            pending.get_mut(&local_moniker).unwrap().push(PendingRelationship {
                stem: local_name.clone(),
                name: local_name,
                mapped: local_mapped,
                method: RelationshipMethod::BelongsTo,
                target_source: remote_moniker.clone(),
                column_map,
                attrs: belongs_to_attrs,
                origin_fk,
                local_moniker: local_moniker.clone(),
                remote_moniker: remote_moniker.clone(),
            });

            ensure_moniker(&mut moniker_order, &mut pending, &remote_moniker);
            pending.get_mut(&remote_moniker).unwrap().push(PendingRelationship {
                stem: remote_name.clone(),
                name: remote_name,
                mapped: remote_mapped,
                method: remote_method,
                target_source: local_moniker.clone(),
                column_map: reverse_column_map,
                attrs: remote_attrs,
                origin_fk,
                local_moniker: local_moniker.clone(),
                remote_moniker,
            });

            origin_fk += 1;
        }
    }

    let mut plan = RelationshipPlan::new();
    for moniker in &moniker_order {
        let members = pending.get_mut(moniker).unwrap();
        resolve_duplicates(moniker, members, options, &is_result_class_method, &mut diagnostics)?;

        for member in members.iter() {
            plan.push(
                moniker,
                Relationship {
                    owning_source: moniker.clone(),
                    method: member.method,
                    name: member.name.clone(),
                    target_source: member.target_source.clone(),
                    column_map: member.column_map.clone(),
                    attrs: member.attrs.clone(),
                    provenance: Provenance {
                        origin_fk: member.origin_fk,
                        local_moniker: member.local_moniker.clone(),
                        remote_moniker: member.remote_moniker.clone(),
                    },
                },
            );
        }
    }

    Ok((plan, diagnostics))
}

fn ensure_moniker(
    order: &mut Vec<String>,
    pending: &mut HashMap<String, Vec<PendingRelationship>>,
    moniker: &str,
) {
    if !pending.contains_key(moniker) {
        order.push(moniker.to_string());
        pending.insert(moniker.to_string(), Vec::new());
    }
}

/// The "remote relname seed" — the name a `BelongsTo` relationship gets on
/// the local (owning) side.
fn belongs_to_seed(edge: &ForeignKeyDef, remote_source: &SourceDef, options: &Options) -> (String, bool) {
    let base = if edge.local_columns.len() == 1 {
        let ref_column = edge.remote_columns.first().map(String::as_str).unwrap_or("id");
        let prefix = extract_relation_prefix(&edge.local_columns[0], &remote_source.sanitized_name, ref_column);
        if prefix.is_empty() {
            remote_source.sanitized_name.clone()
        } else {
            prefix
        }
    } else {
        remote_source.sanitized_name.clone()
    };
    let normalized = normalize(&base, false);
    reinflect_stem(&normalized, RelationshipMethod::BelongsTo, options)
}

/// The "local relname seed" that becomes the name of the `HasMany`/
/// `MightHave` relationship on the remote side, including the
/// per-pair disambiguation-by-column-name step when more than one edge
/// links this local table to the same remote table.
fn remote_side_seed(
    edge: &ForeignKeyDef,
    local_table: &TableDef,
    remote_moniker: &str,
    method: RelationshipMethod,
    is_disambiguated_pair: bool,
    options: &Options,
) -> (String, bool) {
    let base_seed = normalize(&local_table.sanitized_name, false);
    let (inflected_seed, mut mapped) = reinflect_stem(&base_seed, method, options);

    if !is_disambiguated_pair {
        return (inflected_seed, mapped);
    }

    let guard = schemawright_catalog::PriorClassGuard::load(
        &options.prior_names,
        remote_moniker,
        &edge.local_columns,
    );
    if let Some(prior) = guard.name() {
        return (prior.to_string(), true);
    }

    let columns_joined = edge.local_columns.join("_");
    let with_columns = format!("{inflected_seed}_{}", normalize(&columns_joined, false));
    let stripped = strip_ref_column_suffix(&with_columns, "id");
    let (reinflected, reinflect_mapped) = reinflect_stem(stripped, method, options);
    mapped = mapped || reinflect_mapped;
    (reinflected, mapped)
}

fn apply_rel_name_map(ctx: &RelNameContext, options: &Options) -> (String, bool) {
    if let Some(rel_name_map) = &options.rel_name_map
        && let Some(mapped) = rel_name_map.resolve(ctx)
        && !mapped.is_empty()
    {
        return (mapped, true);
    }
    (ctx.name.clone(), false)
}

/// `BelongsTo` default attrs, with `join_type: LEFT` added when any local
/// column is nullable (unless a user override replaces it).
fn belongs_to_attrs(local_columns_nullable: bool, options: &Options) -> AttrMap {
    let mut defaults = AttrMap::new();
    defaults.insert("on_delete".to_string(), AttrValue::Enum(ReferenceAction::Cascade));
    defaults.insert("on_update".to_string(), AttrValue::Enum(ReferenceAction::Cascade));
    defaults.insert("is_deferrable".to_string(), AttrValue::Bool(true));
    if local_columns_nullable {
        defaults.insert("join_type".to_string(), AttrValue::JoinType(JoinType::Left));
    }
    options.relationship_attrs.merge(RelationshipMethod::BelongsTo, defaults)
}

/// `HasMany`/`MightHave` default attrs.
fn remote_side_attrs(method: RelationshipMethod, options: &Options) -> AttrMap {
    let mut defaults = AttrMap::new();
    defaults.insert("cascade_delete".to_string(), AttrValue::Bool(false));
    defaults.insert("cascade_copy".to_string(), AttrValue::Bool(false));
    options.relationship_attrs.merge(method, defaults)
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemawright_core::ColumnDef;
    use schemawright_catalog::InMemoryCatalog;

    fn column(name: &str, nullable: bool) -> ColumnDef {
        ColumnDef {
            name: name.to_string(),
            nullable,
            type_hint: "integer".to_string(),
            default: None,
            comment: None,
        }
    }

    fn table(raw: &str, columns: Vec<ColumnDef>, primary_key: Vec<&str>) -> TableDef {
        TableDef {
            raw_name: raw.to_string(),
            sanitized_name: raw.to_string(),
            columns,
            primary_key: primary_key.into_iter().map(String::from).collect(),
            unique_constraints: Vec::new(),
            comment: None,
        }
    }

    fn fk(local_table: &str, local_columns: &[&str], remote_table: &str, remote_columns: &[&str]) -> ForeignKeyDef {
        ForeignKeyDef {
            local_table: local_table.to_string(),
            local_columns: local_columns.iter().map(|s| s.to_string()).collect(),
            remote_table: remote_table.to_string(),
            remote_columns: remote_columns.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Scenario A: single-column nullable FK.
    #[test]
    fn scenario_a_single_column_nullable_fk() {
        let catalog = InMemoryCatalog::new()
            .with_table(table("author", vec![column("id", false), column("name", false)], vec!["id"]))
            .with_table(table(
                "book",
                vec![column("id", false), column("author_id", true)],
                vec!["id"],
            ))
            .with_foreign_key(fk("book", &["author_id"], "author", &["id"]));

        let (plan, diagnostics) = build_plan(&catalog, &Options::new()).unwrap();
        assert!(diagnostics.is_empty());

        let book_rels = plan.relationships_for("Book");
        assert_eq!(book_rels.len(), 1);
        assert_eq!(book_rels[0].name, "author");
        assert_eq!(book_rels[0].method, RelationshipMethod::BelongsTo);
        assert_eq!(book_rels[0].attrs.get("join_type"), Some(&AttrValue::JoinType(JoinType::Left)));

        let author_rels = plan.relationships_for("Author");
        assert_eq!(author_rels.len(), 1);
        assert_eq!(author_rels[0].name, "books");
        assert_eq!(author_rels[0].method, RelationshipMethod::HasMany);
    }

    /// Scenario B: multi-column primary key, single-column FK.
    #[test]
    fn scenario_b_multi_column_primary_key() {
        let catalog = InMemoryCatalog::new()
            .with_table(table("order", vec![column("id", false)], vec!["id"]))
            .with_table(
                table(
                    "order_line",
                    vec![column("order_id", false), column("line_no", false)],
                    vec!["order_id", "line_no"],
                ),
            )
            .with_foreign_key(fk("order_line", &["order_id"], "order", &["id"]));

        let (plan, _) = build_plan(&catalog, &Options::new()).unwrap();
        assert_eq!(plan.relationships_for("OrderLine")[0].name, "order");
        assert_eq!(plan.relationships_for("Order")[0].name, "order_lines");
        assert_eq!(plan.relationships_for("Order")[0].method, RelationshipMethod::HasMany);
    }

    /// Scenario C: unique-constraint FK, one-to-one.
    #[test]
    fn scenario_c_unique_constraint_is_might_have() {
        let mut profile = table(
            "profile",
            vec![column("id", false), column("user_id", false)],
            vec!["id"],
        );
        profile.unique_constraints.push(schemawright_core::UniqueConstraintDef {
            name: Some("uq_profile_user".to_string()),
            columns: vec!["user_id".to_string()],
        });

        let catalog = InMemoryCatalog::new()
            .with_table(table("user", vec![column("id", false)], vec!["id"]))
            .with_table(profile)
            .with_foreign_key(fk("profile", &["user_id"], "user", &["id"]));

        let (plan, _) = build_plan(&catalog, &Options::new()).unwrap();
        assert_eq!(plan.relationships_for("Profile")[0].name, "user");
        assert_eq!(plan.relationships_for("Profile")[0].method, RelationshipMethod::BelongsTo);

        let user_rels = plan.relationships_for("User");
        assert_eq!(user_rels.len(), 1);
        assert_eq!(user_rels[0].name, "profile");
        assert_eq!(user_rels[0].method, RelationshipMethod::MightHave);
    }

    /// Scenario D: two FKs between the same pair of tables.
    #[test]
    fn scenario_d_disambiguates_by_column_name() {
        let catalog = InMemoryCatalog::new()
            .with_table(table("user", vec![column("id", false)], vec!["id"]))
            .with_table(
                table(
                    "message",
                    vec![column("id", false), column("sender_id", false), column("recipient_id", false)],
                    vec!["id"],
                ),
            )
            .with_foreign_key(fk("message", &["sender_id"], "user", &["id"]))
            .with_foreign_key(fk("message", &["recipient_id"], "user", &["id"]));

        let (plan, _) = build_plan(&catalog, &Options::new()).unwrap();

        let message_rels = plan.relationships_for("Message");
        let message_names: Vec<&str> = message_rels.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(message_names, vec!["sender", "recipient"]);

        let user_rels = plan.relationships_for("User");
        let user_names: Vec<&str> = user_rels.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(user_names, vec!["messages_senders", "messages_recipients"]);
    }

    /// Scenario E: collision with inherited method, default `_rel` suffix.
    #[test]
    fn scenario_e_inherited_method_collision() {
        let catalog = InMemoryCatalog::new()
            .with_table(table("new", vec![column("id", false)], vec!["id"]))
            .with_table(table("book", vec![column("id", false), column("new_id", false)], vec!["id"]))
            .with_foreign_key(fk("book", &["new_id"], "new", &["id"]))
            .with_reserved_method("new");

        let (plan, diagnostics) = build_plan(&catalog, &Options::new()).unwrap();
        assert_eq!(plan.relationships_for("Book")[0].name, "new_rel");
        assert_eq!(diagnostics.entries().len(), 1);
    }

    /// Scenario F: `rel_name_map` override on one side only.
    #[test]
    fn scenario_f_rel_name_map_overrides_one_side() {
        use crate::options::RelNameMap;
        use std::collections::HashMap;

        let catalog = InMemoryCatalog::new()
            .with_table(table("author", vec![column("id", false)], vec!["id"]))
            .with_table(table("book", vec![column("id", false), column("author_id", true)], vec!["id"]))
            .with_foreign_key(fk("book", &["author_id"], "author", &["id"]));

        let mut by_source = HashMap::new();
        let mut book_map = HashMap::new();
        book_map.insert("author".to_string(), "written_by".to_string());
        by_source.insert("Book".to_string(), book_map);

        let options = Options {
            rel_name_map: Some(RelNameMap::BySource(by_source)),
            ..Options::new()
        };

        let (plan, _) = build_plan(&catalog, &options).unwrap();
        assert_eq!(plan.relationships_for("Book")[0].name, "written_by");
        assert_eq!(plan.relationships_for("Author")[0].name, "books");
    }

    #[test]
    fn fatal_arity_mismatch_aborts() {
        let catalog = InMemoryCatalog::new()
            .with_table(table("author", vec![column("id", false)], vec!["id"]))
            .with_table(
                table(
                    "book",
                    vec![column("id", false), column("author_id", false), column("author_rev", false)],
                    vec!["id"],
                ),
            )
            .with_foreign_key(fk("book", &["author_id", "author_rev"], "author", &["id"]));

        let result = build_plan(&catalog, &Options::new());
        assert!(matches!(result, Err(RelationsError::SchemaMismatch { .. })));
    }

    #[test]
    fn excluded_remote_table_drops_the_edge_without_error() {
        let options = Options {
            constraint: Some(regex::Regex::new("^(author|book)$").unwrap()),
            ..Options::new()
        };
        let catalog = InMemoryCatalog::new()
            .with_table(table("author", vec![column("id", false)], vec!["id"]))
            .with_table(table("book", vec![column("id", false), column("author_id", true)], vec!["id"]))
            .with_table(table("ignored", vec![column("id", false)], vec!["id"]))
            .with_foreign_key(fk("book", &["author_id"], "ignored", &["id"]));

        let (plan, _) = build_plan(&catalog, &options).unwrap();
        assert!(plan.relationships_for("Book").is_empty());
    }

    /// A previously emitted class file for the remote moniker, surfaced via
    /// `Catalog::get_dump_filename`/`read_dump`, is consulted when
    /// disambiguating multiple edges to the same remote table, overriding
    /// the default column-name-based disambiguation for that edge only.
    #[test]
    fn reuses_a_prior_run_name_recorded_in_the_catalogs_dump() {
        let catalog = InMemoryCatalog::new()
            .with_table(table("user", vec![column("id", false)], vec!["id"]))
            .with_table(
                table(
                    "message",
                    vec![column("id", false), column("sender_id", false), column("recipient_id", false)],
                    vec!["id"],
                ),
            )
            .with_foreign_key(fk("message", &["sender_id"], "user", &["id"]))
            .with_foreign_key(fk("message", &["recipient_id"], "user", &["id"]))
            .with_dump_filename("User", "dumps/user.rs")
            .with_dump_contents("dumps/user.rs", "User|sender_id|legacy_senders\n");

        let (plan, _) = build_plan(&catalog, &Options::new()).unwrap();

        let user_rels = plan.relationships_for("User");
        let user_names: Vec<&str> = user_rels.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(user_names, vec!["legacy_senders", "messages_recipients"]);
    }

    #[test]
    fn determinism_across_runs() {
        let catalog = InMemoryCatalog::new()
            .with_table(table("user", vec![column("id", false)], vec!["id"]))
            .with_table(
                table(
                    "message",
                    vec![column("id", false), column("sender_id", false), column("recipient_id", false)],
                    vec!["id"],
                ),
            )
            .with_foreign_key(fk("message", &["sender_id"], "user", &["id"]))
            .with_foreign_key(fk("message", &["recipient_id"], "user", &["id"]));

        let (first, _) = build_plan(&catalog, &Options::new()).unwrap();
        let (second, _) = build_plan(&catalog, &Options::new()).unwrap();
        assert_eq!(first, second);
    }
}
