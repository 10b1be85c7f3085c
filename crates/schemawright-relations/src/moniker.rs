//! Monikerizer: assigns a unique source name (class name) to each table.

use std::collections::HashSet;

use schemawright_core::{SourceDef, TableDef};
use schemawright_naming::{to_singular, words_to_pascal_case};

use crate::options::{Override, Options};

/// Consults `override_map` for `identifier`; a callback or map entry that
/// resolves to a non-empty string wins (Open Question (iii): empty means
/// "no override"). Falls back to `default` otherwise. Returns whether the
/// result came from an override, so downstream disambiguation can suppress
/// "please supply a name" warnings for already-mapped values.
pub(crate) fn inflect_with_override(
    identifier: &str,
    override_map: Option<&Override<String, String>>,
    default: fn(&str) -> String,
) -> (String, bool) {
    if let Some(over) = override_map
        && let Some(mapped) = over.resolve(&identifier.to_string())
        && !mapped.is_empty()
    {
        return (mapped, true);
    }
    (default(identifier), false)
}

/// The default monikerization rule for one table: split the sanitized name,
/// singularize the final word, CamelCase, and join. Returns whether the
/// result came from a `moniker_map` override.
fn default_moniker(table: &TableDef, options: &Options) -> (String, bool) {
    if let Some(over) = &options.moniker_map
        && let Some(mapped) = over.resolve(&table.raw_name)
        && !mapped.is_empty()
    {
        return (mapped, true);
    }

    let mut words = schemawright_naming::split_name(&table.sanitized_name);
    if let Some(last) = words.last_mut() {
        *last = to_singular(last);
    }
    (words_to_pascal_case(&words), false)
}

/// A table's schema qualifier, if `raw_name` carries one (`schema.table`).
fn schema_qualifier(raw_name: &str) -> Option<&str> {
    raw_name.split_once('.').map(|(schema, _)| schema)
}

/// Assigns a moniker to every table in `tables`, in catalog order,
/// guaranteeing uniqueness across the whole set. Collisions are broken
/// first by appending the table's schema qualifier (if it has one and that
/// qualifier isn't already part of the collision), then by a numeric
/// disambiguator `_2`, `_3`, ... in catalog order.
pub fn monikerize_all(tables: &[TableDef], options: &Options) -> Vec<(String, String)> {
    let mut used = HashSet::new();
    let mut result = Vec::with_capacity(tables.len());

    for table in tables {
        let (candidate, mapped) = default_moniker(table, options);
        let moniker = if mapped || !used.contains(&candidate) {
            candidate
        } else {
            disambiguate(&candidate, table, &used)
        };
        used.insert(moniker.clone());
        result.push((table.raw_name.clone(), moniker));
    }

    result
}

/// Monikerizes every table in `tables` and builds the [`SourceDef`] the rest
/// of the pipeline consumes in place of a raw `TableDef` lookup.
pub fn build_sources(tables: &[TableDef], options: &Options) -> Vec<SourceDef> {
    monikerize_all(tables, options)
        .into_iter()
        .zip(tables)
        .map(|((_, moniker), table)| SourceDef {
            moniker,
            table_ref: table.raw_name.clone(),
            sanitized_name: table.sanitized_name.clone(),
            columns: table.columns.clone(),
            primary_key: table.primary_key.clone(),
            uniques: table.unique_constraints.clone(),
        })
        .collect()
}

fn disambiguate(candidate: &str, table: &TableDef, used: &HashSet<String>) -> String {
    if let Some(schema) = schema_qualifier(&table.raw_name) {
        let qualified = format!(
            "{}{}",
            words_to_pascal_case(&schemawright_naming::split_name(schema)),
            candidate
        );
        if !used.contains(&qualified) {
            return qualified;
        }
    }

    let mut n = 2;
    loop {
        let numbered = format!("{candidate}_{n}");
        if !used.contains(&numbered) {
            return numbered;
        }
        n += 1;
    }
}

/// Exposed for emitter reuse, mirroring `build_plan`'s other entry points:
/// monikerizes a single table's sanitized name without participating in any
/// cross-table uniqueness pass.
pub fn monikerize(table: &TableDef, options: &Options) -> String {
    default_moniker(table, options).0
}

/// `monikerize`'s external-facing form, taking a raw table name rather than
/// a full [`TableDef`] (`monikerize(table_name, options) -> moniker`).
/// Builds a throwaway `TableDef` carrying just the two name fields
/// `default_moniker` reads.
pub fn monikerize_by_name(table_name: &str, options: &Options) -> String {
    let table = TableDef {
        raw_name: table_name.to_string(),
        sanitized_name: schemawright_naming::normalize(table_name, false),
        columns: Vec::new(),
        primary_key: Vec::new(),
        unique_constraints: Vec::new(),
        comment: None,
    };
    monikerize(&table, options)
}
