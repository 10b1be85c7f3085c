//! `schemawright` is a database schema introspection and
//! relationship-inference engine. Given a [`Catalog`], it deterministically
//! produces a [`RelationshipPlan`]: a set of monikerized sources, their
//! columns and keys, and the bidirectional named relationships between
//! them.
//!
//! This crate is a thin facade: the actual work lives in
//! `schemawright-naming` (identifier splitting/case/inflection),
//! `schemawright-core` (the data model), `schemawright-catalog` (the
//! pluggable adapter interface), and `schemawright-relations`
//! (Monikerizer, Relationship Inferencer, Name Resolver). It re-exports
//! the three public entry points plus the types a host needs to call them.

pub use schemawright_catalog::{Catalog, InMemoryCatalog, PriorClassGuard, PriorNamesIndex};
pub use schemawright_core::{
    AttrMap, AttrValue, ColumnDef, ColumnName, ForeignKeyArityError, ForeignKeyDef, IndexName,
    JoinType, Provenance, ReferenceAction, Relationship, RelationshipMethod, RelationshipPlan,
    SourceDef, TableDef, TableName, TableValidationError, UniqueConstraintDef,
};
pub use schemawright_relations::{
    Diagnostic, Diagnostics, Options, Override, RelCollisionMap, RelNameContext, RelNameMap,
    RelationsError, RelationshipAttrOverrides,
};

/// Main entry point: builds a [`RelationshipPlan`] from a catalog and a set
/// of [`Options`], plus the non-fatal [`Diagnostics`] accumulated while
/// naming relationships.
pub fn build_plan<C: Catalog>(
    catalog: &C,
    options: &Options,
) -> Result<(RelationshipPlan, Diagnostics), RelationsError> {
    schemawright_relations::build_plan(catalog, options)
}

/// Assigns a moniker (class/source name) to a single raw table name,
/// applying `options.moniker_map` and the default singularize+CamelCase
/// rule. Exposed for emitter reuse; does not participate in the
/// cross-table uniqueness pass [`build_plan`] runs, since that requires
/// seeing every table in the catalog at once.
pub fn monikerize(table_name: &str, options: &Options) -> String {
    schemawright_relations::monikerize_by_name(table_name, options)
}

/// Pluralizes an identifier using the default English inflection rule —
/// exposed so a downstream emitter can reproduce the name [`build_plan`]
/// would have generated in the absence of an `inflect_plural` override.
pub fn inflect_plural(name: &str) -> String {
    schemawright_naming::to_plural(name)
}

/// Singularizes an identifier using the default English inflection rule.
pub fn inflect_singular(name: &str) -> String {
    schemawright_naming::to_singular(name)
}
