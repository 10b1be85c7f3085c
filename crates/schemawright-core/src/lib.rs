//! Data model for the schema introspection and relationship-inference
//! engine: tables, columns, foreign keys, monikerized sources, and the
//! relationship plan the inference engine produces.

pub mod schema;

pub use schema::{
    AttrMap, AttrValue, ColumnDef, ColumnName, ForeignKeyArityError, ForeignKeyDef, IndexName,
    JoinType, Provenance, ReferenceAction, Relationship, RelationshipMethod, RelationshipPlan,
    SourceDef, TableDef, TableName, TableValidationError, UniqueConstraintDef,
};
