pub mod column;
pub mod foreign_key;
pub mod names;
pub mod plan;
pub mod reference;
pub mod relationship;
pub mod source;
pub mod table;
pub mod unique_constraint;

pub use column::ColumnDef;
pub use foreign_key::{ForeignKeyArityError, ForeignKeyDef};
pub use names::{ColumnName, IndexName, TableName};
pub use plan::RelationshipPlan;
pub use reference::ReferenceAction;
pub use relationship::{AttrMap, AttrValue, JoinType, Provenance, Relationship, RelationshipMethod};
pub use source::SourceDef;
pub use table::{TableDef, TableValidationError};
pub use unique_constraint::UniqueConstraintDef;
