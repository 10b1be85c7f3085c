//! Identifier aliases. Kept as plain `String` rather than newtypes so the
//! data model can be built directly from whatever string type a catalog
//! adapter already has.

pub type TableName = String;
pub type ColumnName = String;
pub type IndexName = String;
