use schemawright_core::{ForeignKeyDef, TableDef, TableName};

/// The narrow interface the inference engine requires from a live database
/// connection or a pre-captured catalog dump. This is the sole point where
/// database flavor matters; everything downstream of it assumes normalized
/// catalog records.
///
/// A real implementation wraps an actual driver; [`crate::memory::InMemoryCatalog`]
/// is the in-process stand-in used by every test in this workspace.
pub trait Catalog {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Raw table names, in whatever order the adapter's backing store
    /// iterates them. The Relationship Inferencer preserves this order in
    /// `RelationshipPlan::sources` and uses it as the tie-break for
    /// duplicate-name disambiguation.
    fn list_tables(&self) -> Result<Vec<TableName>, Self::Error>;

    /// Columns, primary key, unique constraints, and comments for one table.
    fn describe_table(&self, raw_name: &str) -> Result<TableDef, Self::Error>;

    /// Outgoing foreign keys for one table, in catalog order.
    fn foreign_keys(&self, raw_name: &str) -> Result<Vec<ForeignKeyDef>, Self::Error>;

    /// True if `name` would collide with a base/inherited method on the
    /// class generated for `moniker` — the host supplies this because only
    /// it knows the target language's runtime base class.
    fn is_result_class_method(&self, name: &str, moniker: &str) -> bool;

    /// An opaque token identifying a previously emitted class file for
    /// `moniker`, if one exists. The Relationship Inferencer hands this to
    /// [`Self::read_dump`] rather than reading a file itself.
    fn get_dump_filename(&self, moniker: &str) -> Option<String>;

    /// The raw contents behind a token [`Self::get_dump_filename`] returned,
    /// if the adapter can still produce them — a real adapter reads the file
    /// at that path; a fixture catalog returns whatever it was seeded with.
    /// The default answers `None`, meaning no reuse-on-rerun data is
    /// available; [`build_plan`](crate) proceeds exactly as if no dump
    /// existed for this moniker.
    fn read_dump(&self, _path: &str) -> Option<String> {
        None
    }
}
