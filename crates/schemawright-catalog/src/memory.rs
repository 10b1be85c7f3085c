use std::collections::{HashMap, HashSet};
use std::convert::Infallible;

use schemawright_core::{ForeignKeyDef, TableDef, TableName};

use crate::catalog::Catalog;

/// A builder-populated, in-process [`Catalog`] implementation. Every test in
/// this workspace (and any downstream consumer wiring up a fixture) builds
/// one of these rather than standing up a real database connection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    order: Vec<TableName>,
    tables: HashMap<TableName, TableDef>,
    foreign_keys: HashMap<TableName, Vec<ForeignKeyDef>>,
    reserved_methods: HashSet<String>,
    dump_filenames: HashMap<String, String>,
    dump_contents: HashMap<String, String>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a table, appending it to catalog iteration order. Panics on
    /// a duplicate `raw_name` — fixtures are hand-written, not catalog data.
    pub fn with_table(mut self, table: TableDef) -> Self {
        assert!(
            !self.tables.contains_key(&table.raw_name),
            "duplicate table in fixture catalog: {}",
            table.raw_name
        );
        self.order.push(table.raw_name.clone());
        self.foreign_keys
            .entry(table.raw_name.clone())
            .or_default();
        self.tables.insert(table.raw_name.clone(), table);
        self
    }

    /// Registers an outgoing foreign key for `table.local_table`. The table
    /// must already have been added via [`Self::with_table`].
    pub fn with_foreign_key(mut self, fk: ForeignKeyDef) -> Self {
        self.foreign_keys
            .entry(fk.local_table.clone())
            .or_default()
            .push(fk);
        self
    }

    /// Marks `name` as colliding with an inherited method for every source.
    pub fn with_reserved_method(mut self, name: impl Into<String>) -> Self {
        self.reserved_methods.insert(name.into());
        self
    }

    /// Registers a previously emitted dump filename for `moniker`.
    pub fn with_dump_filename(mut self, moniker: impl Into<String>, path: impl Into<String>) -> Self {
        self.dump_filenames.insert(moniker.into(), path.into());
        self
    }

    /// Registers the raw contents a [`Catalog::read_dump`] call for `path`
    /// should return — the fixture stand-in for "the file's still there".
    pub fn with_dump_contents(mut self, path: impl Into<String>, contents: impl Into<String>) -> Self {
        self.dump_contents.insert(path.into(), contents.into());
        self
    }
}

impl Catalog for InMemoryCatalog {
    type Error = Infallible;

    fn list_tables(&self) -> Result<Vec<TableName>, Self::Error> {
        Ok(self.order.clone())
    }

    fn describe_table(&self, raw_name: &str) -> Result<TableDef, Self::Error> {
        Ok(self
            .tables
            .get(raw_name)
            .unwrap_or_else(|| panic!("fixture catalog has no table named {raw_name}"))
            .clone())
    }

    fn foreign_keys(&self, raw_name: &str) -> Result<Vec<ForeignKeyDef>, Self::Error> {
        Ok(self.foreign_keys.get(raw_name).cloned().unwrap_or_default())
    }

    fn is_result_class_method(&self, name: &str, _moniker: &str) -> bool {
        self.reserved_methods.contains(name)
    }

    fn get_dump_filename(&self, moniker: &str) -> Option<String> {
        self.dump_filenames.get(moniker).cloned()
    }

    fn read_dump(&self, path: &str) -> Option<String> {
        self.dump_contents.get(path).cloned()
    }
}
