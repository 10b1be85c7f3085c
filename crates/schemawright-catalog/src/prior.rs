use std::collections::HashMap;

/// Substitute for "parse a previously emitted class file for a structured
/// marker region": a side-car index mapping `(remote moniker, local column
/// names)` to the relationship name a prior run assigned that edge. The
/// Relationship Inferencer consults this only when disambiguating multiple
/// edges to the same remote table, to preserve a name the user may have
/// hand-edited in a previous generation.
#[derive(Debug, Clone, Default)]
pub struct PriorNamesIndex {
    entries: HashMap<(String, Vec<String>), String>,
}

impl PriorNamesIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        remote_moniker: impl Into<String>,
        local_columns: impl Into<Vec<String>>,
        name: impl Into<String>,
    ) {
        self.entries
            .insert((remote_moniker.into(), local_columns.into()), name.into());
    }

    pub fn lookup(&self, remote_moniker: &str, local_columns: &[String]) -> Option<&str> {
        self.entries
            .get(&(remote_moniker.to_string(), local_columns.to_vec()))
            .map(String::as_str)
    }

    /// Inserts every entry from `other`, overwriting a matching key already
    /// present in `self`.
    pub fn merge(&mut self, other: &PriorNamesIndex) {
        for (key, name) in &other.entries {
            self.entries.insert(key.clone(), name.clone());
        }
    }

    /// Parses a previously emitted class file's recorded relationship names
    /// out of the marker-region format this crate owns: one entry per line,
    /// `remote_moniker|local_col1,local_col2|name`. Blank lines and lines
    /// starting with `#` are ignored; a malformed line is skipped rather
    /// than treated as fatal, since a stale or hand-edited dump shouldn't
    /// block inference.
    pub fn parse_dump(contents: &str) -> Self {
        let mut index = Self::new();
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut fields = line.splitn(3, '|');
            let (Some(moniker), Some(columns), Some(name)) =
                (fields.next(), fields.next(), fields.next())
            else {
                continue;
            };
            let local_columns: Vec<String> = columns.split(',').map(str::to_string).collect();
            index.insert(moniker, local_columns, name);
        }
        index
    }
}

/// RAII rendering of "load a previously generated class into a temporary
/// namespace, inspect it, then unload it — leaving no global state altered
/// on any exit path".
///
/// Nothing in this workspace is true process-global state (the lookup is a
/// plain hash-map read against [`PriorNamesIndex`]), so `Drop` here is a
/// no-op. The type exists so a host that backs this index with something
/// that genuinely needs unloading (a compiled scratch module, a borrowed
/// file handle) has a documented place to hook that cleanup without
/// touching the Inferencer's control flow.
pub struct PriorClassGuard<'a> {
    name: Option<&'a str>,
}

impl<'a> PriorClassGuard<'a> {
    /// Performs the lookup immediately; the result is available for the
    /// guard's lifetime.
    pub fn load(index: &'a PriorNamesIndex, remote_moniker: &str, local_columns: &[String]) -> Self {
        Self {
            name: index.lookup(remote_moniker, local_columns),
        }
    }

    /// The prior name, if an earlier run recorded one for this edge.
    pub fn name(&self) -> Option<&'a str> {
        self.name
    }
}

impl Drop for PriorClassGuard<'_> {
    fn drop(&mut self) {
        // No process-global state to release in this implementation; see
        // the struct doc comment for why this exists anyway.
    }
}
