//! User-facing configuration: the five override stages (monikerization,
//! plural/singular inflection, relationship naming, collision resolution)
//! plus the attribute and table-filtering knobs from `build_plan`'s
//! external interface.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

use regex::Regex;
use schemawright_core::{AttrMap, RelationshipMethod};

/// A user override consulted before a stage's default rule. Exact-match
/// mappings and callbacks are both supported, for every override stage
/// `build_plan` recognizes.
#[derive(Clone)]
pub enum Override<K, V> {
    Map(HashMap<K, V>),
    Callback(Arc<dyn Fn(&K) -> Option<V> + Send + Sync>),
}

impl<K, V> Override<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    /// Consults the override. A `Map` variant returns `None` on a miss. A
    /// `Callback` variant returning an empty string is treated the same as
    /// returning `None` by callers that compare against `V = String`
    /// (Open Question (iii): empty means "no override").
    pub fn resolve(&self, key: &K) -> Option<V> {
        match self {
            Override::Map(map) => map.get(key).cloned(),
            Override::Callback(callback) => callback(key),
        }
    }
}

impl<K, V> std::fmt::Debug for Override<K, V>
where
    K: std::fmt::Debug,
    V: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Override::Map(map) => f.debug_tuple("Map").field(map).finish(),
            Override::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

/// The full context passed to a `rel_name_map` callback: everything a user
/// override needs to decide a relationship's final name.
#[derive(Debug, Clone)]
pub struct RelNameContext {
    pub name: String,
    pub method: RelationshipMethod,
    pub local_moniker: String,
    pub local_columns: Vec<String>,
    pub remote_moniker: String,
    pub remote_columns: Vec<String>,
}

/// `rel_name_map`: a mapping keyed `moniker -> name -> new`, a flat mapping
/// keyed `name -> new`, or a callback receiving the full [`RelNameContext`].
#[derive(Clone)]
pub enum RelNameMap {
    BySource(HashMap<String, HashMap<String, String>>),
    Flat(HashMap<String, String>),
    Callback(Arc<dyn Fn(&RelNameContext) -> Option<String> + Send + Sync>),
}

impl RelNameMap {
    pub fn resolve(&self, ctx: &RelNameContext) -> Option<String> {
        match self {
            RelNameMap::BySource(by_source) => by_source
                .get(&ctx.local_moniker)
                .and_then(|names| names.get(&ctx.name))
                .cloned(),
            RelNameMap::Flat(flat) => flat.get(&ctx.name).cloned(),
            RelNameMap::Callback(callback) => callback(ctx),
        }
    }
}

impl std::fmt::Debug for RelNameMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RelNameMap::BySource(m) => f.debug_tuple("BySource").field(m).finish(),
            RelNameMap::Flat(m) => f.debug_tuple("Flat").field(m).finish(),
            RelNameMap::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

/// `rel_collision_map`: an ordered list of regex -> `{N}`-style template,
/// tried in insertion order against a colliding candidate name. `{0}` is the
/// whole match, `{1}`, `{2}`, ... are capture groups — Rust has no native
/// `sprintf`, so captures are substituted into the template positionally.
#[derive(Debug, Clone, Default)]
pub struct RelCollisionMap {
    rules: Vec<(Regex, String)>,
}

impl RelCollisionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rule(mut self, pattern: Regex, template: impl Into<String>) -> Self {
        self.rules.push((pattern, template.into()));
        self
    }

    /// Tries each rule in order; the first whose regex matches `name`
    /// produces the substituted template.
    pub fn resolve(&self, name: &str) -> Option<String> {
        for (pattern, template) in &self.rules {
            if let Some(captures) = pattern.captures(name) {
                let mut rendered = template.clone();
                for (index, capture) in captures.iter().enumerate() {
                    let placeholder = format!("{{{index}}}");
                    let value = capture.map(|m| m.as_str()).unwrap_or("");
                    rendered = rendered.replace(&placeholder, value);
                }
                return Some(rendered);
            }
        }
        None
    }
}

/// Per-method attribute override buckets. Defaults merge with `all`, then
/// with the bucket matching the relationship's method, last wins.
#[derive(Debug, Clone, Default)]
pub struct RelationshipAttrOverrides {
    pub all: Option<AttrMap>,
    pub belongs_to: Option<AttrMap>,
    pub has_many: Option<AttrMap>,
    pub might_have: Option<AttrMap>,
}

impl RelationshipAttrOverrides {
    /// Merges `defaults` with `all`, then the bucket for `method`, last wins.
    pub fn merge(&self, method: RelationshipMethod, mut defaults: AttrMap) -> AttrMap {
        if let Some(all) = &self.all {
            defaults.extend(all.clone());
        }
        let bucket = match method {
            RelationshipMethod::BelongsTo => &self.belongs_to,
            RelationshipMethod::HasMany => &self.has_many,
            RelationshipMethod::MightHave => &self.might_have,
        };
        if let Some(bucket) = bucket {
            defaults.extend(bucket.clone());
        }
        defaults
    }
}

/// Every option `build_plan` recognizes.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub moniker_map: Option<Override<String, String>>,
    pub inflect_plural: Option<Override<String, String>>,
    pub inflect_singular: Option<Override<String, String>>,
    pub rel_name_map: Option<RelNameMap>,
    pub rel_collision_map: RelCollisionMap,
    pub relationship_attrs: RelationshipAttrOverrides,
    /// Schema-name filter passed through to the catalog adapter.
    pub db_schema: Option<String>,
    /// Tables whose name does NOT match are ignored.
    pub constraint: Option<Regex>,
    /// Tables whose name matches are ignored, evaluated after `constraint`.
    pub exclude: Option<Regex>,
    /// Relationship names a prior run assigned, consulted by the Inferencer
    /// only when disambiguating multiple edges to the same remote table.
    pub prior_names: schemawright_catalog::PriorNamesIndex,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if `raw_name` should be processed: matches `constraint` (if
    /// set) and does not match `exclude` (if set).
    pub fn table_included(&self, raw_name: &str) -> bool {
        if let Some(constraint) = &self.constraint
            && !constraint.is_match(raw_name)
        {
            return false;
        }
        if let Some(exclude) = &self.exclude
            && exclude.is_match(raw_name)
        {
            return false;
        }
        true
    }
}
