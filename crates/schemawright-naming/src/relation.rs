//! Relation-name seed extraction.
//!
//! These helpers turn a foreign-key column name into the semantic fragment
//! that should drive a relationship's name: strip a trailing reference-column
//! suffix (case-insensitive), then singularize. `ref_column` is whatever the
//! referenced column is actually called (not always `id`), matching the host
//! catalog's primary key column name.

/// Extract the semantic prefix from an FK column relative to the remote
/// table and its referenced column.
///
/// ```
/// use schemawright_naming::relation::extract_relation_prefix;
/// assert_eq!(extract_relation_prefix("user_id", "user", "id"), "");
/// assert_eq!(extract_relation_prefix("answered_by_user_id", "user", "id"), "answered_by");
/// assert_eq!(extract_relation_prefix("author_id", "user", "id"), "author");
/// ```
pub fn extract_relation_prefix(fk_column: &str, remote_table: &str, ref_column: &str) -> String {
    let ref_suffix = format!("_{ref_column}");
    let without_ref = fk_column
        .strip_suffix(&ref_suffix)
        .unwrap_or(fk_column);

    let remote_lower = remote_table.to_lowercase();
    let without_ref_lower = without_ref.to_lowercase();

    if without_ref_lower == remote_lower {
        return String::new();
    }

    let table_suffix = format!("_{remote_lower}");
    if let Some(prefix_len) = without_ref_lower
        .strip_suffix(&table_suffix)
        .map(str::len)
    {
        return without_ref[..prefix_len].to_string();
    }

    without_ref.to_string()
}

/// Strip a single trailing `_id`-style suffix (case-insensitive) naming the
/// referenced column, falling back to the bare column name if it doesn't
/// have that suffix. This is the single-column "remote relname seed"
/// extraction step.
pub fn strip_ref_column_suffix<'a>(fk_column: &'a str, ref_column: &str) -> &'a str {
    let suffix = format!("_{}", ref_column.to_lowercase());
    let lower = fk_column.to_lowercase();
    if let Some(len) = lower.strip_suffix(suffix.as_str()).map(str::len) {
        &fk_column[..len]
    } else {
        fk_column
    }
}
