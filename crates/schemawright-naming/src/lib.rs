//! Identifier splitting, case conversion, and English noun inflection.
//!
//! This crate has no dependencies and no knowledge of catalogs, monikers,
//! relationships, or user overrides. `schemawright-relations` layers
//! override-aware behavior on top of these pure functions.

pub mod case;
pub mod ident;
pub mod inflect;
pub mod relation;

pub use case::{to_camel_case, to_pascal_case, words_to_pascal_case};
pub use ident::{normalize, sanitize, split_name};
pub use inflect::{to_plural, to_singular};
pub use relation::{extract_relation_prefix, strip_ref_column_suffix};
