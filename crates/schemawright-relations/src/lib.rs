//! Monikerizer, Relationship Inferencer, and Name Resolver: the component
//! that turns a [`schemawright_catalog::Catalog`]'s raw tables and foreign
//! keys into a [`schemawright_core::RelationshipPlan`].

pub mod adjective;
pub mod diagnostics;
pub mod error;
pub mod inferencer;
pub mod moniker;
pub mod options;
pub mod resolve;

pub use diagnostics::{Diagnostic, Diagnostics};
pub use error::RelationsError;
pub use inferencer::build_plan;
pub use moniker::{build_sources, monikerize, monikerize_all, monikerize_by_name};
pub use options::{
    Options, Override, RelCollisionMap, RelNameContext, RelNameMap, RelationshipAttrOverrides,
};
