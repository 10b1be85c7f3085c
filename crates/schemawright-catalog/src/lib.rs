//! The Catalog Adapter interface: a narrow, pluggable trait over whatever
//! supplies table/column/foreign-key metadata, plus an in-memory
//! implementation for tests and demos and a side-car index standing in for
//! "inspect a previously emitted class file".

pub mod catalog;
pub mod memory;
pub mod prior;

pub use catalog::Catalog;
pub use memory::InMemoryCatalog;
pub use prior::{PriorClassGuard, PriorNamesIndex};
