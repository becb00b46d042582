//! Statement model and the per-call graph store

mod statement;
mod store;

pub use statement::{Object, Statement};
pub use store::{GraphStore, TriplePattern};
