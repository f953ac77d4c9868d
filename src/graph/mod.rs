//! # Directed Graph Store
//!
//! A mutable weighted directed-graph container and the search routines the
//! arborescence engine runs on top of it.
//!
//! ## Components
//!
//! - **DirectedGraph**: adjacency lists, an edge-length side table, and an
//!   optional income-edge index kept consistent through every mutation
//! - **Vertex**: identity-bearing value; equality and hashing by index only
//! - **GraphSpec**: serde-backed textual description, used by tests to load
//!   fixture graphs
//! - Root selection and cycle search live in `alg` as inherent methods on
//!   `DirectedGraph`

mod alg;
mod format;
mod store;
mod types;

pub use format::{EdgeSpec, GraphSpec, VertexSpec};
pub use store::DirectedGraph;
pub use types::{EdgeRecord, Vertex};
