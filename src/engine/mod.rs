//! # Contraction/Expansion Engine
//!
//! This module implements the minimum spanning arborescence computation
//! (Edmonds' algorithm family) over a [`crate::graph::DirectedGraph`].
//!
//! ## Algorithm
//!
//! Phase A repeatedly picks the minimum-weight incoming edge for every
//! non-root vertex of a working copy of the input. When those locally-greedy
//! choices form a cycle, the cycle is contracted into a synthetic vertex -
//! boundary edges are redirected through it at their minimum observed
//! length, and every deleted edge is logged - and the round repeats on the
//! shrunken graph. Phase B then replays the contractions in reverse,
//! replacing each synthetic vertex with its original cycle and re-deriving
//! real edges from the log.
//!
//! ## Key Components
//!
//! - **ArborescenceEngine**: the orchestrator; one call per computation
//! - **Arborescence**: the resulting tree, its cost, and contraction count
//!
//! ## Example
//!
//! ```
//! use arborescence::engine::ArborescenceEngine;
//! use arborescence::graph::{DirectedGraph, Vertex};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut graph = DirectedGraph::with_income_tracking();
//! for index in 0..3 {
//!     graph.add_vertex(Vertex::new(index));
//! }
//! graph.add_edge_with_length(0, 1, 1.0)?;
//! graph.add_edge_with_length(1, 2, 2.0)?;
//! graph.add_edge_with_length(0, 2, 5.0)?;
//!
//! let result = ArborescenceEngine::new().find_arborescence(&graph)?;
//!
//! assert_eq!(result.minimum_cost, 3.0);
//! assert!(result.is_arborescence_of(&graph));
//! # Ok(())
//! # }
//! ```

mod engine_impl;

pub use engine_impl::*;
