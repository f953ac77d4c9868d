//! # Arborescence - Minimum Spanning Arborescences of Directed Graphs
//!
//! This crate computes a minimum-weight arborescence - a directed spanning
//! tree in which every non-root vertex has exactly one incoming edge and is
//! reachable from a distinguished root - of a weighted directed graph, by
//! cycle contraction and expansion (Edmonds' algorithm family).
//!
//! ## Main Components
//!
//! - **Graph**: a mutable directed-graph store with adjacency lists, an
//!   edge-length side table, and an optional income-edge index
//! - **Engine**: the contraction/expansion orchestrator producing the
//!   arborescence and its cost
//! - **Error**: the fatal usage-error taxonomy (missing endpoints, empty
//!   graphs, tracking disabled)
//!
//! ## Usage
//!
//! ```
//! use arborescence::engine::ArborescenceEngine;
//! use arborescence::graph::{DirectedGraph, Vertex};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Build a graph with income-edge tracking enabled (the engine requires
//! // it and does not enable it on your behalf).
//! let mut graph = DirectedGraph::with_income_tracking();
//! for index in 0..4 {
//!     graph.add_vertex(Vertex::new(index));
//! }
//! graph.add_edge_with_length(0, 1, 1.0)?;
//! graph.add_edge_with_length(0, 2, 10.0)?;
//! graph.add_edge_with_length(1, 2, 1.0)?;
//! graph.add_edge_with_length(2, 1, 1.0)?;
//! graph.add_edge_with_length(1, 3, 2.0)?;
//! graph.add_edge_with_length(2, 3, 3.0)?;
//!
//! let result = ArborescenceEngine::new().find_arborescence(&graph)?;
//!
//! assert_eq!(result.minimum_cost, 4.0);
//! assert_eq!(result.contractions, 0);
//! assert!(result.is_arborescence_of(&graph));
//!
//! // The caller's graph is never mutated; the engine works on a clone.
//! assert_eq!(graph.edge_count(), 6);
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Loading a Graph from a Textual Description
//!
//! ```
//! use arborescence::engine::ArborescenceEngine;
//! use arborescence::graph::GraphSpec;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let description = r#"{
//!     "vertices": [{ "index": 0 }, { "index": 1 }, { "index": 2 }],
//!     "edges": [
//!         { "from": 0, "to": 1, "length": 1.0 },
//!         { "from": 1, "to": 2, "length": 2.0 },
//!         { "from": 0, "to": 2, "length": 4.0 }
//!     ],
//!     "track_income_edges": true
//! }"#;
//!
//! let graph = GraphSpec::from_json(description)?.into_graph()?;
//! let result = ArborescenceEngine::new().find_arborescence(&graph)?;
//!
//! assert_eq!(result.minimum_cost, 3.0);
//! # Ok(())
//! # }
//! ```
//!
//! Limitations inherited from the underlying design: root selection is a
//! minimum-in-degree heuristic rather than a true-root check, and a graph
//! from which some vertex is unreachable from the chosen root is not
//! rejected - the anomaly is logged and
//! [`engine::Arborescence::is_arborescence_of`] reports the defect.

pub mod engine;
pub mod error;
pub mod graph;

pub use engine::{Arborescence, ArborescenceEngine};
pub use error::ArborescenceError;
pub use graph::{DirectedGraph, Vertex};
