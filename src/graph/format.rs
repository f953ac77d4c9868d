//! Textual graph description format
//!
//! A serde-backed description of a weighted directed graph, used by tests to
//! load fixture graphs and to regenerate fixtures from programmatically
//! built ones. The engine itself never touches this module.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::ArborescenceError;
use crate::graph::store::DirectedGraph;
use crate::graph::types::Vertex;

/// Serializable description of a [`DirectedGraph`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphSpec {
    #[serde(default)]
    pub vertices: Vec<VertexSpec>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
    #[serde(default)]
    pub track_income_edges: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VertexSpec {
    pub index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: usize,
    pub to: usize,
    #[serde(default)]
    pub length: f64,
}

impl GraphSpec {
    pub fn from_json(input: &str) -> Result<Self, ArborescenceError> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn to_json(&self) -> Result<String, ArborescenceError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Materialize the description into a graph.
    ///
    /// Vertex indices must be unique; every edge endpoint must name a
    /// declared vertex.
    pub fn into_graph(self) -> Result<DirectedGraph, ArborescenceError> {
        let mut graph = if self.track_income_edges {
            DirectedGraph::with_income_tracking()
        } else {
            DirectedGraph::new()
        };

        let mut seen = BTreeSet::new();
        for vertex_spec in self.vertices {
            if !seen.insert(vertex_spec.index) {
                return Err(ArborescenceError::DuplicateVertexIndex {
                    index: vertex_spec.index,
                });
            }
            let mut vertex = Vertex::new(vertex_spec.index);
            if let Some(label) = vertex_spec.label {
                vertex = vertex.with_label(label);
            }
            if let Some(weight) = vertex_spec.weight {
                vertex = vertex.with_weight(weight);
            }
            graph.add_vertex(vertex);
        }

        for edge_spec in self.edges {
            graph.add_edge_with_length(edge_spec.from, edge_spec.to, edge_spec.length)?;
        }
        Ok(graph)
    }

    /// Describe an existing graph
    pub fn from_graph(graph: &DirectedGraph) -> Self {
        Self {
            vertices: graph
                .vertices()
                .map(|vertex| VertexSpec {
                    index: vertex.index(),
                    label: vertex.label().map(str::to_string),
                    weight: vertex.weight(),
                })
                .collect(),
            edges: graph
                .edges()
                .map(|(from, to, length)| EdgeSpec { from, to, length })
                .collect(),
            track_income_edges: graph.tracks_income_edges(),
        }
    }
}
