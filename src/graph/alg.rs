//! Root selection and cycle search over a [`DirectedGraph`]
//!
//! Cycle search runs on Tarjan's Strongly Connected Components algorithm:
//! the store is projected into a petgraph `DiGraph`, multi-vertex SCCs are
//! the cycles, and members are ordered by walking out-edges inside the
//! component. O(V + E) per invocation.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use petgraph::algo::tarjan_scc;
use petgraph::graph::DiGraph;

use crate::error::ArborescenceError;
use crate::graph::store::DirectedGraph;

impl DirectedGraph {
    /// Pick a root candidate: the vertex of minimum in-degree among vertices
    /// with nonzero total degree, lowest index winning ties.
    ///
    /// This is a heuristic proxy for "the" root - it is not guaranteed to
    /// return a vertex with in-degree 0. When every vertex is isolated the
    /// lowest-index vertex is returned; an empty graph is a fatal usage
    /// error.
    pub fn find_root(&self) -> Result<usize, ArborescenceError> {
        let mut best: Option<(usize, usize)> = None;
        for index in self.vertex_indices() {
            let in_degree = self.in_degree(index);
            if in_degree + self.out_neighbors(index).len() == 0 {
                continue;
            }
            match best {
                Some((best_degree, _)) if in_degree >= best_degree => {}
                _ => best = Some((in_degree, index)),
            }
        }

        match best {
            Some((_, index)) => Ok(index),
            // Every vertex is isolated; fall back to the lowest index
            None => self
                .vertex_indices()
                .next()
                .ok_or(ArborescenceError::EmptyGraph),
        }
    }

    /// Search for a directed cycle.
    ///
    /// Returns the cycle's members ordered along its edges, or an empty
    /// vector when the graph is acyclic. When several cycles exist the one
    /// containing the lowest vertex index is reported, so repeated calls on
    /// the same graph are deterministic. A self-loop is reported as a
    /// single-member cycle.
    pub fn search_cycle(&self) -> Vec<usize> {
        let projection = self.to_petgraph();

        let mut candidate: Option<BTreeSet<usize>> = None;
        for scc in tarjan_scc(&projection) {
            if scc.len() < 2 {
                continue;
            }
            let members: BTreeSet<usize> = scc.iter().map(|&node| projection[node]).collect();
            match &candidate {
                Some(existing) if members.first() >= existing.first() => {}
                _ => candidate = Some(members),
            }
        }

        let Some(members) = candidate else {
            // Tarjan reports a self-loop as a single-vertex component
            return self
                .vertex_indices()
                .find(|&index| self.out_neighbors(index).contains(&index))
                .map(|index| vec![index])
                .unwrap_or_default();
        };

        self.order_cycle_members(&members)
    }

    /// Walk out-edges inside a strongly connected component until a vertex
    /// repeats; the walked stretch between the two visits is the cycle.
    fn order_cycle_members(&self, members: &BTreeSet<usize>) -> Vec<usize> {
        let Some(&start) = members.first() else {
            return Vec::new();
        };

        let mut path = vec![start];
        let mut positions = BTreeMap::from([(start, 0usize)]);
        let mut current = start;
        loop {
            let next = self
                .out_neighbors(current)
                .iter()
                .copied()
                .filter(|n| members.contains(n))
                .min();
            let Some(next) = next else {
                // Cannot happen for a genuine SCC; bail out rather than spin
                return path;
            };
            if let Some(&position) = positions.get(&next) {
                return path[position..].to_vec();
            }
            positions.insert(next, path.len());
            path.push(next);
            current = next;
        }
    }

    /// Project the store into a petgraph `DiGraph` whose node weights are
    /// the vertex indices and whose edge weights are the edge lengths.
    pub fn to_petgraph(&self) -> DiGraph<usize, f64> {
        let mut projection = DiGraph::new();
        let mut nodes = BTreeMap::new();
        for index in self.vertex_indices() {
            nodes.insert(index, projection.add_node(index));
        }
        for (source, destination, length) in self.edges() {
            projection.add_edge(nodes[&source], nodes[&destination], length);
        }
        projection
    }
}

#[cfg(test)]
mod tests {
    use petgraph::algo::is_cyclic_directed;

    use super::*;
    use crate::graph::types::Vertex;

    fn graph_with(edges: &[(usize, usize)]) -> DirectedGraph {
        let mut graph = DirectedGraph::with_income_tracking();
        for &(source, destination) in edges {
            graph.add_vertex(Vertex::new(source));
            graph.add_vertex(Vertex::new(destination));
        }
        for &(source, destination) in edges {
            graph.add_edge(source, destination).unwrap();
        }
        graph
    }

    #[test]
    fn test_find_root_prefers_minimum_in_degree() {
        // 0 feeds everything, 2 additionally feeds 1
        let graph = graph_with(&[(0, 1), (0, 2), (2, 1)]);
        assert_eq!(graph.find_root().unwrap(), 0);
    }

    #[test]
    fn test_find_root_ties_break_to_lowest_index() {
        // Both 0 and 1 have in-degree 0
        let graph = graph_with(&[(0, 2), (1, 2)]);
        assert_eq!(graph.find_root().unwrap(), 0);
    }

    #[test]
    fn test_find_root_skips_isolated_vertices() {
        let mut graph = graph_with(&[(5, 6)]);
        graph.add_vertex(Vertex::new(0));

        // Vertex 0 has zero total degree and must not be chosen
        assert_eq!(graph.find_root().unwrap(), 5);
    }

    #[test]
    fn test_find_root_all_isolated_falls_back_to_lowest() {
        let mut graph = DirectedGraph::new();
        graph.add_vertex(Vertex::new(4));
        graph.add_vertex(Vertex::new(2));
        assert_eq!(graph.find_root().unwrap(), 2);
    }

    #[test]
    fn test_find_root_empty_graph_fails() {
        let graph = DirectedGraph::new();
        match graph.find_root() {
            Err(ArborescenceError::EmptyGraph) => {}
            other => panic!("Expected EmptyGraph, got {other:?}"),
        }
    }

    #[test]
    fn test_search_cycle_acyclic_graph_is_empty() {
        let graph = graph_with(&[(0, 1), (1, 2), (0, 2)]);
        assert!(graph.search_cycle().is_empty());
    }

    #[test]
    fn test_search_cycle_two_vertex_cycle() {
        let graph = graph_with(&[(0, 1), (1, 0)]);
        assert_eq!(graph.search_cycle(), vec![0, 1]);
    }

    #[test]
    fn test_search_cycle_follows_edge_order() {
        // 1 -> 3 -> 2 -> 1, reached from 0
        let graph = graph_with(&[(0, 1), (1, 3), (3, 2), (2, 1)]);
        assert_eq!(graph.search_cycle(), vec![1, 3, 2]);
    }

    #[test]
    fn test_search_cycle_prefers_lowest_index_component() {
        // Two disjoint cycles; the one containing vertex 0 wins
        let graph = graph_with(&[(5, 6), (6, 5), (0, 1), (1, 0)]);
        assert_eq!(graph.search_cycle(), vec![0, 1]);
    }

    #[test]
    fn test_search_cycle_reports_self_loop() {
        let graph = graph_with(&[(0, 1), (1, 1)]);
        assert_eq!(graph.search_cycle(), vec![1]);
    }

    #[test]
    fn test_to_petgraph_preserves_structure() {
        let mut graph = graph_with(&[(0, 1), (1, 2), (2, 0)]);
        graph.set_edge_length(0, 1, 2.5);

        let projection = graph.to_petgraph();
        assert_eq!(projection.node_count(), 3);
        assert_eq!(projection.edge_count(), 3);
        assert!(is_cyclic_directed(&projection));

        let lengths: Vec<f64> = projection.edge_weights().copied().collect();
        assert!(lengths.contains(&2.5));
    }
}
