use std::collections::BTreeMap;

use crate::error::ArborescenceError;
use crate::graph::types::Vertex;

/// A mutable weighted directed graph.
///
/// Adjacency is recorded as an ordered out-neighbor list per source vertex;
/// edge lengths live in a side table keyed by the ordered `(source,
/// destination)` pair. Edge existence is determined solely by adjacency
/// membership - a missing length entry reads as `0.0`, which is
/// indistinguishable from a true zero-length edge.
///
/// An optional income-edge index (vertex to in-neighbors) can be enabled with
/// [`DirectedGraph::with_income_tracking`] or rebuilt later with
/// [`DirectedGraph::fill_income_edges`]. Once enabled, every mutation path
/// keeps it consistent with the adjacency lists.
///
/// All internal maps are `BTreeMap`s keyed by vertex index, so iteration
/// order is deterministic: lowest index first.
#[derive(Debug, Clone, Default)]
pub struct DirectedGraph {
    vertices: BTreeMap<usize, Vertex>,
    adjacency: BTreeMap<usize, Vec<usize>>,
    edge_lengths: BTreeMap<(usize, usize), f64>,
    income_edges: Option<BTreeMap<usize, Vec<usize>>>,
}

impl DirectedGraph {
    /// Create an empty graph without income-edge tracking
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with income-edge tracking enabled
    pub fn with_income_tracking() -> Self {
        Self {
            income_edges: Some(BTreeMap::new()),
            ..Self::default()
        }
    }

    /// Whether the income-edge index is currently maintained
    pub fn tracks_income_edges(&self) -> bool {
        self.income_edges.is_some()
    }

    /// Insert a vertex. No-op if a vertex with the same index is already
    /// present (the existing payload wins).
    pub fn add_vertex(&mut self, vertex: Vertex) {
        let index = vertex.index();
        self.vertices.entry(index).or_insert(vertex);
        self.adjacency.entry(index).or_default();
        if let Some(income) = self.income_edges.as_mut() {
            income.entry(index).or_default();
        }
    }

    /// Add a directed edge from `source` to `destination`.
    ///
    /// Both endpoints must already be present; connecting a missing vertex is
    /// a fatal usage error. Parallel edges are permitted - the destination is
    /// appended to the out-neighbor list unconditionally.
    pub fn add_edge(&mut self, source: usize, destination: usize) -> Result<(), ArborescenceError> {
        if !self.vertices.contains_key(&source) {
            return Err(ArborescenceError::MissingVertex { index: source });
        }
        if !self.vertices.contains_key(&destination) {
            return Err(ArborescenceError::MissingVertex { index: destination });
        }

        self.adjacency.entry(source).or_default().push(destination);
        if let Some(income) = self.income_edges.as_mut() {
            income.entry(destination).or_default().push(source);
        }
        Ok(())
    }

    /// [`DirectedGraph::add_edge`] plus [`DirectedGraph::set_edge_length`]
    pub fn add_edge_with_length(
        &mut self,
        source: usize,
        destination: usize,
        length: f64,
    ) -> Result<(), ArborescenceError> {
        self.add_edge(source, destination)?;
        self.set_edge_length(source, destination, length);
        Ok(())
    }

    /// Direct write access to the edge-length side table
    pub fn set_edge_length(&mut self, source: usize, destination: usize, length: f64) {
        self.edge_lengths.insert((source, destination), length);
    }

    /// Length of the edge `(source, destination)`, or `0.0` when the pair is
    /// absent from the side table. Callers must not conflate "edge of length
    /// 0" with "no edge"; use [`DirectedGraph::has_edge`] for existence.
    pub fn edge_length(&self, source: usize, destination: usize) -> f64 {
        self.edge_lengths
            .get(&(source, destination))
            .copied()
            .unwrap_or(0.0)
    }

    /// Remove every edge from `source` to `destination`, along with its
    /// length entry and income-index entries.
    pub fn remove_edge(&mut self, source: usize, destination: usize) {
        if let Some(neighbors) = self.adjacency.get_mut(&source) {
            neighbors.retain(|&n| n != destination);
        }
        self.edge_lengths.remove(&(source, destination));
        if let Some(income) = self.income_edges.as_mut()
            && let Some(sources) = income.get_mut(&destination)
        {
            sources.retain(|&s| s != source);
        }
    }

    /// Remove a vertex and every reference to it.
    ///
    /// The vertex disappears from the membership set, from every other
    /// vertex's adjacency list, from the edge-length table, and from the
    /// income-edge index. A dangling reference after this call is a
    /// correctness bug.
    pub fn remove_vertex(&mut self, index: usize) {
        self.vertices.remove(&index);
        self.adjacency.remove(&index);
        for neighbors in self.adjacency.values_mut() {
            neighbors.retain(|&n| n != index);
        }
        self.edge_lengths
            .retain(|&(source, destination), _| source != index && destination != index);
        if let Some(income) = self.income_edges.as_mut() {
            income.remove(&index);
            for sources in income.values_mut() {
                sources.retain(|&s| s != index);
            }
        }
    }

    /// Rebuild the income-edge index from scratch by scanning all adjacency
    /// lists.
    ///
    /// With `enable_tracking` set, tracking is switched on for graphs built
    /// without it. Without the flag, the index is rebuilt only when tracking
    /// is already enabled; otherwise the call is a no-op.
    pub fn fill_income_edges(&mut self, enable_tracking: bool) {
        if !enable_tracking && self.income_edges.is_none() {
            return;
        }

        let mut income: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        for &index in self.vertices.keys() {
            income.insert(index, Vec::new());
        }
        for (&source, neighbors) in &self.adjacency {
            for &destination in neighbors {
                income.entry(destination).or_default().push(source);
            }
        }
        self.income_edges = Some(income);
    }

    /// Drop every edge, length entry, and income list while preserving the
    /// vertex set.
    pub fn clear_edges(&mut self) {
        for neighbors in self.adjacency.values_mut() {
            neighbors.clear();
        }
        self.edge_lengths.clear();
        if let Some(income) = self.income_edges.as_mut() {
            for sources in income.values_mut() {
                sources.clear();
            }
        }
    }

    /// Produce a new graph with every edge reversed.
    ///
    /// The vertex set is copied; edge lengths are direction-dependent
    /// metadata and are deliberately dropped. Income tracking carries over
    /// and the index is rebuilt for the reversed edges.
    pub fn transpose(&self) -> Self {
        let mut adjacency: BTreeMap<usize, Vec<usize>> = self
            .vertices
            .keys()
            .map(|&index| (index, Vec::new()))
            .collect();
        for (&source, neighbors) in &self.adjacency {
            for &destination in neighbors {
                adjacency.entry(destination).or_default().push(source);
            }
        }

        let mut reversed = Self {
            vertices: self.vertices.clone(),
            adjacency,
            edge_lengths: BTreeMap::new(),
            income_edges: None,
        };
        if self.tracks_income_edges() {
            reversed.fill_income_edges(true);
        }
        reversed
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn contains_vertex(&self, index: usize) -> bool {
        self.vertices.contains_key(&index)
    }

    pub fn vertex(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(&index)
    }

    /// Vertices in ascending index order
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    /// Vertex indices in ascending order
    pub fn vertex_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.vertices.keys().copied()
    }

    /// Out-neighbors of `source` in insertion order (empty for an unknown
    /// vertex)
    pub fn out_neighbors(&self, source: usize) -> &[usize] {
        self.adjacency
            .get(&source)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// In-neighbors of `destination` (empty when tracking is disabled or the
    /// vertex is unknown)
    pub fn income_edges(&self, destination: usize) -> &[usize] {
        self.income_edges
            .as_ref()
            .and_then(|income| income.get(&destination))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn has_edge(&self, source: usize, destination: usize) -> bool {
        self.out_neighbors(source).contains(&destination)
    }

    /// Number of edges pointing into `destination`; scans the adjacency
    /// lists when income tracking is disabled.
    pub fn in_degree(&self, destination: usize) -> usize {
        match self.income_edges.as_ref() {
            Some(income) => income.get(&destination).map(Vec::len).unwrap_or(0),
            None => self
                .adjacency
                .values()
                .map(|neighbors| neighbors.iter().filter(|&&n| n == destination).count())
                .sum(),
        }
    }

    /// Every edge as a `(source, destination, length)` triple, sources in
    /// ascending order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.adjacency.iter().flat_map(move |(&source, neighbors)| {
            neighbors
                .iter()
                .map(move |&destination| (source, destination, self.edge_length(source, destination)))
        })
    }

    /// Plain sum of the lengths of all edges present in the graph
    pub fn total_edge_length(&self) -> f64 {
        self.edges().map(|(_, _, length)| length).sum()
    }
}
