use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::error::ArborescenceError;
use crate::graph::{DirectedGraph, EdgeRecord, Vertex};

/// Engine computing a minimum spanning arborescence by cycle contraction
/// and expansion (Edmonds' algorithm family).
///
/// The engine owns a working copy of the input graph that shrinks as cycles
/// are contracted into synthetic vertices, and a result tree that is
/// repeatedly rebuilt from locally-greedy minimum-incoming-edge choices and
/// finally repaired by replaying the contractions in reverse. Expansion
/// enters each cycle through the logged edge minimizing the net cost of
/// breaking it (original length minus the internal edge it displaces).
///
/// All tie-breaks are deterministic: smallest length first, then lowest
/// vertex index.
#[derive(Debug, Default)]
pub struct ArborescenceEngine;

/// Result of a minimum arborescence computation
#[derive(Debug, Clone)]
pub struct Arborescence {
    /// The arborescence itself, spanning the input's vertex set
    pub tree: DirectedGraph,
    /// Sum of the lengths of the edges present in `tree`
    pub minimum_cost: f64,
    /// Number of cycle contractions performed
    pub contractions: usize,
    /// The root of the result tree. When the final greedy round was anchored
    /// at a synthetic vertex (a graph with no true root), this is the real
    /// vertex the expansion resolved it to; it is always present in `tree`.
    pub root: usize,
}

impl Arborescence {
    /// Whether `tree` is a valid arborescence over `input`'s vertex set:
    /// same vertices, the root has no incoming edge, every other vertex has
    /// exactly one, and no cycle exists. Together these imply every vertex
    /// is reachable from the root.
    pub fn is_arborescence_of(&self, input: &DirectedGraph) -> bool {
        if !self.tree.vertex_indices().eq(input.vertex_indices()) {
            return false;
        }
        for index in self.tree.vertex_indices() {
            let in_degree = self.tree.in_degree(index);
            let expected = usize::from(index != self.root);
            if in_degree != expected {
                return false;
            }
        }
        self.tree.search_cycle().is_empty()
    }
}

impl ArborescenceEngine {
    pub fn new() -> Self {
        Self
    }

    /// Compute a minimum-weight arborescence of `graph`.
    ///
    /// The caller's graph is never mutated; the engine clones it at entry.
    /// Income-edge tracking must already be enabled on the input (the engine
    /// does not enable it itself) and the graph must contain at least one
    /// vertex; both are fatal usage errors otherwise.
    ///
    /// A graph from which some vertex is unreachable from the chosen root
    /// is not rejected: the computation still terminates, the anomaly is
    /// logged at warn level, and [`Arborescence::is_arborescence_of`] will
    /// report the defect.
    pub fn find_arborescence(
        &self,
        graph: &DirectedGraph,
    ) -> Result<Arborescence, ArborescenceError> {
        if graph.vertex_count() == 0 {
            return Err(ArborescenceError::EmptyGraph);
        }
        if !graph.tracks_income_edges() {
            return Err(ArborescenceError::IncomeTrackingDisabled);
        }

        let mut state = EngineState::new(graph);
        let root = state.contract_until_acyclic()?;
        let root = state.expand_all(root)?;
        Ok(state.finish(root))
    }
}

/// One contraction: the synthetic vertex and the ordered members of the
/// cycle it replaced.
#[derive(Debug, Clone)]
struct Contraction {
    synthetic: usize,
    members: Vec<usize>,
}

struct EngineState {
    /// Pristine copy of the caller's graph, consulted by the last-resort
    /// orphan repair
    input: DirectedGraph,
    working: DirectedGraph,
    tree: DirectedGraph,
    /// Contraction records, expanded in last-in-first-out order
    contractions: Vec<Contraction>,
    /// Original `(source, destination, length)` triples deleted by
    /// contractions; entries are consumed as expansion re-attaches them
    deleted_edges: Vec<EdgeRecord>,
    /// Every vertex removed from the working graph by a contraction
    deleted_vertices: BTreeSet<usize>,
    next_synthetic: usize,
    contraction_count: usize,
}

impl EngineState {
    fn new(graph: &DirectedGraph) -> Self {
        let mut tree = DirectedGraph::with_income_tracking();
        for vertex in graph.vertices() {
            tree.add_vertex(vertex.clone());
        }
        let next_synthetic = graph
            .vertex_indices()
            .last()
            .map(|index| index + 1)
            .unwrap_or(0);

        Self {
            input: graph.clone(),
            working: graph.clone(),
            tree,
            contractions: Vec::new(),
            deleted_edges: Vec::new(),
            deleted_vertices: BTreeSet::new(),
            next_synthetic,
            contraction_count: 0,
        }
    }

    /// Phase A: greedy minimum-incoming selection, contracting every cycle
    /// it produces, until the selection is acyclic. Returns the root of the
    /// final round.
    ///
    /// Terminates because every contraction strictly shrinks the working
    /// graph's vertex count.
    fn contract_until_acyclic(&mut self) -> Result<usize, ArborescenceError> {
        loop {
            let root = self.working.find_root()?;
            self.select_minimum_income_edges(root)?;

            let cycle = self.tree.search_cycle();
            if cycle.is_empty() {
                debug!(
                    root,
                    contractions = self.contraction_count,
                    "greedy selection is acyclic"
                );
                return Ok(root);
            }
            debug!(?cycle, "contracting cycle");
            self.contract_cycle(&cycle)?;
        }
    }

    /// For every non-root vertex still in the working graph, put its
    /// cheapest incoming edge into the tree. The tree's previous edges are
    /// discarded first; its vertices are kept.
    fn select_minimum_income_edges(&mut self, root: usize) -> Result<(), ArborescenceError> {
        self.tree.clear_edges();

        let working = &self.working;
        let tree = &mut self.tree;
        for destination in working.vertex_indices() {
            if destination == root {
                continue;
            }
            let mut best: Option<(f64, usize)> = None;
            for &source in working.income_edges(destination) {
                let length = working.edge_length(source, destination);
                match best {
                    Some((best_length, best_source))
                        if length > best_length
                            || (length == best_length && source >= best_source) => {}
                    _ => best = Some((length, source)),
                }
            }
            // A vertex with no incoming edges contributes no edge
            if let Some((length, source)) = best {
                tree.add_edge_with_length(source, destination, length)?;
            }
        }
        Ok(())
    }

    /// Replace `cycle`'s vertices with one synthetic vertex in the working
    /// graph, logging every deleted edge.
    ///
    /// Boundary edges survive redirected through the synthetic vertex,
    /// keeping only the minimum observed original length per external
    /// endpoint; no classical weight reduction is applied. Internal cycle
    /// edges are logged as well so expansion can restore them.
    fn contract_cycle(&mut self, cycle: &[usize]) -> Result<(), ArborescenceError> {
        let synthetic = self.next_synthetic;
        self.next_synthetic += 1;
        self.working.add_vertex(Vertex::new(synthetic));
        self.tree.add_vertex(Vertex::new(synthetic));

        let members: BTreeSet<usize> = cycle.iter().copied().collect();
        let mut cheapest_incoming: Vec<(usize, f64)> = Vec::new();
        let mut cheapest_outgoing: Vec<(usize, f64)> = Vec::new();

        for &member in cycle {
            for &source in self.working.income_edges(member) {
                let length = self.working.edge_length(source, member);
                self.deleted_edges
                    .push(EdgeRecord::new(source, member, length));
                if !members.contains(&source) {
                    keep_minimum(&mut cheapest_incoming, source, length);
                }
            }
            for &destination in self.working.out_neighbors(member) {
                if members.contains(&destination) {
                    // Internal edge, already logged from the income side
                    continue;
                }
                let length = self.working.edge_length(member, destination);
                self.deleted_edges
                    .push(EdgeRecord::new(member, destination, length));
                keep_minimum(&mut cheapest_outgoing, destination, length);
            }
        }

        for &(source, length) in &cheapest_incoming {
            self.working
                .add_edge_with_length(source, synthetic, length)?;
        }
        for &(destination, length) in &cheapest_outgoing {
            self.working
                .add_edge_with_length(synthetic, destination, length)?;
        }
        for &member in cycle {
            self.working.remove_vertex(member);
            self.deleted_vertices.insert(member);
        }

        self.contractions.push(Contraction {
            synthetic,
            members: cycle.to_vec(),
        });
        self.contraction_count += 1;
        Ok(())
    }

    /// Phase B: expand every contraction in reverse order, then feed any
    /// vertex the expansion left without an incoming edge. Returns the root
    /// of the final tree, which differs from `root` when the last greedy
    /// round was anchored at a synthetic vertex.
    fn expand_all(&mut self, root: usize) -> Result<usize, ArborescenceError> {
        while let Some(contraction) = self.contractions.pop() {
            self.expand_one(&contraction)?;
            self.repair_orphans(root)?;
        }

        let root = self.resolve_root(root);
        self.repair_from_input(root)?;
        Ok(root)
    }

    /// Map the final round's root onto the result tree.
    ///
    /// When the input has no true root the last contraction round can anchor
    /// at a synthetic vertex, which expansion removes from the tree. The
    /// resolved root is then the lowest-index vertex without an incoming
    /// edge; the tree is acyclic at this point, so one always exists.
    fn resolve_root(&self, root: usize) -> usize {
        if self.tree.contains_vertex(root) {
            return root;
        }
        let resolved = self
            .tree
            .vertex_indices()
            .find(|&vertex| self.tree.in_degree(vertex) == 0)
            .or_else(|| self.tree.vertex_indices().next())
            .unwrap_or(root);
        debug!(root, resolved, "resolved synthetic root to a tree vertex");
        resolved
    }

    /// Replace one synthetic vertex with its original cycle members: pick
    /// the edge that enters the cycle, then walk the deleted-edges log
    /// through the remaining members.
    fn expand_one(&mut self, contraction: &Contraction) -> Result<(), ArborescenceError> {
        let members: BTreeSet<usize> = contraction.members.iter().copied().collect();
        let mut remaining = contraction.members.clone();

        let mut current = None;
        if let Some(position) = self.select_cycle_entry(&contraction.members, &members) {
            let record = self.deleted_edges.remove(position);
            debug!(%record, "entering cycle");
            self.tree
                .add_edge_with_length(record.source, record.destination, record.length)?;
            remaining.retain(|&member| member != record.destination);
            current = Some(record.destination);
        }

        while !remaining.is_empty() {
            let Some(source) = current else {
                // No edge enters the cycle (no true root dominates it); the
                // repair sweep handles the members
                break;
            };

            let best = self
                .deleted_edges
                .iter()
                .enumerate()
                .filter(|(_, record)| {
                    record.source == source && remaining.contains(&record.destination)
                })
                .min_by(|(_, a), (_, b)| {
                    a.length
                        .total_cmp(&b.length)
                        .then(a.destination.cmp(&b.destination))
                })
                .map(|(position, _)| position);

            match best {
                Some(position) => {
                    let record = self.deleted_edges.remove(position);
                    self.tree.add_edge_with_length(
                        record.source,
                        record.destination,
                        record.length,
                    )?;
                    remaining.retain(|&member| member != record.destination);
                    current = Some(record.destination);
                }
                None => {
                    // Already satisfied transitively; drop it and keep going
                    let before = remaining.len();
                    remaining.retain(|&member| member != source);
                    if remaining.len() == before {
                        break;
                    }
                }
            }
        }

        self.tree.remove_vertex(contraction.synthetic);
        Ok(())
    }

    /// Choose the logged edge through which expansion enters a cycle.
    ///
    /// Every entry point displaces the internal cycle edge into the same
    /// member, so candidates are ranked by original length minus the
    /// displaced edge's length; ties fall back to smallest original length,
    /// then lowest source, then lowest destination. Candidates whose source
    /// is no longer in the tree or whose addition would close a cycle are
    /// skipped. Returns the winning record's position in the log.
    fn select_cycle_entry(&self, order: &[usize], members: &BTreeSet<usize>) -> Option<usize> {
        let tree = &self.tree;
        self.deleted_edges
            .iter()
            .enumerate()
            .filter(|(_, record)| {
                members.contains(&record.destination)
                    && !members.contains(&record.source)
                    && tree.contains_vertex(record.source)
                    && !creates_cycle(tree, record.source, record.destination)
            })
            .min_by(|(_, a), (_, b)| {
                let reduced_a = a.length - self.displaced_length(order, a.destination);
                let reduced_b = b.length - self.displaced_length(order, b.destination);
                reduced_a
                    .total_cmp(&reduced_b)
                    .then(a.length.total_cmp(&b.length))
                    .then(a.source.cmp(&b.source))
                    .then(a.destination.cmp(&b.destination))
            })
            .map(|(position, _)| position)
    }

    /// Length of the internal cycle edge into `member`, i.e. the logged edge
    /// from its predecessor along the recorded cycle order.
    fn displaced_length(&self, order: &[usize], member: usize) -> f64 {
        let Some(position) = order.iter().position(|&m| m == member) else {
            return 0.0;
        };
        let predecessor = order[(position + order.len() - 1) % order.len()];
        self.deleted_edges
            .iter()
            .filter(|record| record.source == predecessor && record.destination == member)
            .map(|record| record.length)
            .min_by(f64::total_cmp)
            .unwrap_or(0.0)
    }

    /// Reinstate logged edges into vertices whose real edge was hidden
    /// behind a synthetic vertex but never re-derived by the expansion walk.
    ///
    /// At most one edge per destination is reinstated (minimum length, then
    /// lowest source), and never one that would close a cycle. The root,
    /// not-yet-expanded synthetic vertices, and members of still-pending
    /// contractions are never fed here.
    fn repair_orphans(&mut self, root: usize) -> Result<(), ArborescenceError> {
        let pending: BTreeSet<usize> = self
            .contractions
            .iter()
            .flat_map(|contraction| {
                std::iter::once(contraction.synthetic).chain(contraction.members.iter().copied())
            })
            .collect();

        loop {
            let tree = &self.tree;
            let best = self
                .deleted_edges
                .iter()
                .enumerate()
                .filter(|(_, record)| {
                    record.destination != root
                        && !pending.contains(&record.destination)
                        && tree.contains_vertex(record.destination)
                        && tree.contains_vertex(record.source)
                        && tree.in_degree(record.destination) == 0
                        && !creates_cycle(tree, record.source, record.destination)
                })
                .min_by(|(_, a), (_, b)| {
                    a.destination
                        .cmp(&b.destination)
                        .then(a.length.total_cmp(&b.length))
                        .then(a.source.cmp(&b.source))
                })
                .map(|(position, _)| position);

            let Some(position) = best else {
                return Ok(());
            };
            let record = self.deleted_edges.remove(position);
            debug!(%record, "reinstating logged edge");
            self.tree
                .add_edge_with_length(record.source, record.destination, record.length)?;
        }
    }

    /// Last resort after all contractions are unwound: any vertex still
    /// without an incoming edge is fed from the cheapest original input edge
    /// that keeps the tree acyclic (minimum length, then lowest source).
    fn repair_from_input(&mut self, root: usize) -> Result<(), ArborescenceError> {
        let orphans: Vec<usize> = self
            .tree
            .vertex_indices()
            .filter(|&vertex| vertex != root && self.tree.in_degree(vertex) == 0)
            .collect();

        for vertex in orphans {
            let best = self
                .input
                .income_edges(vertex)
                .iter()
                .map(|&source| (self.input.edge_length(source, vertex), source))
                .filter(|&(_, source)| !creates_cycle(&self.tree, source, vertex))
                .min_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

            match best {
                Some((length, source)) => {
                    debug!(
                        vertex,
                        source,
                        length,
                        was_contracted = self.deleted_vertices.contains(&vertex),
                        "feeding orphaned vertex from the input graph"
                    );
                    self.tree.add_edge_with_length(source, vertex, length)?;
                }
                None => warn!(vertex, "no usable incoming edge; result will not span"),
            }
        }
        Ok(())
    }

    fn finish(self, root: usize) -> Arborescence {
        let orphans: Vec<usize> = self
            .tree
            .vertex_indices()
            .filter(|&vertex| vertex != root && self.tree.in_degree(vertex) == 0)
            .collect();
        if !orphans.is_empty() {
            warn!(
                ?orphans,
                "result is not a spanning arborescence; vertices unreachable from the root"
            );
        }
        if !self.tree.search_cycle().is_empty() {
            warn!("result contains a cycle; the input graph has no true root");
        }

        let minimum_cost = self.tree.total_edge_length();
        Arborescence {
            tree: self.tree,
            minimum_cost,
            contractions: self.contraction_count,
            root,
        }
    }
}

/// Whether adding `source -> destination` to `tree` would close a cycle.
/// Every vertex in the tree has at most one parent at this point, so walking
/// the ancestor chain of `source` suffices.
fn creates_cycle(tree: &DirectedGraph, source: usize, destination: usize) -> bool {
    let mut current = source;
    for _ in 0..=tree.vertex_count() {
        if current == destination {
            return true;
        }
        match tree.income_edges(current).first() {
            Some(&parent) => current = parent,
            None => return false,
        }
    }
    true
}

/// Keep the minimum length seen for `key` in a small association list
fn keep_minimum(entries: &mut Vec<(usize, f64)>, key: usize, length: f64) {
    for entry in entries.iter_mut() {
        if entry.0 == key {
            if length < entry.1 {
                entry.1 = length;
            }
            return;
        }
    }
    entries.push((key, length));
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn graph_from(vertex_count: usize, edges: &[(usize, usize, f64)]) -> DirectedGraph {
        let mut graph = DirectedGraph::with_income_tracking();
        for index in 0..vertex_count {
            graph.add_vertex(Vertex::new(index));
        }
        for &(source, destination, length) in edges {
            graph.add_edge_with_length(source, destination, length).unwrap();
        }
        graph
    }

    #[test]
    fn test_empty_graph_is_a_usage_error() {
        let graph = DirectedGraph::with_income_tracking();
        match ArborescenceEngine::new().find_arborescence(&graph) {
            Err(ArborescenceError::EmptyGraph) => {}
            other => panic!("Expected EmptyGraph, got {other:?}"),
        }
    }

    #[test]
    fn test_untracked_input_is_a_usage_error() {
        let mut graph = DirectedGraph::new();
        graph.add_vertex(Vertex::new(0));
        match ArborescenceEngine::new().find_arborescence(&graph) {
            Err(ArborescenceError::IncomeTrackingDisabled) => {}
            other => panic!("Expected IncomeTrackingDisabled, got {other:?}"),
        }
    }

    #[test]
    fn test_acyclic_greedy_choice_needs_no_contraction() {
        // A(0) root, B(1), C(2), D(3)
        let graph = graph_from(
            4,
            &[
                (0, 1, 1.0),
                (0, 2, 10.0),
                (1, 2, 1.0),
                (2, 1, 1.0),
                (1, 3, 2.0),
                (2, 3, 3.0),
            ],
        );

        let result = ArborescenceEngine::new().find_arborescence(&graph).unwrap();

        assert_eq!(result.contractions, 0);
        assert_eq!(result.root, 0);
        assert_eq!(result.minimum_cost, 4.0);
        let edges: Vec<(usize, usize, f64)> = result.tree.edges().collect();
        assert_eq!(edges, vec![(0, 1, 1.0), (1, 2, 1.0), (1, 3, 2.0)]);
        assert!(result.is_arborescence_of(&graph));
    }

    #[test]
    fn test_single_contraction_is_unwound() {
        // R(0) root, X(1), Y(2), Z(3); X and Y form a cheap 2-cycle
        let graph = graph_from(
            4,
            &[
                (0, 1, 4.0),
                (0, 2, 4.0),
                (1, 2, 1.0),
                (2, 1, 1.0),
                (1, 3, 2.0),
                (2, 3, 2.0),
            ],
        );

        let result = ArborescenceEngine::new().find_arborescence(&graph).unwrap();

        assert_eq!(result.contractions, 1);
        assert!(result.is_arborescence_of(&graph));
        assert_eq!(result.minimum_cost, 7.0);
        // The synthetic vertex must not survive expansion
        assert_eq!(result.tree.vertex_count(), 4);
        assert!(!result.tree.contains_vertex(4));
    }

    #[test]
    fn test_input_graph_is_never_mutated() {
        let graph = graph_from(
            4,
            &[
                (0, 1, 4.0),
                (0, 2, 4.0),
                (1, 2, 1.0),
                (2, 1, 1.0),
                (1, 3, 2.0),
                (2, 3, 2.0),
            ],
        );
        let vertex_count = graph.vertex_count();
        let edges_before: Vec<(usize, usize, f64)> = graph.edges().collect();

        ArborescenceEngine::new().find_arborescence(&graph).unwrap();

        assert_eq!(graph.vertex_count(), vertex_count);
        let edges_after: Vec<(usize, usize, f64)> = graph.edges().collect();
        assert_eq!(edges_after, edges_before);
    }

    #[test]
    fn test_cost_matches_tree_edge_sum() {
        let graph = graph_from(
            5,
            &[
                (0, 1, 3.0),
                (1, 2, 2.0),
                (2, 1, 2.0),
                (2, 3, 5.0),
                (3, 4, 1.0),
                (0, 3, 9.0),
            ],
        );

        let result = ArborescenceEngine::new().find_arborescence(&graph).unwrap();
        assert_eq!(result.minimum_cost, result.tree.total_edge_length());
    }

    #[test]
    fn test_three_cycle_contraction() {
        // 1 -> 2 -> 3 -> 1 is cheaper than any edge from the root
        let graph = graph_from(
            4,
            &[
                (0, 1, 10.0),
                (0, 2, 12.0),
                (0, 3, 11.0),
                (1, 2, 1.0),
                (2, 3, 1.0),
                (3, 1, 1.0),
            ],
        );

        let result = ArborescenceEngine::new().find_arborescence(&graph).unwrap();

        assert_eq!(result.contractions, 1);
        assert!(result.is_arborescence_of(&graph));
        // Enter the cycle at its cheapest entry (0 -> 1, 10) and follow it
        assert_eq!(result.minimum_cost, 12.0);
        assert!(result.tree.has_edge(0, 1));
        assert!(result.tree.has_edge(1, 2));
        assert!(result.tree.has_edge(2, 3));
    }

    #[test]
    fn test_two_vertex_graph() {
        let graph = graph_from(2, &[(0, 1, 5.0)]);
        let result = ArborescenceEngine::new().find_arborescence(&graph).unwrap();

        assert_eq!(result.contractions, 0);
        assert_eq!(result.minimum_cost, 5.0);
        assert!(result.is_arborescence_of(&graph));
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let graph = graph_from(
            4,
            &[
                (0, 1, 4.0),
                (0, 2, 4.0),
                (1, 2, 1.0),
                (2, 1, 1.0),
                (1, 3, 2.0),
                (2, 3, 2.0),
            ],
        );
        let engine = ArborescenceEngine::new();

        let first = engine.find_arborescence(&graph).unwrap();
        let second = engine.find_arborescence(&graph).unwrap();

        let first_edges: Vec<(usize, usize, f64)> = first.tree.edges().collect();
        let second_edges: Vec<(usize, usize, f64)> = second.tree.edges().collect();
        assert_eq!(first_edges, second_edges);
        assert_eq!(first.minimum_cost, second.minimum_cost);
    }

    #[test]
    fn test_two_separate_cycles_are_both_unwound() {
        // 1 <-> 2 and 3 <-> 4 each get contracted; expanding the first
        // contraction severs the edge feeding the second pocket, which the
        // repair pass must restore without closing a cycle
        let graph = graph_from(
            5,
            &[
                (0, 1, 2.0),
                (0, 2, 2.0),
                (1, 2, 1.0),
                (2, 1, 1.0),
                (1, 3, 4.0),
                (2, 4, 4.0),
                (3, 4, 1.0),
                (4, 3, 1.0),
            ],
        );

        let result = ArborescenceEngine::new().find_arborescence(&graph).unwrap();

        assert_eq!(result.contractions, 2);
        assert!(result.is_arborescence_of(&graph));
        assert_eq!(result.minimum_cost, 8.0);
        assert!(result.tree.has_edge(0, 1));
        assert!(result.tree.has_edge(1, 3));
    }

    #[test]
    fn test_graph_without_true_root_reports_a_real_root() {
        // Every vertex has an incoming edge, so the final greedy round
        // anchors at the synthetic vertex; the reported root must still be a
        // vertex of the result tree
        let graph = graph_from(3, &[(1, 2, 1.0), (2, 1, 1.0), (1, 0, 1.0)]);

        let result = ArborescenceEngine::new().find_arborescence(&graph).unwrap();

        assert!(result.tree.contains_vertex(result.root));
        assert_eq!(result.root, 2);
        assert_eq!(result.contractions, 1);
        assert_eq!(result.minimum_cost, 2.0);
        assert!(result.tree.has_edge(2, 1));
        assert!(result.tree.has_edge(1, 0));
        assert!(result.is_arborescence_of(&graph));
    }

    #[test]
    fn test_cycle_entry_minimizes_net_cost() {
        // Entering at 1 costs 5 and keeps the internal edge 1 -> 2 (4);
        // entering at 2 costs 6 but keeps the cheap 2 -> 1 (1) instead, so
        // the dearer entry edge wins
        let graph = graph_from(3, &[(0, 1, 5.0), (0, 2, 6.0), (1, 2, 4.0), (2, 1, 1.0)]);

        let result = ArborescenceEngine::new().find_arborescence(&graph).unwrap();

        assert_eq!(result.contractions, 1);
        assert!(result.tree.has_edge(0, 2));
        assert!(result.tree.has_edge(2, 1));
        assert_eq!(result.minimum_cost, 7.0);
        assert!(result.is_arborescence_of(&graph));
    }

    #[test]
    fn test_creates_cycle_walks_the_ancestor_chain() {
        let tree = graph_from(4, &[(0, 1, 1.0), (1, 2, 1.0)]);

        assert!(creates_cycle(&tree, 2, 0));
        assert!(creates_cycle(&tree, 2, 1));
        assert!(creates_cycle(&tree, 1, 1));
        assert!(!creates_cycle(&tree, 2, 3));
        assert!(!creates_cycle(&tree, 0, 3));
    }

    #[test]
    fn test_keep_minimum_tracks_cheapest_per_key() {
        let mut entries = Vec::new();
        keep_minimum(&mut entries, 7, 3.0);
        keep_minimum(&mut entries, 7, 5.0);
        keep_minimum(&mut entries, 7, 2.0);
        keep_minimum(&mut entries, 9, 4.0);

        assert_eq!(entries, vec![(7, 2.0), (9, 4.0)]);
    }
}
