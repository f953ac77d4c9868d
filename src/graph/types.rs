//! Core graph types
//!
//! This module contains the fundamental data structures used by the graph
//! store and the arborescence engine, with minimal logic - focusing on data
//! representation.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// An identity-bearing graph vertex.
///
/// Identity is the stable integer `index` alone: equality, ordering, and
/// hashing all ignore the decorative `label` and `weight` attributes, so a
/// vertex compares equal to itself everywhere it is shared - in the working
/// graph, in the result tree, and in bookkeeping collections.
#[derive(Debug, Clone)]
pub struct Vertex {
    index: usize,
    label: Option<String>,
    weight: Option<f64>,
}

impl Vertex {
    /// Create a vertex with the given index and no attributes
    pub fn new(index: usize) -> Self {
        Self {
            index,
            label: None,
            weight: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn weight(&self) -> Option<f64> {
        self.weight
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for Vertex {}

impl PartialOrd for Vertex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Vertex {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index.cmp(&other.index)
    }
}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

impl std::fmt::Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.label {
            Some(label) => write!(f, "{}({})", label, self.index),
            None => write!(f, "v{}", self.index),
        }
    }
}

/// An original `(source, destination, length)` triple recorded when a
/// contraction deletes the edges around a cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeRecord {
    pub source: usize,
    pub destination: usize,
    pub length: f64,
}

impl EdgeRecord {
    pub fn new(source: usize, destination: usize, length: f64) -> Self {
        Self {
            source,
            destination,
            length,
        }
    }
}

impl std::fmt::Display for EdgeRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} ({})", self.source, self.destination, self.length)
    }
}
