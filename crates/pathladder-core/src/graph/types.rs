use crate::error::{PathladderError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Zero-based vertex index
pub type VertexId = usize;

/// Non-negative edge weight or accumulated path cost.
///
/// Addition saturates, so an overflowing path compares as the most
/// expensive one instead of wrapping around.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Cost(u64);

impl Cost {
    pub const ZERO: Cost = Cost(0);

    pub fn new(cost: u64) -> Self {
        Cost(cost)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::ops::Add for Cost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Cost(self.0.saturating_add(other.0))
    }
}

impl std::iter::Sum for Cost {
    fn sum<I: Iterator<Item = Cost>>(iter: I) -> Self {
        iter.fold(Cost::ZERO, |acc, c| acc + c)
    }
}

impl From<u64> for Cost {
    fn from(cost: u64) -> Self {
        Cost(cost)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outgoing edge, owned by its source vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub to: VertexId,
    pub weight: Cost,
}

/// Weighted directed graph stored as adjacency lists.
///
/// Vertices are the contiguous range `0..vertex_count()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    /// Create a graph with `vertex_count` vertices and no edges
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    /// Append a directed edge. Both endpoints must already exist.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: Cost) -> Result<()> {
        let vertex_count = self.vertex_count();
        for vertex in [from, to] {
            if vertex >= vertex_count {
                return Err(PathladderError::VertexOutOfRange {
                    vertex,
                    vertex_count,
                });
            }
        }
        self.adjacency[from].push(Edge { to, weight });
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        vertex < self.vertex_count()
    }

    /// Outgoing edges of `vertex` in insertion order (empty when out of range)
    pub fn edges(&self, vertex: VertexId) -> &[Edge] {
        self.adjacency.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Cheapest weight among the parallel edges `from -> to`, if any
    pub fn edge_weight(&self, from: VertexId, to: VertexId) -> Option<Cost> {
        self.edges(from)
            .iter()
            .filter(|edge| edge.to == to)
            .map(|edge| edge.weight)
            .min()
    }
}
