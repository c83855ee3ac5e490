//! Shortest-path results and path reconstruction

use serde::Serialize;

use crate::graph::types::{Cost, VertexId};

/// Walk predecessor links back from `destination` and return the
/// source-to-destination vertex sequence.
///
/// Returns an empty path when the destination is unreachable or out of range.
pub fn reconstruct_path(
    distances: &[Option<Cost>],
    predecessors: &[Option<VertexId>],
    destination: VertexId,
) -> Vec<VertexId> {
    if !matches!(distances.get(destination), Some(Some(_))) {
        return Vec::new();
    }

    let mut path = Vec::new();
    let mut current = Some(destination);
    while let Some(vertex) = current {
        path.push(vertex);
        // A predecessor chain longer than the table means it loops
        if path.len() > predecessors.len() {
            tracing::warn!(destination, "predecessor_cycle");
            return Vec::new();
        }
        current = predecessors.get(vertex).copied().flatten();
    }

    path.reverse();
    path
}

/// Path and cost to one destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub destination: VertexId,
    pub reachable: bool,
    /// `None` when unreachable
    pub cost: Option<Cost>,
    pub path: Vec<VertexId>,
}

/// Distance and predecessor tables produced by one Dijkstra run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    source: VertexId,
    distances: Vec<Option<Cost>>,
    predecessors: Vec<Option<VertexId>>,
}

impl ShortestPaths {
    pub(crate) fn new(
        source: VertexId,
        distances: Vec<Option<Cost>>,
        predecessors: Vec<Option<VertexId>>,
    ) -> Self {
        Self {
            source,
            distances,
            predecessors,
        }
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn vertex_count(&self) -> usize {
        self.distances.len()
    }

    /// Distance table; `None` marks an unreachable vertex
    pub fn distances(&self) -> &[Option<Cost>] {
        &self.distances
    }

    /// Predecessor table; `None` marks the source and unreachable vertices
    pub fn predecessors(&self) -> &[Option<VertexId>] {
        &self.predecessors
    }

    pub fn distance(&self, vertex: VertexId) -> Option<Cost> {
        self.distances.get(vertex).copied().flatten()
    }

    pub fn predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.predecessors.get(vertex).copied().flatten()
    }

    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.distance(vertex).is_some()
    }

    pub fn path_to(&self, destination: VertexId) -> Vec<VertexId> {
        reconstruct_path(&self.distances, &self.predecessors, destination)
    }

    pub fn route_to(&self, destination: VertexId) -> Route {
        let cost = self.distance(destination);
        Route {
            destination,
            reachable: cost.is_some(),
            cost,
            path: self.path_to(destination),
        }
    }

    /// One route per vertex, in vertex order
    pub fn routes(&self) -> Vec<Route> {
        (0..self.vertex_count())
            .map(|dest| self.route_to(dest))
            .collect()
    }
}
