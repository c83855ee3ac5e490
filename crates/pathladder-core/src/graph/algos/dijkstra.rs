use crate::error::{PathladderError, Result};
use crate::graph::path::ShortestPaths;
use crate::graph::types::{Cost, Graph, VertexId};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Wrapper for BinaryHeap to use as min-heap (ordered by tentative distance)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapEntry {
    pub vertex: VertexId,
    pub distance: Cost,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// State tracked during one Dijkstra run
struct DijkstraState {
    distances: Vec<Option<Cost>>,
    predecessors: Vec<Option<VertexId>>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
    settled: usize,
    stale: usize,
}

impl DijkstraState {
    fn new(vertex_count: usize, source: VertexId) -> Self {
        let mut distances = vec![None; vertex_count];
        distances[source] = Some(Cost::ZERO);

        let mut heap = BinaryHeap::new();
        heap.push(Reverse(HeapEntry {
            vertex: source,
            distance: Cost::ZERO,
        }));

        Self {
            distances,
            predecessors: vec![None; vertex_count],
            heap,
            settled: 0,
            stale: 0,
        }
    }

    /// Record `from -> to` if it beats the best known distance to `to`
    fn relax(&mut self, from: VertexId, to: VertexId, candidate: Cost) {
        if self.distances[to].is_none_or(|best| candidate < best) {
            self.distances[to] = Some(candidate);
            self.predecessors[to] = Some(from);
            self.heap.push(Reverse(HeapEntry {
                vertex: to,
                distance: candidate,
            }));
        }
    }
}

/// Compute minimum-cost distances and predecessors from `source` to every
/// vertex of `graph`.
///
/// Outdated heap entries are skipped on pop instead of using decrease-key.
/// Unreachable vertices keep a `None` distance and predecessor.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn compute_shortest_paths(graph: &Graph, source: VertexId) -> Result<ShortestPaths> {
    if !graph.contains(source) {
        return Err(PathladderError::VertexOutOfRange {
            vertex: source,
            vertex_count: graph.vertex_count(),
        });
    }

    let mut state = DijkstraState::new(graph.vertex_count(), source);

    while let Some(Reverse(HeapEntry { vertex, distance })) = state.heap.pop() {
        if state.distances[vertex].is_some_and(|best| distance > best) {
            state.stale += 1;
            continue;
        }
        state.settled += 1;

        for edge in graph.edges(vertex) {
            state.relax(vertex, edge.to, distance + edge.weight);
        }
    }

    let reachable = state.distances.iter().filter(|d| d.is_some()).count();
    tracing::debug!(
        settled = state.settled,
        stale = state.stale,
        reachable,
        "dijkstra_complete"
    );

    Ok(ShortestPaths::new(
        source,
        state.distances,
        state.predecessors,
    ))
}

#[cfg(test)]
mod tests;
