use super::*;

fn graph_from(vertex_count: usize, edges: &[(usize, usize, u64)]) -> Graph {
    let mut graph = Graph::new(vertex_count);
    for &(from, to, weight) in edges {
        graph.add_edge(from, to, Cost::new(weight)).unwrap();
    }
    graph
}

/// Minimum cost to every vertex by enumerating all simple paths
fn brute_force_distances(graph: &Graph, source: VertexId) -> Vec<Option<Cost>> {
    fn walk(
        graph: &Graph,
        vertex: VertexId,
        cost: Cost,
        on_path: &mut Vec<bool>,
        best: &mut Vec<Option<Cost>>,
    ) {
        if best[vertex].is_none_or(|b| cost < b) {
            best[vertex] = Some(cost);
        }
        on_path[vertex] = true;
        for edge in graph.edges(vertex) {
            if !on_path[edge.to] {
                walk(graph, edge.to, cost + edge.weight, on_path, best);
            }
        }
        on_path[vertex] = false;
    }

    let mut best = vec![None; graph.vertex_count()];
    let mut on_path = vec![false; graph.vertex_count()];
    walk(graph, source, Cost::ZERO, &mut on_path, &mut best);
    best
}

/// Small deterministic generator so the cross-check graphs are reproducible
struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: u64) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) % bound
    }
}

fn random_graph(rng: &mut Lcg) -> Graph {
    let vertex_count = 1 + rng.next(7) as usize;
    let edge_count = rng.next(16) as usize;
    let mut graph = Graph::new(vertex_count);
    for _ in 0..edge_count {
        let from = rng.next(vertex_count as u64) as usize;
        let to = rng.next(vertex_count as u64) as usize;
        graph.add_edge(from, to, Cost::new(rng.next(10))).unwrap();
    }
    graph
}

fn assert_path_consistent(graph: &Graph, paths: &ShortestPaths, destination: VertexId) {
    let path = paths.path_to(destination);
    match paths.distance(destination) {
        None => assert!(path.is_empty()),
        Some(distance) => {
            assert_eq!(path.first(), Some(&paths.source()));
            assert_eq!(path.last(), Some(&destination));
            let total: Cost = path
                .windows(2)
                .map(|pair| {
                    graph
                        .edge_weight(pair[0], pair[1])
                        .expect("consecutive path vertices must share an edge")
                })
                .sum();
            assert_eq!(total, distance);
        }
    }
}

/// Test HeapEntry comparison ordering
#[test]
fn test_heap_entry_ordering() {
    let entry1 = HeapEntry {
        vertex: 0,
        distance: Cost::new(1),
    };
    let entry2 = HeapEntry {
        vertex: 1,
        distance: Cost::new(2),
    };
    let entry3 = HeapEntry {
        vertex: 2,
        distance: Cost::new(1),
    };

    assert_eq!(entry1.cmp(&entry2), std::cmp::Ordering::Less);
    assert_eq!(entry2.cmp(&entry1), std::cmp::Ordering::Greater);

    // Equal distances fall back to vertex order
    assert_eq!(entry1.cmp(&entry3), std::cmp::Ordering::Less);

    let mut heap = BinaryHeap::from(vec![Reverse(entry2), Reverse(entry3), Reverse(entry1)]);
    assert_eq!(heap.pop(), Some(Reverse(entry1)));
}

#[test]
fn test_four_vertex_example() {
    let graph = graph_from(4, &[(0, 1, 4), (0, 2, 1), (2, 1, 2), (1, 3, 1)]);
    let paths = compute_shortest_paths(&graph, 0).unwrap();

    let distances: Vec<u64> = paths
        .distances()
        .iter()
        .map(|d| d.unwrap().value())
        .collect();
    assert_eq!(distances, vec![0, 3, 1, 4]);
    assert_eq!(paths.path_to(3), vec![0, 2, 1, 3]);
    assert_eq!(paths.distance(3), Some(Cost::new(4)));
    assert_eq!(paths.predecessor(0), None);
    assert_eq!(paths.predecessor(1), Some(2));
}

#[test]
fn test_unreachable_vertices() {
    let graph = graph_from(4, &[(0, 1, 2), (2, 3, 1)]);
    let paths = compute_shortest_paths(&graph, 0).unwrap();

    assert!(paths.is_reachable(1));
    for vertex in [2, 3] {
        assert_eq!(paths.distance(vertex), None);
        assert_eq!(paths.predecessor(vertex), None);
        assert!(paths.path_to(vertex).is_empty());
    }
}

#[test]
fn test_source_out_of_range() {
    let graph = Graph::new(3);
    let err = compute_shortest_paths(&graph, 3).unwrap_err();
    assert!(matches!(
        err,
        PathladderError::VertexOutOfRange {
            vertex: 3,
            vertex_count: 3
        }
    ));
}

#[test]
fn test_zero_weights_self_loops_and_parallel_edges() {
    let graph = graph_from(
        3,
        &[(0, 0, 5), (0, 1, 9), (0, 1, 2), (1, 2, 0), (2, 1, 0)],
    );
    let paths = compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(paths.distance(0), Some(Cost::ZERO));
    assert_eq!(paths.distance(1), Some(Cost::new(2)));
    assert_eq!(paths.distance(2), Some(Cost::new(2)));
    assert_eq!(paths.path_to(2), vec![0, 1, 2]);
}

#[test]
fn test_later_improvement_updates_predecessor() {
    // The direct edge is discovered first but the detour is cheaper
    let graph = graph_from(4, &[(0, 3, 10), (0, 1, 1), (1, 2, 1), (2, 3, 1)]);
    let paths = compute_shortest_paths(&graph, 0).unwrap();
    assert_eq!(paths.distance(3), Some(Cost::new(3)));
    assert_eq!(paths.predecessor(3), Some(2));
}

#[test]
fn test_single_vertex_graph() {
    let paths = compute_shortest_paths(&Graph::new(1), 0).unwrap();
    assert_eq!(paths.path_to(0), vec![0]);
    assert_eq!(paths.routes().len(), 1);
}

#[test]
fn test_matches_brute_force_on_small_graphs() {
    let mut rng = Lcg(0x5eed);
    for _ in 0..200 {
        let graph = random_graph(&mut rng);
        let source = rng.next(graph.vertex_count() as u64) as usize;

        let paths = compute_shortest_paths(&graph, source).unwrap();
        let expected = brute_force_distances(&graph, source);

        assert_eq!(paths.distances(), expected.as_slice(), "graph: {:?}", graph);
        for destination in 0..graph.vertex_count() {
            assert_path_consistent(&graph, &paths, destination);
        }
    }
}

#[test]
fn test_queries_do_not_share_state() {
    let graph = graph_from(3, &[(0, 1, 1), (1, 2, 1), (2, 0, 1)]);
    let from_zero = compute_shortest_paths(&graph, 0).unwrap();
    let from_two = compute_shortest_paths(&graph, 2).unwrap();
    assert_eq!(from_zero.path_to(2), vec![0, 1, 2]);
    assert_eq!(from_two.path_to(1), vec![2, 0, 1]);
    assert_eq!(from_zero.source(), 0);
}
