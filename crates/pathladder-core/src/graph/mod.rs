//! Weighted directed graphs and shortest paths
//!
//! - `types`: vertices, edges, costs and the adjacency-list graph
//! - `parse`: edge-list file loader
//! - `algos`: Dijkstra's algorithm
//! - `path`: result tables and path reconstruction

pub mod algos;
pub mod parse;
pub mod path;
pub mod types;

pub use algos::compute_shortest_paths;
pub use parse::MAX_VERTICES;
pub use path::{reconstruct_path, Route, ShortestPaths};
pub use types::{Cost, Edge, Graph, VertexId};
