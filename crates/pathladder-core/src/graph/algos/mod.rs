//! Graph algorithm implementations
//!
//! - `dijkstra`: single-source shortest paths over non-negative weights

pub mod dijkstra;

pub use dijkstra::compute_shortest_paths;
