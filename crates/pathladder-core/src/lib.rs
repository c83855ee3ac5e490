//! Pathladder Core Library
//!
//! Weighted shortest paths (Dijkstra) over edge-list graphs and shortest
//! word ladders (breadth-first search over single-character edits).

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod ladder;
pub mod logging;
