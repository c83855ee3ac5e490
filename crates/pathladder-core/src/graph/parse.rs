//! Edge-list graph loader
//!
//! Format: the first token is the vertex count, followed by any number of
//! `src dst weight` triples separated by whitespace. `#` comments run to the
//! end of the line.
//!
//! ```text
//! 4
//! 0 1 4
//! 0 2 1   # cheap detour
//! 2 1 2
//! 1 3 1
//! ```
//!
//! The vertex count may not exceed [`MAX_VERTICES`].

use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{PathladderError, Result};
use crate::graph::types::{Cost, Graph, VertexId};

/// Largest vertex count a graph file may declare. Adjacency lists are
/// allocated up front, so the header is checked before anything else.
pub const MAX_VERTICES: usize = 1 << 24;

/// Whitespace tokens paired with their 1-based line number
fn tokenize(input: &str) -> impl Iterator<Item = (usize, &str)> {
    input.lines().enumerate().flat_map(|(idx, line)| {
        let content = line.split('#').next().unwrap_or_default();
        content.split_whitespace().map(move |token| (idx + 1, token))
    })
}

fn parse_vertex(token: &str, line: usize, vertex_count: usize) -> Result<VertexId> {
    let vertex: VertexId = token
        .parse()
        .map_err(|_| PathladderError::invalid_graph(line, format!("invalid vertex `{}`", token)))?;
    if vertex >= vertex_count {
        return Err(PathladderError::invalid_graph(
            line,
            format!(
                "vertex {} out of range (graph has {} vertices)",
                vertex, vertex_count
            ),
        ));
    }
    Ok(vertex)
}

fn parse_weight(token: &str, line: usize) -> Result<Cost> {
    if let Ok(weight) = token.parse::<u64>() {
        return Ok(Cost::new(weight));
    }
    let reason = match token.parse::<i64>() {
        Ok(negative) => format!("negative weight {} is not supported", negative),
        Err(_) => format!("invalid weight `{}`", token),
    };
    Err(PathladderError::invalid_graph(line, reason))
}

impl Graph {
    /// Parse a graph from edge-list text
    pub fn parse(input: &str) -> Result<Self> {
        let mut tokens = tokenize(input);

        let (line, count) = tokens
            .next()
            .ok_or_else(|| PathladderError::invalid_graph(1, "missing vertex count"))?;
        let vertex_count: usize = count.parse().map_err(|_| {
            PathladderError::invalid_graph(line, format!("invalid vertex count `{}`", count))
        })?;
        if vertex_count > MAX_VERTICES {
            return Err(PathladderError::invalid_graph(
                line,
                format!(
                    "vertex count {} exceeds the limit of {}",
                    vertex_count, MAX_VERTICES
                ),
            ));
        }

        let mut graph = Graph::new(vertex_count);
        while let Some((line, src)) = tokens.next() {
            let (Some((dst_line, dst)), Some((weight_line, weight))) =
                (tokens.next(), tokens.next())
            else {
                return Err(PathladderError::invalid_graph(
                    line,
                    "incomplete edge, expected `src dst weight`",
                ));
            };

            let from = parse_vertex(src, line, vertex_count)?;
            let to = parse_vertex(dst, dst_line, vertex_count)?;
            let weight = parse_weight(weight, weight_line)?;
            graph.add_edge(from, to, weight)?;
        }

        Ok(graph)
    }

    /// Read and parse a graph file
    #[tracing::instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| PathladderError::io_operation("read graph file", path.display(), e))?;
        let graph = Self::parse(&content)?;
        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "graph_loaded"
        );
        Ok(graph)
    }
}

impl FromStr for Graph {
    type Err = PathladderError;

    fn from_str(s: &str) -> Result<Self> {
        Graph::parse(s)
    }
}
