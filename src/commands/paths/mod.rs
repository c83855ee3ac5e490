//! `pathladder paths` command - Dijkstra shortest paths from one source

pub mod human;
pub mod json;
pub mod records;

use std::time::Instant;

use serde::Serialize;

use crate::cli::PathsArgs;
use crate::commands::dispatch::CommandContext;
use pathladder_core::error::{PathladderError, Result};
use pathladder_core::graph::{compute_shortest_paths, Graph, Route, VertexId};

/// Everything the renderers need for one query
#[derive(Debug, Clone, Serialize)]
pub struct PathsReport {
    pub source: VertexId,
    pub vertices: usize,
    pub edges: usize,
    pub routes: Vec<Route>,
}

/// Execute the paths command
pub fn execute(ctx: &CommandContext, args: &PathsArgs) -> Result<()> {
    let cli = ctx.cli;

    let Some(graph_path) = args.graph.as_ref().or(ctx.config.graph.file.as_ref()) else {
        pathladder_core::bail_usage!(
            "no graph file given (pass GRAPH or set graph.file in pathladder.toml)"
        );
    };
    let source = args.source.unwrap_or(ctx.config.graph.source);

    let graph = Graph::load(graph_path)?;
    ctx.trace_phase("load_graph");

    if let Some(destination) = args.to {
        if !graph.contains(destination) {
            return Err(PathladderError::VertexOutOfRange {
                vertex: destination,
                vertex_count: graph.vertex_count(),
            });
        }
    }

    let start = Instant::now();
    let paths = compute_shortest_paths(&graph, source)?;
    pathladder_core::trace_time!(start, "compute_shortest_paths", source = source);

    let routes = match args.to {
        Some(destination) => vec![paths.route_to(destination)],
        None => paths.routes(),
    };

    let report = PathsReport {
        source,
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        routes,
    };

    crate::output_by_format_result!(cli.format,
        json => json::output_paths_json(&report),
        human => {
            human::output_paths_human(&report);
        },
        records => {
            records::output_paths_records(&report);
        }
    )
}

/// Space-separated vertex list
pub(crate) fn join_path(path: &[VertexId]) -> String {
    path.iter()
        .map(VertexId::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
