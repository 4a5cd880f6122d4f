//! `planar connectivity` command

use serde::Serialize;

use planar_core::error::Result;
use planar_core::format::OutputFormat;

use crate::cli::GraphArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::input::build_graph;

#[derive(Debug, Serialize)]
struct ConnectivityReport {
    nodes: usize,
    edges: usize,
    connected: bool,
    complete: bool,
}

/// Execute the connectivity command
pub fn execute(ctx: &CommandContext, args: &GraphArgs) -> Result<()> {
    let built = build_graph(args, &ctx.config.graph);
    let graph = &built.graph;

    let report = ConnectivityReport {
        nodes: graph.num_nodes(),
        edges: graph.num_edges(),
        connected: graph.is_connected(),
        complete: graph.is_complete(),
    };

    tracing::debug!(elapsed = ?ctx.start.elapsed(), "connectivity");

    match ctx.cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            println!("nodes: {}", report.nodes);
            println!("edges: {}", report.edges);
            println!("connected: {}", report.connected);
            println!("complete: {}", report.complete);
        }
    }
    Ok(())
}
