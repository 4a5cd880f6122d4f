//! `planar reach` command

use serde::Serialize;

use planar_core::error::Result;
use planar_core::format::OutputFormat;
use planar_core::graph::{BfsOptions, BreadthFirstSearch, UNBOUNDED_DEPTH, UNKNOWN_DEPTH};

use crate::cli::GraphArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::input::build_graph;

#[derive(Debug, Serialize)]
struct ReachedNode {
    label: String,
    depth: i32,
}

#[derive(Debug, Serialize)]
struct ReachOutput {
    source: String,
    depth_limit: Option<i32>,
    reached: Vec<ReachedNode>,
    max_depth: Option<i32>,
}

/// Execute the reach command
pub fn execute(
    ctx: &CommandContext,
    args: &GraphArgs,
    from: &str,
    depth_limit: Option<i32>,
) -> Result<()> {
    let built = build_graph(args, &ctx.config.graph);
    let source = built.resolve(from)?;

    let mut opts = BfsOptions::from(&ctx.config.search);
    if let Some(limit) = depth_limit {
        opts.depth_limit = limit;
    }

    let mut bfs = BreadthFirstSearch::new();
    let reached = bfs.find_all_with(&built.graph, source, &opts);

    let mut nodes: Vec<ReachedNode> = reached
        .iter()
        .map(|id| ReachedNode {
            label: built.label(*id).to_string(),
            depth: bfs.depth_of(*id),
        })
        .collect();
    nodes.sort_by(|a, b| a.depth.cmp(&b.depth).then_with(|| a.label.cmp(&b.label)));

    let output = ReachOutput {
        source: from.to_string(),
        depth_limit: (opts.depth_limit != UNBOUNDED_DEPTH).then_some(opts.depth_limit),
        reached: nodes,
        max_depth: (bfs.max_depth() != UNKNOWN_DEPTH).then_some(bfs.max_depth()),
    };

    tracing::debug!(elapsed = ?ctx.start.elapsed(), reached = output.reached.len(), "reach");

    match ctx.cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => output_human(ctx, &output),
    }
    Ok(())
}

fn output_human(ctx: &CommandContext, output: &ReachOutput) {
    if !ctx.cli.quiet {
        println!("Reachable from {} ({} nodes):", output.source, output.reached.len());
    }
    for node in &output.reached {
        println!("  {}  depth={}", node.label, node.depth);
    }
    match output.max_depth {
        Some(depth) => println!("max depth: {}", depth),
        None => println!("max depth: unknown"),
    }
}
