//! `planar eccentricity` command

use serde::Serialize;

use planar_core::error::Result;
use planar_core::format::OutputFormat;
use planar_core::graph::UNKNOWN_DEPTH;

use crate::cli::GraphArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::input::build_graph;

#[derive(Debug, Serialize)]
struct NodeReport {
    label: String,
    degree: usize,
    /// `None` for nodes without outgoing edges
    eccentricity: Option<i32>,
}

/// Execute the eccentricity command
pub fn execute(ctx: &CommandContext, args: &GraphArgs) -> Result<()> {
    let built = build_graph(args, &ctx.config.graph);

    let reports: Vec<NodeReport> = built
        .order
        .iter()
        .map(|id| NodeReport {
            label: built.label(*id).to_string(),
            degree: built.graph.degree(*id).unwrap_or(0),
            eccentricity: built
                .graph
                .eccentricity(*id)
                .filter(|depth| *depth != UNKNOWN_DEPTH),
        })
        .collect();

    tracing::debug!(elapsed = ?ctx.start.elapsed(), nodes = reports.len(), "eccentricity");

    match ctx.cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
        OutputFormat::Human => {
            if reports.is_empty() && !ctx.cli.quiet {
                println!("No nodes");
            }
            for report in &reports {
                let eccentricity = report
                    .eccentricity
                    .map_or_else(|| "unknown".to_string(), |e| e.to_string());
                println!(
                    "{}  degree={}  eccentricity={}",
                    report.label, report.degree, eccentricity
                );
            }
        }
    }
    Ok(())
}
