//! `planar tour` command

use serde::Serialize;

use planar_core::config::PlanarConfig;
use planar_core::error::{PlanarError, Result};
use planar_core::format::OutputFormat;
use planar_core::graph::{Coordinate, Graph};
use planar_core::matrix::PathMatrix;
use planar_core::route::{euclidean_matrix, HubMap, NearestNeighbourTsp};

use crate::cli::parse::PointList;
use crate::cli::TourArgs;
use crate::commands::dispatch::CommandContext;

#[derive(Debug, Serialize)]
struct TourOutput {
    source_hub: usize,
    route: Vec<usize>,
    /// Cost including the leg back to the source; `None` if a leg is unknown
    closed_cost: Option<i64>,
    computation_time_us: u64,
}

/// Execute the tour command
pub fn execute(ctx: &CommandContext, args: &TourArgs) -> Result<()> {
    let (mut distances, hubs) = match (&args.costs, &args.points) {
        (Some(costs), _) => (PathMatrix::from_rows(costs.0.clone())?, HubMap::new()),
        (None, Some(points)) => point_matrix(points, &ctx.config)?,
        (None, None) => planar_core::bail_usage!("either --costs or --points is required"),
    };
    distances.set_max_distance(ctx.config.route.max_distance);

    let source_hub = args.source.unwrap_or(ctx.config.route.source_hub);
    let mut tsp = NearestNeighbourTsp::new(&distances, &hubs, source_hub)?;
    let route = tsp.execute()?;

    let output = TourOutput {
        source_hub,
        closed_cost: tsp.closed_tour_cost(),
        computation_time_us: u64::try_from(tsp.computation_time().as_micros())
            .unwrap_or(u64::MAX),
        route,
    };

    tracing::debug!(elapsed = ?ctx.start.elapsed(), hubs = distances.num_hubs(), "tour");

    match ctx.cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => output_human(ctx, &output),
    }
    Ok(())
}

/// Place one node per point and build the rounded Euclidean cost table.
/// Points closer than the lookup tolerance to an earlier point are rejected.
fn point_matrix(points: &PointList, config: &PlanarConfig) -> Result<(PathMatrix, HubMap)> {
    let mut graph = Graph::with_capacity(points.0.len(), 0);
    let mut ids = Vec::with_capacity(points.0.len());

    for (index, point) in points.0.iter().enumerate() {
        let location = Coordinate::from(*point);
        if let Some(existing) = graph.node_near(&location, config.graph.lookup_tolerance) {
            return Err(PlanarError::already_exists(
                "point",
                format!("{} (hub {} duplicates hub {})", location, index, existing.index()),
            ));
        }
        ids.push(graph.create_node_at(location, config.graph.node_capacity));
    }

    let hubs = HubMap::from_nodes(ids)?;
    let distances = euclidean_matrix(&graph, &hubs)?;
    Ok((distances, hubs))
}

fn output_human(ctx: &CommandContext, output: &TourOutput) {
    let route: Vec<String> = output.route.iter().map(ToString::to_string).collect();
    println!("route: {}", route.join(" -> "));
    match output.closed_cost {
        Some(cost) => println!("closed tour cost: {}", cost),
        None => println!("closed tour cost: unknown"),
    }
    if ctx.cli.verbose && !ctx.cli.quiet {
        println!("computed in {}us", output.computation_time_us);
    }
}
