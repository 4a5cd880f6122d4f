//! CLI argument parsing for planar
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod parse;

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand};

pub use planar_core::format::OutputFormat;
use parse::{
    parse_cost_rows, parse_edge_list, parse_output_format, parse_point_list, CostRows, EdgeList,
    PointList,
};

/// Planar - graph reachability and nearest-neighbour routing
#[derive(Parser, Debug)]
#[command(name = "planar")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human or json)
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging and report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directives (e.g. "debug", "planar_core=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (TOML)
    #[arg(long, global = true, env = "PLANAR_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the nodes reachable from a source, with their hop depths
    Reach {
        #[command(flatten)]
        graph: GraphArgs,

        /// Label of the node to search from
        #[arg(long)]
        from: String,

        /// Deepest hop count to visit (defaults to unbounded)
        #[arg(long, allow_negative_numbers = true)]
        depth_limit: Option<i32>,
    },

    /// Report degree and eccentricity of every node
    Eccentricity {
        #[command(flatten)]
        graph: GraphArgs,
    },

    /// Report node and edge counts, connectivity and completeness
    Connectivity {
        #[command(flatten)]
        graph: GraphArgs,
    },

    /// Build a nearest-neighbour route over a cost table or a set of points
    Tour(TourArgs),
}

/// Graph description shared by the graph commands
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Edges as comma-separated label pairs, e.g. "a-b,b-c"
    #[arg(long, default_value = "", value_parser = parse_edge_list)]
    pub edges: EdgeList,

    /// Additional node labels, comma-separated (nodes without edges)
    #[arg(long, value_delimiter = ',')]
    pub nodes: Vec<String>,

    /// Create one-way edges instead of a pair per listed edge
    #[arg(long)]
    pub directed: bool,
}

#[derive(Args, Debug, Clone)]
#[command(group(ArgGroup::new("input").required(true).args(["costs", "points"])))]
pub struct TourArgs {
    /// Cost table rows separated by ';', entries by ','; '-' marks an
    /// unknown cost. Example: "0,20,42;20,0,30;42,30,0"
    #[arg(long, value_parser = parse_cost_rows, allow_hyphen_values = true)]
    pub costs: Option<CostRows>,

    /// Hub locations as "x,y" pairs separated by ';'
    #[arg(long, value_parser = parse_point_list, allow_hyphen_values = true)]
    pub points: Option<PointList>,

    /// Hub to start from (defaults to route.source_hub from config)
    #[arg(long)]
    pub source: Option<usize>,
}
