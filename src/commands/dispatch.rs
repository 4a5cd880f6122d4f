//! Command dispatch logic for planar

use std::time::Instant;

use planar_core::config::PlanarConfig;
use planar_core::error::Result;
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::commands::{connectivity, eccentricity, reach, tour};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: PlanarConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: PlanarConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Reach {
                graph,
                from,
                depth_limit,
            } => reach::execute(ctx, graph, from, *depth_limit),
            Commands::Eccentricity { graph } => eccentricity::execute(ctx, graph),
            Commands::Connectivity { graph } => connectivity::execute(ctx, graph),
            Commands::Tour(args) => tour::execute(ctx, args),
        }
    }
}

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = PlanarConfig::load_or_default(cli.config.as_deref())?;

    debug!(elapsed = ?start.elapsed(), config = ?cli.config, "load_config");

    let ctx = CommandContext::new(cli, config, start);
    cli.command.execute(&ctx)
}
