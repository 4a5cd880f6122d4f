//! Planar - graph reachability and nearest-neighbour routing CLI
//!
//! Builds small planar graphs from the command line, reports breadth-first
//! reachability, eccentricity and connectivity, and constructs greedy
//! nearest-neighbour routes over cost tables or point sets.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use planar_core::error::{ExitCode as PlanarExitCode, PlanarError};
use planar_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return parse_failure(err, wants_json(env::args().skip(1))),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(PlanarExitCode::Success as u8),
        Err(e) => report(&e, cli.format, cli.quiet),
    }
}

/// Clap failed before `Cli.format` existed. With a JSON request on the raw
/// argv the failure still goes out as an error envelope.
fn parse_failure(err: clap::Error, json: bool) -> ExitCode {
    if !json {
        err.exit();
    }
    match classify_clap_error(&err) {
        Some(e) => report(&e, OutputFormat::Json, false),
        None => err.exit(),
    }
}

/// `None` for help and version output, which clap prints itself.
fn classify_clap_error(err: &clap::Error) -> Option<PlanarError> {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => None,
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::ArgumentConflict => Some(PlanarError::UsageError(err.to_string())),
        _ => Some(PlanarError::Other(err.to_string())),
    }
}

fn report(err: &PlanarError, format: OutputFormat, quiet: bool) -> ExitCode {
    if format == OutputFormat::Json {
        eprintln!("{}", err.to_json());
    } else if !quiet {
        eprintln!("error: {}", err);
    }
    ExitCode::from(err.exit_code() as u8)
}

/// Last `--format` on the command line wins, matching how clap resolves it.
fn wants_json<I>(args: I) -> bool
where
    I: IntoIterator<Item = String>,
{
    let mut json = false;
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let value = match arg.strip_prefix("--format") {
            Some("") => args.next(),
            Some(rest) => rest.strip_prefix('=').map(str::to_string),
            None => continue,
        };
        if let Some(value) = value {
            json = value.eq_ignore_ascii_case("json");
        }
    }
    json
}
