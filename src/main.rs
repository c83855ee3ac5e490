//! Pathladder - shortest weighted paths and word ladders
//!
//! Runs Dijkstra's algorithm over edge-list graph files and finds
//! shortest word ladders through a dictionary.

mod cli;
mod commands;

use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::parse::requested_format;
use cli::{Cli, OutputFormat};
use pathladder_core::error::PathladderError;
use pathladder_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return report_parse_failure(err),
    };

    // --quiet drops warnings too unless a level was asked for
    let log_level = cli
        .log_level
        .as_deref()
        .or(cli.quiet.then_some("error"));
    if let Err(e) = logging::init_tracing(cli.verbose, log_level, cli.log_json) {
        eprintln!("warning: logging disabled: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), format = %cli.format, "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            report_error(&cli, &error);
            exit_code(&error)
        }
    }
}

/// clap prints its own diagnostics unless JSON output was requested, in
/// which case the failure becomes a usage error object on stderr.
fn report_parse_failure(err: clap::Error) -> ExitCode {
    let wants_json = requested_format(std::env::args().skip(1)) == Some(OutputFormat::Json);
    let informational = matches!(
        err.kind(),
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    );
    if !wants_json || informational {
        err.exit();
    }

    let error = PathladderError::UsageError(err.to_string().trim_end().to_string());
    eprintln!("{}", error.to_json());
    exit_code(&error)
}

fn report_error(cli: &Cli, error: &PathladderError) {
    if cli.format == OutputFormat::Json {
        eprintln!("{}", error.to_json());
        return;
    }
    if cli.quiet {
        return;
    }

    eprintln!("error: {}", error);
    match error {
        PathladderError::SameWord { .. } => {
            eprintln!("hint: a ladder needs two different words");
        }
        PathladderError::LadderNotFound { .. } => {
            eprintln!("hint: every step must be a dictionary word one edit from the last (see --dict)");
        }
        _ => {}
    }
}

fn exit_code(error: &PathladderError) -> ExitCode {
    ExitCode::from(error.exit_code() as u8)
}
