//! CLI argument parsing for pathladder
//!
//! Global flags: --config, --format, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod format;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{AdjacentArgs, LadderArgs, PathsArgs, VerifyArgs};
pub use pathladder_core::format::OutputFormat;
use parse::parse_output_format;

/// Pathladder - shortest weighted paths and word ladders
#[derive(Parser, Debug)]
#[command(name = "pathladder")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (default: ./pathladder.toml, then the user config directory)
    #[arg(long, global = true, env = "PATHLADDER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format: human, json, or records
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shortest paths from a source vertex to every vertex of a graph file
    Paths(PathsArgs),

    /// Find a shortest word ladder between two words
    Ladder(LadderArgs),

    /// Check a word ladder against a dictionary
    Verify(VerifyArgs),

    /// Test whether two words are one edit apart
    Adjacent(AdjacentArgs),
}
