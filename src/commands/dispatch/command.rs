//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::Cli;
use pathladder_core::config::Config;
use pathladder_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a Config,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: &'a Config, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// Log time since startup for a named phase
    pub fn trace_phase(&self, phase: &'static str) {
        if self.cli.verbose {
            tracing::debug!(elapsed = ?self.start.elapsed(), "{}", phase);
        }
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("pathladder {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Shortest weighted paths and word ladders.");
        println!();
        println!("Run `pathladder --help` for usage information.");
        Ok(())
    }
}
