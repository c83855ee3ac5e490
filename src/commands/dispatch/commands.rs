//! Command implementations for all pathladder commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{adjacent, ladder, paths, verify};
use pathladder_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let result = match self {
            Commands::Paths(args) => paths::execute(ctx, args),
            Commands::Ladder(args) => ladder::execute(ctx, args),
            Commands::Verify(args) => verify::execute(ctx, args),
            Commands::Adjacent(args) => adjacent::execute(ctx, args),
        };
        ctx.trace_phase("execute_command");
        result
    }
}
