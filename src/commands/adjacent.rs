//! `pathladder adjacent` command - single-edit test between two words

use crate::cli::AdjacentArgs;
use crate::commands::dispatch::CommandContext;
use pathladder_core::error::Result;
use pathladder_core::ladder::{edit_distance_within, is_adjacent};

/// Execute the adjacent command
pub fn execute(ctx: &CommandContext, args: &AdjacentArgs) -> Result<()> {
    let result = match args.within {
        Some(distance) => edit_distance_within(&args.first, &args.second, distance),
        None => is_adjacent(&args.first, &args.second),
    };

    crate::output_by_format_result!(ctx.cli.format,
        json => {
            println!(
                "{}",
                serde_json::json!({
                    "first": args.first,
                    "second": args.second,
                    "within": args.within,
                    "result": result,
                })
            );
            Ok(())
        },
        human => {
            println!("{}", result);
        },
        records => {
            let within = args
                .within
                .map_or_else(|| "-".to_string(), |d| d.to_string());
            println!(
                "H pathladder=1 records=1 mode=adjacent first={} second={} within={} result={}",
                args.first, args.second, within, result
            );
        }
    )
}
