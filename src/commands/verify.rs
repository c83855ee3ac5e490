//! `pathladder verify` command - check a ladder against a dictionary

use crate::cli::VerifyArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::ladder::load_dictionary;
use pathladder_core::error::{PathladderError, Result};
use pathladder_core::ladder::verify_ladder;

/// Execute the verify command. Any violation fails with a data error.
pub fn execute(ctx: &CommandContext, args: &VerifyArgs) -> Result<()> {
    let cli = ctx.cli;
    let lowercase = args.lowercase || ctx.config.ladder.lowercase;
    let dictionary = load_dictionary(ctx, args.dict.as_deref(), lowercase);

    let words: Vec<String> = if lowercase {
        args.words.iter().map(|w| w.to_lowercase()).collect()
    } else {
        args.words.clone()
    };

    let violations = verify_ladder(&words, &dictionary);

    crate::output_by_format_result!(cli.format,
        json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "valid": violations.is_empty(),
                    "length": words.len(),
                    "ladder": words,
                    "violations": violations,
                }))?
            );
            Ok::<(), PathladderError>(())
        },
        human => {
            if violations.is_empty() {
                println!("Ladder is valid");
            }
            for violation in &violations {
                println!("{}: {}", violation.kind(), violation);
            }
        },
        records => {
            println!(
                "H pathladder=1 records=1 mode=verify valid={} length={} violations={}",
                violations.is_empty(),
                words.len(),
                violations.len()
            );
            for violation in &violations {
                println!("V {} {}", violation.kind(), violation);
            }
        }
    )?;

    if violations.is_empty() {
        Ok(())
    } else {
        Err(PathladderError::InvalidLadder {
            count: violations.len(),
        })
    }
}
