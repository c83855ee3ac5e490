//! `pathladder ladder` command - shortest word ladder between two words

pub mod human;
pub mod json;
pub mod prompt;
pub mod records;

use serde::Serialize;

use crate::cli::LadderArgs;
use crate::commands::dispatch::CommandContext;
use pathladder_core::error::{PathladderError, Result};
use pathladder_core::ladder::{find_ladder, verify_ladder, Dictionary, Ladder, LadderViolation};

#[derive(Debug, Clone, Serialize)]
pub struct LadderReport {
    pub begin: String,
    pub end: String,
    pub length: usize,
    pub ladder: Ladder,
    pub violations: Vec<LadderViolation>,
}

/// Load the dictionary named on the command line or in config.
/// An unreadable file degrades to an empty dictionary.
pub(crate) fn load_dictionary(
    ctx: &CommandContext,
    dict: Option<&std::path::Path>,
    lowercase: bool,
) -> Dictionary {
    let path = dict.unwrap_or(ctx.config.ladder.dictionary.as_path());
    let dictionary = Dictionary::load_or_empty(path);
    ctx.trace_phase("load_dictionary");
    if lowercase {
        dictionary.to_lowercase()
    } else {
        dictionary
    }
}

/// Execute the ladder command
pub fn execute(ctx: &CommandContext, args: &LadderArgs) -> Result<()> {
    let cli = ctx.cli;
    let lowercase = args.lowercase || ctx.config.ladder.lowercase;

    let (mut begin, mut end) = prompt::resolve_words(args.begin.as_deref(), args.end.as_deref())?;
    if lowercase {
        begin = begin.to_lowercase();
        end = end.to_lowercase();
    }
    if begin == end {
        return Err(PathladderError::SameWord { word: begin });
    }

    let dictionary = load_dictionary(ctx, args.dict.as_deref(), lowercase);
    let ladder = find_ladder(&begin, &end, &dictionary)?;
    ctx.trace_phase("find_ladder");
    if ladder.is_empty() {
        return Err(PathladderError::LadderNotFound { begin, end });
    }

    let violations = if ctx.config.ladder.verify && !args.no_verify {
        verify_ladder(&ladder, &dictionary)
    } else {
        Vec::new()
    };

    let report = LadderReport {
        begin,
        end,
        length: ladder.len(),
        ladder,
        violations,
    };

    crate::output_by_format_result!(cli.format,
        json => json::output_ladder_json(&report),
        human => {
            human::output_ladder_human(&report, cli.quiet);
        },
        records => {
            records::output_ladder_records(&report);
        }
    )
}
