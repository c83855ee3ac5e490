//! Interactive prompts for ladder words missing from the command line

use std::io::{self, BufRead, Write};

use pathladder_core::error::Result;

/// Use the given words, prompting on stdin for any that are missing.
/// Prompts go to stderr so stdout stays clean for json/records output.
pub fn resolve_words(begin: Option<&str>, end: Option<&str>) -> Result<(String, String)> {
    if let (Some(begin), Some(end)) = (begin, end) {
        return Ok((check_word("start word", begin)?, check_word("end word", end)?));
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stderr();

    let begin = match begin {
        Some(word) => check_word("start word", word)?,
        None => prompt_word("Enter start word: ", &mut input, &mut output)?,
    };
    let end = match end {
        Some(word) => check_word("end word", word)?,
        None => prompt_word("Enter end word: ", &mut input, &mut output)?,
    };
    Ok((begin, end))
}

/// A ladder word given as an argument must be a single non-empty token
fn check_word(context: &str, word: &str) -> Result<String> {
    if word.is_empty() || word.chars().any(char::is_whitespace) {
        pathladder_core::bail_invalid!(context, format!("{:?}", word));
    }
    Ok(word.to_string())
}

/// Print `label` and read the first word of the next input line
pub fn prompt_word<R: BufRead, W: Write>(label: &str, input: &mut R, output: &mut W) -> Result<String> {
    write!(output, "{}", label)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    match line.split_whitespace().next() {
        Some(word) => Ok(word.to_string()),
        None => pathladder_core::bail_usage!(format!(
            "no word entered for `{}`",
            label.trim_end_matches(|c: char| c == ':' || c == ' ')
        )),
    }
}
