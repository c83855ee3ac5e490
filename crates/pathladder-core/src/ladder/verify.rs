//! Post-hoc ladder validation

use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

use crate::ladder::adjacency::is_adjacent;
use crate::ladder::dictionary::Dictionary;

/// One problem found in a ladder
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LadderViolation {
    #[error("ladder is empty or has only one word")]
    TooShort { length: usize },

    #[error("repeated word found in ladder: {word}")]
    RepeatedWord { word: String },

    #[error("word not found in dictionary: {word}")]
    NotInDictionary { word: String },

    #[error("words are not adjacent: {from} -> {to}")]
    NotAdjacent { from: String, to: String },
}

impl LadderViolation {
    /// Stable identifier for records and JSON output
    pub fn kind(&self) -> &'static str {
        match self {
            LadderViolation::TooShort { .. } => "too_short",
            LadderViolation::RepeatedWord { .. } => "repeated_word",
            LadderViolation::NotInDictionary { .. } => "not_in_dictionary",
            LadderViolation::NotAdjacent { .. } => "not_adjacent",
        }
    }
}

/// Check every ladder rule and report all violations.
///
/// The first word may be absent from the dictionary since it is usually
/// supplied by the user.
pub fn verify_ladder<S: AsRef<str>>(ladder: &[S], dictionary: &Dictionary) -> Vec<LadderViolation> {
    let words: Vec<&str> = ladder.iter().map(|w| w.as_ref()).collect();
    let mut violations = Vec::new();

    if words.len() < 2 {
        violations.push(LadderViolation::TooShort { length: words.len() });
    }

    let mut seen = HashSet::new();
    for word in &words {
        if !seen.insert(*word) {
            violations.push(LadderViolation::RepeatedWord {
                word: word.to_string(),
            });
        }
    }

    for word in words.iter().skip(1) {
        if !dictionary.contains(word) {
            violations.push(LadderViolation::NotInDictionary {
                word: word.to_string(),
            });
        }
    }

    for pair in words.windows(2) {
        if !is_adjacent(pair[0], pair[1]) {
            violations.push(LadderViolation::NotAdjacent {
                from: pair[0].to_string(),
                to: pair[1].to_string(),
            });
        }
    }

    for violation in &violations {
        tracing::debug!(kind = violation.kind(), "{}", violation);
    }

    violations
}
