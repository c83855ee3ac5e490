//! Configuration type definitions

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default dictionary file, resolved relative to the working directory
pub const DEFAULT_DICTIONARY: &str = "words.txt";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Shortest-path defaults
    #[serde(default)]
    pub graph: GraphConfig,

    /// Word-ladder defaults
    #[serde(default)]
    pub ladder: LadderConfig,
}

/// Defaults for the `paths` command
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Graph file used when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    /// Source vertex used when `--source` is omitted
    #[serde(default)]
    pub source: usize,
}

/// Defaults for the `ladder` and `verify` commands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LadderConfig {
    /// Whitespace-delimited word list
    #[serde(default = "default_dictionary")]
    pub dictionary: PathBuf,

    /// Lowercase dictionary and query words before searching
    #[serde(default)]
    pub lowercase: bool,

    /// Run ladder verification after a successful search
    #[serde(default = "default_verify")]
    pub verify: bool,
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self {
            dictionary: default_dictionary(),
            lowercase: false,
            verify: default_verify(),
        }
    }
}

fn default_dictionary() -> PathBuf {
    PathBuf::from(DEFAULT_DICTIONARY)
}

fn default_verify() -> bool {
    true
}
