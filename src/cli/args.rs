use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct PathsArgs {
    /// Edge-list graph file (default: graph.file from config)
    pub graph: Option<PathBuf>,

    /// Source vertex (default: graph.source from config)
    #[arg(long, short)]
    pub source: Option<usize>,

    /// Only report the path to this vertex
    #[arg(long)]
    pub to: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct LadderArgs {
    /// Start word (prompted for when omitted)
    pub begin: Option<String>,

    /// End word (prompted for when omitted)
    pub end: Option<String>,

    /// Word list file (default: ladder.dictionary from config)
    #[arg(long, short)]
    pub dict: Option<PathBuf>,

    /// Lowercase dictionary and query words
    #[arg(long)]
    pub lowercase: bool,

    /// Skip verifying the ladder after it is found
    #[arg(long)]
    pub no_verify: bool,
}

#[derive(Args, Debug, Clone)]
pub struct VerifyArgs {
    /// Ladder words in order
    #[arg(required = true, num_args = 1..)]
    pub words: Vec<String>,

    /// Word list file (default: ladder.dictionary from config)
    #[arg(long, short)]
    pub dict: Option<PathBuf>,

    /// Lowercase dictionary and ladder words
    #[arg(long)]
    pub lowercase: bool,
}

#[derive(Args, Debug, Clone)]
pub struct AdjacentArgs {
    pub first: String,

    pub second: String,

    /// Test for edit distance at most N instead of exactly one edit
    #[arg(long, value_name = "N")]
    pub within: Option<usize>,
}
