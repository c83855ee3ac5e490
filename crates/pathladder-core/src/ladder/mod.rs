//! Word ladders
//!
//! A ladder connects two words through dictionary words where each step is a
//! single-character substitution, insertion or deletion.
//!
//! - `adjacency`: the single-edit predicate and bounded edit distance
//! - `dictionary`: word list loading
//! - `search`: breadth-first shortest ladder search
//! - `verify`: post-hoc validation of a ladder

pub mod adjacency;
pub mod dictionary;
pub mod search;
pub mod verify;

pub use adjacency::{edit_distance_within, is_adjacent};
pub use dictionary::Dictionary;
pub use search::{find_ladder, Ladder};
pub use verify::{verify_ladder, LadderViolation};
