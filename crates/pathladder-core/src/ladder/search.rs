use crate::error::{PathladderError, Result};
use crate::ladder::adjacency::is_adjacent;
use crate::ladder::dictionary::Dictionary;
use std::collections::{HashSet, VecDeque};

/// Ordered chain of words, each adjacent to the next
pub type Ladder = Vec<String>;

/// State tracked during one ladder search. Owned by the call, never shared.
struct LadderSearch<'a> {
    visited: HashSet<&'a str>,
    queue: VecDeque<Ladder>,
    expanded: usize,
}

impl<'a> LadderSearch<'a> {
    fn new(begin: &'a str) -> Self {
        Self {
            visited: HashSet::from([begin]),
            queue: VecDeque::from([vec![begin.to_string()]]),
            expanded: 0,
        }
    }
}

/// Find a shortest ladder from `begin` to `end` using dictionary words.
///
/// Breadth-first over partial ladders: each word joins at most one ladder,
/// at first discovery, so the first ladder reaching `end` is minimal. The
/// start word does not need to be in the dictionary; every later word does.
///
/// Returns an empty ladder when no chain exists.
#[tracing::instrument(skip(dictionary), fields(dictionary_size = dictionary.len()))]
pub fn find_ladder(begin: &str, end: &str, dictionary: &Dictionary) -> Result<Ladder> {
    if begin == end {
        return Err(PathladderError::SameWord {
            word: begin.to_string(),
        });
    }

    let mut search = LadderSearch::new(begin);

    while let Some(ladder) = search.queue.pop_front() {
        let Some(last) = ladder.last() else {
            continue;
        };
        search.expanded += 1;

        for word in dictionary.iter() {
            if search.visited.contains(word.as_str()) || !is_adjacent(last, word) {
                continue;
            }
            search.visited.insert(word);

            let mut next = ladder.clone();
            next.push(word.clone());
            if word == end {
                tracing::debug!(
                    length = next.len(),
                    expanded = search.expanded,
                    visited = search.visited.len(),
                    "ladder_found"
                );
                return Ok(next);
            }
            search.queue.push_back(next);
        }
    }

    tracing::debug!(
        expanded = search.expanded,
        visited = search.visited.len(),
        "no_ladder_found"
    );
    Ok(Vec::new())
}
