//! Word dictionary loaded from a whitespace-delimited word list

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::error::{PathladderError, Result};

/// Set of distinct words.
///
/// Iteration is in sorted order, which keeps ladder search deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: BTreeSet<String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split `input` on any whitespace into a dictionary
    pub fn parse(input: &str) -> Self {
        input.split_whitespace().map(str::to_string).collect()
    }

    /// Read a word list file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| PathladderError::io_operation("read dictionary", path.display(), e))?;
        let dictionary = Self::parse(&content);
        tracing::debug!(path = %path.display(), words = dictionary.len(), "dictionary_loaded");
        Ok(dictionary)
    }

    /// Read a word list file, degrading to an empty dictionary when it
    /// cannot be read. The failure is logged, not returned.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load(path) {
            Ok(dictionary) => dictionary,
            Err(e) => {
                tracing::warn!(error = %e, "dictionary_unavailable");
                Self::default()
            }
        }
    }

    /// Copy of this dictionary with every word lowercased
    pub fn to_lowercase(&self) -> Self {
        self.words.iter().map(|w| w.to_lowercase()).collect()
    }

    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        self.words.insert(word.into())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.words.iter()
    }
}

impl FromIterator<String> for Dictionary {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for Dictionary {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(str::to_string).collect()
    }
}
