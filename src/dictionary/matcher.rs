// Word matcher - exact lookup and pattern predicates over the word store
// Pure functions: no query ever fails, zero matches is an empty result

use crate::dictionary::store::{Entry, WordStore};
use std::sync::Arc;

/// A query against the word store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// The entry stored under exactly this word
    Exact(String),
    /// Words starting with the pattern
    Prefix(String),
    /// Words ending with the pattern
    Suffix(String),
    /// Words containing the pattern anywhere
    Substring(String),
    /// Words with at least one pair of identical adjacent characters
    HasConsecutiveDoubleLetter,
}

/// Result of running a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// Exact lookup: the entry, or None when the word is absent
    Single(Option<Entry>),
    /// Pattern query: every matching entry, in store order
    Many(Vec<Entry>),
}

/// True when any two adjacent characters of `word` are equal ("book", "deer").
/// Case-sensitive; compares Unicode scalar values, not bytes.
pub fn has_consecutive_double_letter(word: &str) -> bool {
    word.chars().zip(word.chars().skip(1)).any(|(a, b)| a == b)
}

/// Matching engine over a shared, read-only word store
#[derive(Debug, Clone)]
pub struct MatchEngine {
    store: Arc<WordStore>,
}

impl MatchEngine {
    pub fn new(store: Arc<WordStore>) -> Self {
        Self { store }
    }

    /// The underlying store
    pub fn store(&self) -> &WordStore {
        &self.store
    }

    /// Exact lookup. The empty string is a valid key when present.
    pub fn lookup_exact(&self, word: &str) -> Option<&Entry> {
        self.store.get(word)
    }

    /// All entries whose word starts with `prefix`; the empty prefix matches everything
    pub fn match_prefix(&self, prefix: &str) -> Vec<&Entry> {
        self.filter(|word| word.starts_with(prefix))
    }

    /// All entries whose word ends with `suffix`
    pub fn match_suffix(&self, suffix: &str) -> Vec<&Entry> {
        self.filter(|word| word.ends_with(suffix))
    }

    /// All entries whose word contains `fragment`, including prefix and suffix positions
    pub fn match_substring(&self, fragment: &str) -> Vec<&Entry> {
        self.filter(|word| word.contains(fragment))
    }

    /// All entries whose word has at least one adjacent equal character pair
    pub fn match_consecutive_double_letters(&self) -> Vec<&Entry> {
        self.filter(has_consecutive_double_letter)
    }

    /// Evaluate any query variant into owned results
    pub fn run(&self, query: &Query) -> QueryOutcome {
        let many = |matches: Vec<&Entry>| QueryOutcome::Many(matches.into_iter().cloned().collect());

        match query {
            Query::Exact(word) => QueryOutcome::Single(self.lookup_exact(word).cloned()),
            Query::Prefix(prefix) => many(self.match_prefix(prefix)),
            Query::Suffix(suffix) => many(self.match_suffix(suffix)),
            Query::Substring(fragment) => many(self.match_substring(fragment)),
            Query::HasConsecutiveDoubleLetter => many(self.match_consecutive_double_letters()),
        }
    }

    /// Single pass over the store; each entry is tested once so none repeats
    fn filter<F>(&self, predicate: F) -> Vec<&Entry>
    where
        F: Fn(&str) -> bool,
    {
        self.store
            .entries()
            .iter()
            .filter(|entry| predicate(&entry.word))
            .collect()
    }
}

#[cfg(test)]
#[path = "matcher_test.rs"]
mod tests;
