// Dictionary service - the word matcher behind a request/response boundary
// Exact lookup is the only operation with a failure kind; pattern queries
// always succeed with a (possibly empty) list.

use crate::dictionary::matcher::MatchEngine;
use crate::dictionary::store::{Entry, WordStore};
use std::sync::Arc;

/// Error types for dictionary service operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DictionaryError {
    /// No entry is stored under the requested word
    #[error("Word '{0}' not found")]
    WordNotFound(String),
}

/// Dictionary service over a shared word store
#[derive(Debug, Clone)]
pub struct DictionaryService {
    engine: MatchEngine,
}

impl DictionaryService {
    /// Create a service that owns a handle to the given store
    pub fn new(store: Arc<WordStore>) -> Self {
        Self {
            engine: MatchEngine::new(store),
        }
    }

    /// Look up a single word
    ///
    /// # Returns
    /// The entry, or `DictionaryError::WordNotFound` when the word is absent.
    /// The empty word is looked up like any other key.
    pub fn get_word(&self, word: &str) -> Result<Entry, DictionaryError> {
        match self.engine.lookup_exact(word) {
            Some(entry) => Ok(entry.clone()),
            None => {
                crate::debug!("Word '{}' not found", word);
                Err(DictionaryError::WordNotFound(word.to_string()))
            }
        }
    }

    /// Same lookup as [`get_word`](Self::get_word), exposed under the query-style name
    pub fn entry_by_word(&self, word: &str) -> Result<Entry, DictionaryError> {
        self.get_word(word)
    }

    pub fn get_words_starting_with(&self, prefix: &str) -> Vec<Entry> {
        owned(self.engine.match_prefix(prefix))
    }

    pub fn get_words_containing(&self, fragment: &str) -> Vec<Entry> {
        owned(self.engine.match_substring(fragment))
    }

    pub fn get_words_ending_with(&self, suffix: &str) -> Vec<Entry> {
        owned(self.engine.match_suffix(suffix))
    }

    pub fn get_words_with_consecutive_double_letters(&self) -> Vec<Entry> {
        owned(self.engine.match_consecutive_double_letters())
    }

    /// Number of words in the backing store
    pub fn word_count(&self) -> usize {
        self.engine.store().len()
    }
}

fn owned(entries: Vec<&Entry>) -> Vec<Entry> {
    entries.into_iter().cloned().collect()
}

#[cfg(test)]
#[path = "service_test.rs"]
mod tests;
