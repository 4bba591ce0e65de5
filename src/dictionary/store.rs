// Word store - the read-only word -> definition mapping behind every query
// Populated once at startup from a JSON word file or the embedded seed dictionary,
// then shared (via Arc) between request handlers without locking.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Seed dictionary compiled into the binary, used when no word file is configured
const SEED_DICTIONARY: &str = include_str!("../../data/seed_dictionary.json");

/// A word and its definition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Entry {
    /// The word itself (the store key)
    pub word: String,
    /// Definition text, may be empty
    pub definition: String,
}

impl Entry {
    pub fn new(word: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            definition: definition.into(),
        }
    }
}

/// Error types for loading the word store
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    /// The word file could not be read
    #[error("Failed to read word file {path}: {message}")]
    ReadError { path: String, message: String },
    /// The word file content is not a recognised layout
    #[error("Failed to parse word file: {0}")]
    ParseError(String),
}

/// Accepted word file layouts
#[derive(Deserialize)]
#[serde(untagged)]
enum WordFile {
    /// `[{"word": "...", "definition": "..."}, ...]`
    Entries(Vec<Entry>),
    /// `{"word": "definition", ...}`
    Definitions(serde_json::Map<String, serde_json::Value>),
}

/// Immutable word -> entry mapping.
///
/// Entries keep the order in which they were loaded; pattern queries report
/// matches in that order. At most one entry exists per word: when a source
/// repeats a word, the later definition replaces the earlier one in place.
#[derive(Debug, Clone, Default)]
pub struct WordStore {
    /// Entries in load order
    entries: Vec<Entry>,
    /// Word -> position in `entries`
    index: HashMap<String, usize>,
}

impl WordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from entries, in iteration order
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = Entry>,
    {
        let mut store = Self::new();
        for entry in entries {
            store.insert(entry);
        }
        store
    }

    /// Load a store from a JSON word file
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        crate::debug!("Loading word file from {:?}", path);

        let content = fs::read_to_string(path).map_err(|e| StoreError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let store = Self::from_json(&content)?;
        crate::info!("Loaded {} words from {:?}", store.len(), path);
        Ok(store)
    }

    /// Load the seed dictionary embedded in the binary
    pub fn seed() -> Result<Self, StoreError> {
        let store = Self::from_json(SEED_DICTIONARY)?;
        crate::info!("Loaded {} words from the embedded seed dictionary", store.len());
        Ok(store)
    }

    /// Parse either word file layout
    pub fn from_json(content: &str) -> Result<Self, StoreError> {
        let file: WordFile =
            serde_json::from_str(content).map_err(|e| StoreError::ParseError(e.to_string()))?;

        match file {
            WordFile::Entries(entries) => Ok(Self::from_entries(entries)),
            WordFile::Definitions(map) => {
                let mut store = Self::new();
                for (word, value) in map {
                    let definition = match value {
                        serde_json::Value::String(definition) => definition,
                        other => {
                            return Err(StoreError::ParseError(format!(
                                "definition for '{}' must be a string, got {}",
                                word, other
                            )))
                        }
                    };
                    store.insert(Entry { word, definition });
                }
                Ok(store)
            }
        }
    }

    /// Insert during construction; replaces an existing word in place
    fn insert(&mut self, entry: Entry) {
        match self.index.get(&entry.word) {
            Some(&position) => {
                crate::debug!("Duplicate word '{}' in source, keeping later definition", entry.word);
                self.entries[position] = entry;
            }
            None => {
                self.index.insert(entry.word.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    /// Get the entry stored under exactly this word
    pub fn get(&self, word: &str) -> Option<&Entry> {
        self.index.get(word).map(|&position| &self.entries[position])
    }

    /// All entries in load order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Entry> for WordStore {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
