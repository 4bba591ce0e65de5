// Tests for WordStore
// Test cases:
// - Exact key lookup, including the empty word
// - Load order is preserved and duplicates replace in place
// - Both word file layouts load from disk; unreadable/invalid files are errors
// - Seed dictionary loads
// - Entry JSON round-trip keeps empty strings

use super::*;
use std::io::Write;
use tempfile::TempDir;

/// Helper to write a word file into a temporary directory
fn write_word_file(content: &str) -> (std::path::PathBuf, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("words.json");
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    (path, temp_dir)
}

#[test]
fn test_get_returns_entry_for_exact_key() {
    let store = WordStore::from_entries(vec![
        Entry::new("test", "definition"),
        Entry::new("testing", "another"),
    ]);

    assert_eq!(store.get("test"), Some(&Entry::new("test", "definition")));
    assert!(store.get("tes").is_none());
    assert!(store.get("Test").is_none());
}

#[test]
fn test_empty_word_is_a_valid_key() {
    let store = WordStore::from_entries(vec![Entry::new("", "empty")]);

    let entry = store.get("").unwrap();
    assert_eq!(entry.word, "");
    assert_eq!(entry.definition, "empty");
}

#[test]
fn test_entries_keep_load_order() {
    let store: WordStore = vec![
        Entry::new("walking", "def1"),
        Entry::new("apple", "def2"),
        Entry::new("deer", "def3"),
    ]
    .into_iter()
    .collect();

    let words: Vec<&str> = store.entries().iter().map(|e| e.word.as_str()).collect();
    assert_eq!(words, vec!["walking", "apple", "deer"]);
}

#[test]
fn test_duplicate_word_replaces_definition_in_place() {
    let store = WordStore::from_entries(vec![
        Entry::new("book", "first"),
        Entry::new("deer", "animal"),
        Entry::new("book", "second"),
    ]);

    assert_eq!(store.len(), 2);
    assert_eq!(store.entries()[0], Entry::new("book", "second"));
    assert_eq!(store.get("book").unwrap().definition, "second");
}

#[test]
fn test_new_store_is_empty() {
    let store = WordStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert!(store.get("").is_none());
}

#[test]
fn test_load_entry_array_file() {
    let (path, _temp_dir) = write_word_file(
        r#"[{"word": "apple", "definition": "fruit"}, {"word": "app", "definition": "application"}]"#,
    );

    let store = WordStore::load(&path).unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.get("app").unwrap().definition, "application");
}

#[test]
fn test_load_definition_map_file_keeps_order() {
    let (path, _temp_dir) = write_word_file(r#"{"zebra": "animal", "apple": "fruit", "": "nothing"}"#);

    let store = WordStore::load(&path).unwrap();
    let words: Vec<&str> = store.entries().iter().map(|e| e.word.as_str()).collect();
    assert_eq!(words, vec!["zebra", "apple", ""]);
    assert_eq!(store.get("").unwrap().definition, "nothing");
}

#[test]
fn test_load_missing_file_returns_read_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.json");

    let result = WordStore::load(&path);
    assert!(matches!(result, Err(StoreError::ReadError { .. })));
}

#[test]
fn test_load_invalid_json_returns_parse_error() {
    let (path, _temp_dir) = write_word_file("not json at all");

    let result = WordStore::load(&path);
    assert!(matches!(result, Err(StoreError::ParseError(_))));
}

#[test]
fn test_definition_map_rejects_non_string_definition() {
    let result = WordStore::from_json(r#"{"apple": 42}"#);
    match result {
        Err(StoreError::ParseError(message)) => assert!(message.contains("apple")),
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn test_empty_array_gives_empty_store() {
    let store = WordStore::from_json("[]").unwrap();
    assert!(store.is_empty());
}

#[test]
fn test_seed_dictionary_loads() {
    let store = WordStore::seed().unwrap();
    assert!(!store.is_empty());
    assert!(store.get("book").is_some());
    assert!(store.get("apple").is_some());
}

#[test]
fn test_entry_round_trip_preserves_empty_strings() {
    let entries = vec![Entry::new("", ""), Entry::new("word", "")];

    let json = serde_json::to_string(&entries).unwrap();
    let decoded: Vec<Entry> = serde_json::from_str(&json).unwrap();

    assert_eq!(decoded, entries);
}

#[test]
fn test_entry_wire_shape() {
    let json = serde_json::to_value(Entry::new("test", "definition")).unwrap();
    assert_eq!(json, serde_json::json!({"word": "test", "definition": "definition"}));
}
