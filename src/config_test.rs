// Tests for the settings module

use super::*;
use serial_test::serial;
use std::collections::HashMap;
use tempfile::TempDir;

/// Helper to write a settings file into a temporary directory
fn write_settings(content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(SETTINGS_FILE);
    fs::write(&path, content).unwrap();
    (path, temp_dir)
}

#[test]
fn test_defaults() {
    let settings = Settings::default();

    assert_eq!(settings.dictionary.bind_addr, "127.0.0.1:9091");
    assert_eq!(settings.dictionary.words_path, None);
    assert_eq!(settings.aggregator.bind_addr, "127.0.0.1:9090");
    assert_eq!(settings.aggregator.dictionary_url, "http://localhost:9091");
    assert_eq!(settings.aggregator.request_timeout(), None);
    assert_eq!(settings.log, LogSettings::default());
    assert!(settings.validate_dictionary().is_ok());
    assert!(settings.validate_aggregator().is_ok());
}

#[test]
fn test_from_file_partial_settings_keep_defaults() {
    let (path, _temp_dir) = write_settings(
        r#"{
            "dictionary": { "wordsPath": "/srv/words.json" },
            "aggregator": { "requestTimeoutMs": 2500 }
        }"#,
    );

    let settings = Settings::from_file(&path).unwrap();

    assert_eq!(settings.dictionary.bind_addr, DEFAULT_DICTIONARY_BIND);
    assert_eq!(
        settings.dictionary.words_path,
        Some(PathBuf::from("/srv/words.json"))
    );
    assert_eq!(settings.aggregator.dictionary_url, "http://localhost:9091");
    assert_eq!(
        settings.aggregator.request_timeout(),
        Some(Duration::from_millis(2500))
    );
}

#[test]
fn test_from_file_full_settings() {
    let (path, _temp_dir) = write_settings(
        r#"{
            "dictionary": { "bindAddr": "0.0.0.0:7001" },
            "aggregator": { "bindAddr": "0.0.0.0:7000", "dictionaryUrl": "http://dict:7001" },
            "log": { "level": "debug", "file": "/var/log/lexicon.log" }
        }"#,
    );

    let settings = Settings::from_file(&path).unwrap();

    assert_eq!(settings.dictionary.socket_addr().unwrap().port(), 7001);
    assert_eq!(settings.aggregator.socket_addr().unwrap().port(), 7000);
    assert_eq!(settings.aggregator.dictionary_url, "http://dict:7001");
    assert_eq!(settings.log.level.as_deref(), Some("debug"));
    assert_eq!(settings.log.file, Some(PathBuf::from("/var/log/lexicon.log")));
}

#[test]
fn test_load_explicit_missing_file_is_read_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.json");

    let result = Settings::load(Some(&path));
    assert!(matches!(result, Err(ConfigError::ReadError { .. })));
}

#[test]
fn test_from_file_invalid_json_is_parse_error() {
    let (path, _temp_dir) = write_settings("{ not json");

    let result = Settings::from_file(&path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn test_default_path_ends_with_app_settings() {
    if let Some(path) = Settings::default_path() {
        assert!(path.ends_with("lexicon/settings.json") || path.ends_with("lexicon\\settings.json"));
    }
}

#[test]
fn test_apply_overrides_from_lookup() {
    let values: HashMap<&str, &str> = [
        (env_vars::DICTIONARY_BIND, "127.0.0.1:8001"),
        (env_vars::WORDS_PATH, "/data/words.json"),
        (env_vars::AGGREGATOR_BIND, "127.0.0.1:8000"),
        (env_vars::DICTIONARY_URL, "http://127.0.0.1:8001"),
        (env_vars::LOG_LEVEL, "trace"),
    ]
    .into_iter()
    .collect();

    let mut settings = Settings::default();
    settings.apply_overrides(|key| values.get(key).map(|v| v.to_string()));

    assert_eq!(settings.dictionary.bind_addr, "127.0.0.1:8001");
    assert_eq!(
        settings.dictionary.words_path,
        Some(PathBuf::from("/data/words.json"))
    );
    assert_eq!(settings.aggregator.bind_addr, "127.0.0.1:8000");
    assert_eq!(settings.aggregator.dictionary_url, "http://127.0.0.1:8001");
    assert_eq!(settings.log.level.as_deref(), Some("trace"));
}

#[test]
fn test_apply_overrides_ignores_empty_values() {
    let mut settings = Settings::default();
    settings.apply_overrides(|_| Some("  ".to_string()));

    assert_eq!(settings, Settings::default());
}

#[test]
#[serial(lexicon_env)]
fn test_apply_env_overrides_reads_process_environment() {
    std::env::set_var(env_vars::DICTIONARY_URL, "http://env-host:9999");

    let mut settings = Settings::default();
    settings.apply_env_overrides();

    std::env::remove_var(env_vars::DICTIONARY_URL);
    assert_eq!(settings.aggregator.dictionary_url, "http://env-host:9999");
}

#[test]
fn test_validate_rejects_bad_bind_addr() {
    let mut settings = Settings::default();
    settings.dictionary.bind_addr = "localhost".to_string();

    match settings.validate_dictionary() {
        Err(ConfigError::InvalidValue { key, value, .. }) => {
            assert_eq!(key, "dictionary.bindAddr");
            assert_eq!(value, "localhost");
        }
        other => panic!("Expected InvalidValue, got {:?}", other),
    }
}

#[test]
fn test_validate_rejects_bad_dictionary_url() {
    let mut settings = Settings::default();
    settings.aggregator.dictionary_url = "not a url".to_string();

    assert!(matches!(
        settings.validate_aggregator(),
        Err(ConfigError::InvalidValue { key, .. }) if key == "aggregator.dictionaryUrl"
    ));
}

#[test]
fn test_validate_rejects_unknown_log_level() {
    let mut settings = Settings::default();
    settings.log.level = Some("loud".to_string());

    for result in [settings.validate_dictionary(), settings.validate_aggregator()] {
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { key, .. }) if key == "log.level"
        ));
    }
}

#[test]
fn test_each_service_ignores_the_other_section() {
    let mut settings = Settings::default();
    settings.aggregator.bind_addr = "nowhere".to_string();
    settings.aggregator.dictionary_url = "not a url".to_string();
    assert!(settings.validate_dictionary().is_ok());
    assert!(settings.validate_aggregator().is_err());

    let mut settings = Settings::default();
    settings.dictionary.bind_addr = "nowhere".to_string();
    assert!(settings.validate_aggregator().is_ok());
    assert!(settings.validate_dictionary().is_err());
}
