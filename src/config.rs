// Service settings - defaults, settings.json, LEXICON_* environment overrides
// Command-line flags are applied on top by the binaries, so the last source wins.
// Values stay as strings until validated, so a bad one is reported with its key.
// Each service validates only its own section plus logging.

use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Directory name under the platform config dir
pub const APP_DIR: &str = "lexicon";

/// Settings file name inside `APP_DIR`
pub const SETTINGS_FILE: &str = "settings.json";

pub const DEFAULT_DICTIONARY_BIND: &str = "127.0.0.1:9091";
pub const DEFAULT_AGGREGATOR_BIND: &str = "127.0.0.1:9090";

/// Environment variables that override file settings
pub mod env_vars {
    pub const DICTIONARY_BIND: &str = "LEXICON_DICTIONARY_BIND";
    pub const WORDS_PATH: &str = "LEXICON_WORDS_PATH";
    pub const AGGREGATOR_BIND: &str = "LEXICON_AGGREGATOR_BIND";
    pub const DICTIONARY_URL: &str = "LEXICON_DICTIONARY_URL";
    pub const LOG_LEVEL: &str = "LEXICON_LOG_LEVEL";
}

/// Error types for loading and validating settings
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read settings file {path}: {message}")]
    ReadError { path: String, message: String },
    #[error("Failed to parse settings file {path}: {message}")]
    ParseError { path: String, message: String },
    #[error("Invalid value for {key}: '{value}' ({message})")]
    InvalidValue {
        key: String,
        value: String,
        message: String,
    },
}

/// Dictionary service settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DictionarySettings {
    /// Listen address
    pub bind_addr: String,
    /// JSON word file; the embedded seed dictionary is used when unset
    pub words_path: Option<PathBuf>,
}

impl Default for DictionarySettings {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_DICTIONARY_BIND.to_string(),
            words_path: None,
        }
    }
}

impl DictionarySettings {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        parse_socket_addr("dictionary.bindAddr", &self.bind_addr)
    }
}

/// Aggregator service settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AggregatorSettings {
    /// Listen address
    pub bind_addr: String,
    /// Base URL of the dictionary service
    pub dictionary_url: String,
    /// Per-request timeout for dictionary service calls; none when unset
    pub request_timeout_ms: Option<u64>,
}

impl Default for AggregatorSettings {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_AGGREGATOR_BIND.to_string(),
            dictionary_url: crate::aggregator::DEFAULT_DICTIONARY_URL.to_string(),
            request_timeout_ms: None,
        }
    }
}

impl AggregatorSettings {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        parse_socket_addr("aggregator.bindAddr", &self.bind_addr)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogSettings {
    /// trace, debug, info, warn, error or off; build-dependent default when unset
    pub level: Option<String>,
    /// Also append log lines to this file
    pub file: Option<PathBuf>,
}

/// All settings for both services
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub dictionary: DictionarySettings,
    pub aggregator: AggregatorSettings,
    pub log: LogSettings,
}

impl Settings {
    /// `<config_dir>/lexicon/settings.json`, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE))
    }

    /// Load settings.
    ///
    /// An explicit path must exist. Without one, the default path is used when
    /// present and built-in defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => {
                crate::debug!("No settings file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Parse a settings file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        crate::debug!("Loading settings from {:?}", path);

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `LEXICON_*` environment variables
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup. Empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(value) = get(env_vars::DICTIONARY_BIND) {
            self.dictionary.bind_addr = value;
        }
        if let Some(value) = get(env_vars::WORDS_PATH) {
            self.dictionary.words_path = Some(PathBuf::from(value));
        }
        if let Some(value) = get(env_vars::AGGREGATOR_BIND) {
            self.aggregator.bind_addr = value;
        }
        if let Some(value) = get(env_vars::DICTIONARY_URL) {
            self.aggregator.dictionary_url = value;
        }
        if let Some(value) = get(env_vars::LOG_LEVEL) {
            self.log.level = Some(value);
        }
    }

    /// Check the values the dictionary service uses
    pub fn validate_dictionary(&self) -> Result<(), ConfigError> {
        self.dictionary.socket_addr()?;
        self.validate_log()
    }

    /// Check the values the aggregator service uses
    pub fn validate_aggregator(&self) -> Result<(), ConfigError> {
        self.aggregator.socket_addr()?;

        reqwest::Url::parse(&self.aggregator.dictionary_url).map_err(|e| {
            ConfigError::InvalidValue {
                key: "aggregator.dictionaryUrl".to_string(),
                value: self.aggregator.dictionary_url.clone(),
                message: e.to_string(),
            }
        })?;

        self.validate_log()
    }

    fn validate_log(&self) -> Result<(), ConfigError> {
        if let Some(level) = &self.log.level {
            crate::logging::parse_level(level).map_err(|e| ConfigError::InvalidValue {
                key: "log.level".to_string(),
                value: level.clone(),
                message: e.to_string(),
            })?;
        }
        Ok(())
    }
}

fn parse_socket_addr(key: &str, value: &str) -> Result<SocketAddr, ConfigError> {
    value.parse().map_err(|e: std::net::AddrParseError| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
