//! Configuration file handling
//!
//! Settings are read from a TOML file, by default
//! `<config dir>/wuurdle/config.toml`:
//!
//! ```toml
//! [api]
//! word_url = "https://random-word-api.herokuapp.com/word?length=5"
//! dictionary_url = "https://api.dictionaryapi.dev/api/v2/entries/en/"
//! # request_timeout_secs = 10
//!
//! [word_source]
//! # max_attempts = 50
//!
//! [log]
//! level = "info"
//! # file = "/tmp/wuurdle.log"
//! ```
//!
//! Every key is optional; missing keys fall back to the defaults above.

use crate::api::{DEFAULT_DICTIONARY_URL, DEFAULT_WORD_URL, HttpWordApi};
use crate::word_source::RetryPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub word_source: WordSourceConfig,
    pub log: LogConfig,
}

/// Remote service endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub word_url: String,
    /// Base URL; the looked-up word is appended verbatim
    pub dictionary_url: String,
    /// Per-request timeout; requests wait indefinitely when unset
    pub request_timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            word_url: DEFAULT_WORD_URL.to_string(),
            dictionary_url: DEFAULT_DICTIONARY_URL.to_string(),
            request_timeout_secs: None,
        }
    }
}

impl ApiConfig {
    /// Build the HTTP client for these endpoints
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn client(&self) -> Result<HttpWordApi, reqwest::Error> {
        HttpWordApi::new(
            self.word_url.clone(),
            self.dictionary_url.clone(),
            self.request_timeout_secs.map(Duration::from_secs),
        )
    }
}

/// Secret word selection settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordSourceConfig {
    /// Candidates to draw before giving up; unlimited when unset
    pub max_attempts: Option<u32>,
}

impl WordSourceConfig {
    #[must_use]
    pub const fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_attempts,
        }
    }
}

/// Log output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive, e.g. "info" or "wuurdle=debug"
    pub level: String,
    /// Log file; defaults to `<cache dir>/wuurdle/wuurdle.log`
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl LogConfig {
    /// Resolved log file location
    #[must_use]
    pub fn file_path(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .map(|dir| dir.join("wuurdle"))
                .unwrap_or_default()
                .join("wuurdle.log")
        })
    }
}

impl Config {
    /// Load configuration
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// tried and a missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Parse a configuration file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Default config file location
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("wuurdle").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_point_at_public_services() {
        let config = Config::default();
        assert_eq!(config.api.word_url, DEFAULT_WORD_URL);
        assert_eq!(config.api.dictionary_url, DEFAULT_DICTIONARY_URL);
        assert_eq!(config.api.request_timeout_secs, None);
        assert_eq!(config.word_source.retry_policy(), RetryPolicy::UNBOUNDED);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let file = write_config(
            r#"
            [api]
            request_timeout_secs = 10

            [word_source]
            max_attempts = 25
            "#,
        );

        let config = Config::load(Some(file.path())).unwrap();

        assert_eq!(config.api.request_timeout_secs, Some(10));
        assert_eq!(config.api.word_url, DEFAULT_WORD_URL);
        assert_eq!(config.word_source.retry_policy(), RetryPolicy::bounded(25));
        assert_eq!(config.log, LogConfig::default());
    }

    #[test]
    fn log_file_override() {
        let file = write_config(
            r#"
            [log]
            level = "wuurdle=debug"
            file = "/tmp/custom.log"
            "#,
        );

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.log.level, "wuurdle=debug");
        assert_eq!(config.log.file_path(), PathBuf::from("/tmp/custom.log"));
    }

    #[test]
    fn missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn malformed_file_is_error() {
        let file = write_config("[api\nword_url = 3");
        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn roundtrips_through_toml() {
        let mut config = Config::default();
        config.word_source.max_attempts = Some(3);
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
