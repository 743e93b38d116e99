//! Application configuration, read from a RON file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use engine_logging::{LogDestination, LogLevel};
use serde::{Deserialize, Serialize};
use talent_core::ResponseOrdering;
use talent_source::HttpSettings;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("could not write config {path:?}: {message}")]
    Write { path: PathBuf, message: String },
}

/// Every field is optional in the file; missing ones take their default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: u64,
    pub response_ordering: ResponseOrdering,
    pub log_destination: LogDestination,
    pub log_level: LogLevel,
    pub log_file: PathBuf,
    /// Page size of the built-in offline data set.
    pub page_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        let http = HttpSettings::default();
        Self {
            base_url: http.base_url,
            connect_timeout_ms: duration_ms(http.connect_timeout),
            request_timeout_ms: duration_ms(http.request_timeout),
            response_ordering: ResponseOrdering::default(),
            log_destination: LogDestination::default(),
            log_level: LogLevel::Info,
            log_file: engine_logging::default_log_path(),
            page_size: 10,
        }
    }
}

impl AppConfig {
    /// Loads `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&content).map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let pretty = ron::ser::PrettyConfig::new();
        let content =
            ron::ser::to_string_pretty(self, pretty).map_err(|err| ConfigError::Write {
                path: path.to_path_buf(),
                message: err.to_string(),
            })?;
        fs::write(path, content).map_err(|err| ConfigError::Write {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    pub fn http_settings(&self) -> HttpSettings {
        HttpSettings {
            base_url: self.base_url.clone(),
            connect_timeout: Duration::from_millis(self.connect_timeout_ms),
            request_timeout: Duration::from_millis(self.request_timeout_ms),
        }
    }
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_path_gives_defaults() {
        let config = AppConfig::load(None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.request_timeout_ms, 30_000);
        assert_eq!(config.log_destination, LogDestination::File);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("talent.ron");
        fs::write(
            &path,
            r#"(base_url: "https://hire.example.com/api", response_ordering: latest_request_wins)"#,
        )
        .unwrap();

        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(config.base_url, "https://hire.example.com/api");
        assert_eq!(config.response_ordering, ResponseOrdering::LatestRequestWins);
        assert_eq!(config.page_size, 10);
        assert_eq!(
            config.http_settings().request_timeout,
            Duration::from_secs(30)
        );
    }

    #[test]
    fn saved_config_loads_back() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("talent.ron");
        let config = AppConfig {
            page_size: 3,
            log_destination: LogDestination::Both,
            ..AppConfig::default()
        };
        config.save(&path).unwrap();
        assert_eq!(AppConfig::load(Some(&path)).unwrap(), config);
    }

    #[test]
    fn unreadable_and_malformed_files_are_errors() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.ron");
        assert!(matches!(
            AppConfig::load(Some(&missing)),
            Err(ConfigError::Read { .. })
        ));

        let broken = temp.path().join("broken.ron");
        fs::write(&broken, "(page_size: \"ten\")").unwrap();
        assert!(matches!(
            AppConfig::load(Some(&broken)),
            Err(ConfigError::Parse { .. })
        ));
    }
}
