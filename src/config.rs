//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::display::terminal::ChartStyle;
use crate::display::ENTRANCE_DELAY_MS;
use crate::query::{ClientConfig, HistoryQuery};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// GraphQL backend configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_graphql_url")]
    pub graphql_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_graphql_url() -> String {
    "http://localhost:8000/graphql".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            graphql_url: default_graphql_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ApiConfig {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            endpoint: self.graphql_url.clone(),
            request_timeout_ms: self.request_timeout_secs.saturating_mul(1000),
        }
    }
}

/// Chart and history display configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_entrance_delay")]
    pub entrance_delay_ms: u64,

    #[serde(default = "default_transition")]
    pub transition_ms: u64,

    #[serde(default = "default_history_limit")]
    pub history_limit: u32,

    #[serde(default = "default_history_offset")]
    pub history_offset: u32,

    #[serde(default = "default_chart_height")]
    pub chart_height: u16,

    #[serde(default = "default_bar_width")]
    pub bar_width: u16,
}

fn default_entrance_delay() -> u64 {
    ENTRANCE_DELAY_MS
}

fn default_transition() -> u64 {
    700
}

fn default_history_limit() -> u32 {
    30
}

fn default_history_offset() -> u32 {
    10
}

fn default_chart_height() -> u16 {
    18
}

fn default_bar_width() -> u16 {
    12
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            entrance_delay_ms: default_entrance_delay(),
            transition_ms: default_transition(),
            history_limit: default_history_limit(),
            history_offset: default_history_offset(),
            chart_height: default_chart_height(),
            bar_width: default_bar_width(),
        }
    }
}

impl DisplayConfig {
    pub fn entrance_delay(&self) -> Duration {
        Duration::from_millis(self.entrance_delay_ms)
    }

    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    /// History query the standings display issues alongside the standings
    pub fn history_query(&self) -> HistoryQuery {
        HistoryQuery {
            house: None,
            limit: self.history_limit,
            offset: self.history_offset,
        }
    }

    pub fn chart_style(&self) -> ChartStyle {
        ChartStyle {
            bar_width: self.bar_width,
            ..ChartStyle::default()
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("house-cup").join("config.toml")),
            Some(PathBuf::from("./house-cup.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from a key lookup
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("HOUSE_CUP_GRAPHQL_URL") {
            self.api.graphql_url = url;
        }
        if let Some(timeout) = lookup("HOUSE_CUP_REQUEST_TIMEOUT_SECS") {
            if let Ok(secs) = timeout.parse() {
                self.api.request_timeout_secs = secs;
            }
        }

        if let Some(level) = lookup("HOUSE_CUP_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("HOUSE_CUP_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# House Cup Configuration
#
# Environment variables override these settings:
# - HOUSE_CUP_GRAPHQL_URL
# - HOUSE_CUP_REQUEST_TIMEOUT_SECS
# - HOUSE_CUP_LOG_LEVEL
# - HOUSE_CUP_LOG_FORMAT

[api]
# GraphQL endpoint of the house points backend
graphql_url = "http://localhost:8000/graphql"

# Request timeout in seconds
request_timeout_secs = 30

[display]
# Delay before the bars start growing (ms)
entrance_delay_ms = 100

# Duration of the grow transition (ms)
transition_ms = 700

# Points history paging
history_limit = 30
history_offset = 10

# Terminal chart geometry (rows, columns per bar)
chart_height = 18
bar_width = 12

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.graphql_url, "http://localhost:8000/graphql");
        assert_eq!(config.display.entrance_delay(), Duration::from_millis(100));
        assert_eq!(config.display.history_query(), HistoryQuery::default());
        assert_eq!(config.api.client_config().request_timeout_ms, 30_000);
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        let defaults = Config::default();

        assert_eq!(config.api.graphql_url, defaults.api.graphql_url);
        assert_eq!(config.display.transition_ms, defaults.display.transition_ms);
        assert_eq!(config.display.chart_height, defaults.display.chart_height);
        assert_eq!(config.logging.level, defaults.logging.level);
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api]\ngraphql_url = \"http://hogwarts:9000/graphql\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.api.graphql_url, "http://hogwarts:9000/graphql");
        assert_eq!(config.api.request_timeout_secs, 30);
        assert_eq!(config.display.history_limit, 30);
    }

    #[test]
    fn test_load_errors() {
        let err = Config::load(Path::new("/nonexistent/house-cup.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api\ngraphql_url =").unwrap();
        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("HOUSE_CUP_GRAPHQL_URL", "http://example.test/graphql"),
            ("HOUSE_CUP_REQUEST_TIMEOUT_SECS", "not-a-number"),
            ("HOUSE_CUP_LOG_FORMAT", "json"),
        ]);

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.api.graphql_url, "http://example.test/graphql");
        assert_eq!(config.api.request_timeout_secs, 30);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "warn");
    }
}
