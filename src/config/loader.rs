//! Configuration Loader
//!
//! Loads and validates run configuration from TOML files under the settings
//! directory. Every section and field is optional; missing values fall back
//! to the documented defaults, so an empty file is a valid configuration.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Main configuration structure matching `settings/<name>.toml`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub provider: ProviderSection,
    #[serde(default)]
    pub logging: LoggingSection,
    #[serde(default)]
    pub dumps: DumpsSection,
}

/// Exchange provider section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderSection {
    /// Exchanges to query, in output column order
    #[serde(default)]
    pub exchanges: Vec<String>,
    /// Only include pairs the exchange reports as currently tradeable
    #[serde(default)]
    pub only_traded: bool,
}

/// Logging section
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSection {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_level")]
    pub level: String,
    /// Log file base name; the run timestamp and ".txt" are appended
    #[serde(default = "default_log_filename")]
    pub filename: String,
    /// Directory for log files, created if missing
    #[serde(default = "default_log_directory")]
    pub directory: String,
}

/// Dumps section
#[derive(Debug, Clone, Deserialize)]
pub struct DumpsSection {
    /// CSV base name; ".csv" is appended
    #[serde(default = "default_dump_filename")]
    pub filename: String,
    /// Directory for dumps, created if missing
    #[serde(default = "default_dump_directory")]
    pub directory: String,
}

fn default_level() -> String {
    "info".to_string()
}

fn default_log_filename() -> String {
    "log".to_string()
}

fn default_log_directory() -> String {
    "logs".to_string()
}

fn default_dump_filename() -> String {
    "pairs".to_string()
}

fn default_dump_directory() -> String {
    "data".to_string()
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_level(),
            filename: default_log_filename(),
            directory: default_log_directory(),
        }
    }
}

impl Default for DumpsSection {
    fn default() -> Self {
        Self {
            filename: default_dump_filename(),
            directory: default_dump_directory(),
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Load configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

impl Config {
    /// Validate all configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
        if !LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "level must be one of {:?}, got {:?}",
                LEVELS, self.logging.level
            )));
        }

        if self.logging.filename.is_empty() {
            return Err(ConfigError::Validation(
                "logging filename cannot be empty".to_string(),
            ));
        }

        if self.dumps.filename.is_empty() {
            return Err(ConfigError::Validation(
                "dumps filename cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn full_config_loads() {
        let file = write_config(
            r#"
            [provider]
            exchanges = ["binance", "okex"]
            only_traded = true

            [logging]
            level = "debug"
            filename = "run"
            directory = "var/logs"

            [dumps]
            filename = "all_pairs"
            directory = "var/data"
            "#,
        );

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.provider.exchanges, vec!["binance", "okex"]);
        assert!(config.provider.only_traded);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.dumps.filename, "all_pairs");
        assert_eq!(config.dumps.directory, "var/data");
    }

    #[test]
    fn empty_file_falls_back_to_defaults() {
        let file = write_config("");
        let config = load_config(file.path()).unwrap();

        assert!(config.provider.exchanges.is_empty());
        assert!(!config.provider.only_traded);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.filename, "log");
        assert_eq!(config.logging.directory, "logs");
        assert_eq!(config.dumps.filename, "pairs");
        assert_eq!(config.dumps.directory, "data");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_config("no/such/config.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let file = write_config("[provider\nexchanges = [");
        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn unknown_log_level_fails_validation() {
        let file = write_config("[logging]\nlevel = \"verbose\"");
        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn empty_dump_filename_fails_validation() {
        let file = write_config("[dumps]\nfilename = \"\"");
        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }
}
