//! Configuration management for ledgerview
//!
//! Loads and validates the YAML configuration: where the HTTP server
//! listens, how to invoke the external ledger engine, and which
//! journal file is selected by default. Journal discovery and
//! persistence stay outside this crate; config only carries the
//! optional default selection.

pub mod error;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use error::{ConfigError, ConfigErrorCode, ConfigErrorSeverity, ConfigResult};

// ==================== Configuration Types ====================

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8082
}

/// Ledger engine invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Engine executable
    #[serde(default = "default_engine_command")]
    pub command: String,
    /// Fixed arguments prepended to every invocation
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            command: default_engine_command(),
            args: Vec::new(),
        }
    }
}

fn default_engine_command() -> String {
    "ledger-engine".to_string()
}

/// Journal file settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct JournalConfig {
    /// Directory containing journal files
    #[serde(default = "default_journal_directory")]
    pub directory: PathBuf,
    /// Journal file selected when a request names none
    #[serde(default)]
    pub default_file: Option<String>,
}

fn default_journal_directory() -> PathBuf {
    PathBuf::from("./journals")
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    /// Log level: debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Engine invocation settings
    #[serde(default)]
    pub engine: EngineConfig,
    /// Journal file settings
    #[serde(default)]
    pub journal: JournalConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load(path: PathBuf) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound {
                    path: path.to_string_lossy().to_string(),
                }
            } else {
                ConfigError::IoError
            }
        })?;

        let config: Config =
            serde_yaml::from_str(&content).map_err(|e| ConfigError::InvalidYaml {
                message: e.to_string(),
            })?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> ConfigResult<()> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                reason: "Port must be greater than 0".to_string(),
            });
        }

        if self.engine.command.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "engine.command".to_string(),
                reason: "Engine command must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Full path to the default journal file, if one is configured
    pub fn default_journal_path(&self) -> Option<PathBuf> {
        self.journal
            .default_file
            .as_ref()
            .map(|file| self.journal.directory.join(file))
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "");
        // Default derive gives empty strings; serde defaults fill in
        // only during deserialization
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8082);
        assert_eq!(config.engine.command, "ledger-engine");
        assert_eq!(config.journal.default_file, None);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
server:
  host: 0.0.0.0
  port: 9000
engine:
  command: hledger-json
  args: ["--strict"]
journal:
  directory: /var/ledgers
  default_file: main.journal
logging:
  level: debug
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.engine.command, "hledger-json");
        assert_eq!(config.engine.args, vec!["--strict".to_string()]);
        assert_eq!(
            config.default_journal_path(),
            Some(PathBuf::from("/var/ledgers/main.journal"))
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_port() {
        let mut config: Config = serde_yaml::from_str("{}").unwrap();
        config.server.port = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_blank_engine_command() {
        let mut config: Config = serde_yaml::from_str("{}").unwrap();
        config.engine.command = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_no_default_journal() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.default_journal_path(), None);
    }
}
