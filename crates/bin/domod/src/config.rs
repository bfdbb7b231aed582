//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `domod.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

use domo_domain::automation::AutomationMode;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Home settings.
    pub home: HomeSection,
    /// Security settings.
    pub security: SecuritySection,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Home configuration source and startup behaviour.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HomeSection {
    /// Path of the JSON document naming devices to register.
    pub config_path: String,
    /// Automation mode selected at startup. Unknown names are rejected
    /// here, when the TOML is parsed.
    pub default_mode: AutomationMode,
}

/// Security notification settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SecuritySection {
    /// Users notified on a breach, in order.
    pub users: Vec<String>,
}

impl Config {
    /// Load configuration from `domod.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if
    /// the resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("domod.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("DOMOD_HOME_CONFIG") {
            self.home.config_path = val;
        }
        if let Ok(val) = std::env::var("DOMOD_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.home.config_path.is_empty() {
            return Err(ConfigError::Validation(
                "home config path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "domod=info,domo=info".to_string(),
        }
    }
}

impl Default for HomeSection {
    fn default() -> Self {
        Self {
            config_path: "home.json".to_string(),
            default_mode: AutomationMode::EnergySaving,
        }
    }
}

impl Default for SecuritySection {
    fn default() -> Self {
        Self {
            users: vec!["resident".to_string()],
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.logging.filter, "domod=info,domo=info");
        assert_eq!(config.home.config_path, "home.json");
        assert_eq!(config.home.default_mode, AutomationMode::EnergySaving);
        assert_eq!(config.security.users, ["resident"]);
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.home.config_path, "home.json");
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [logging]
            filter = 'debug'

            [home]
            config_path = 'house.json'
            default_mode = 'security'

            [security]
            users = ['alice', 'bob']
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.home.config_path, "house.json");
        assert_eq!(config.home.default_mode, AutomationMode::Security);
        assert_eq!(config.security.users, ["alice", "bob"]);
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [home]
            config_path = 'house.json'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.home.config_path, "house.json");
        assert_eq!(config.home.default_mode, AutomationMode::EnergySaving);
        assert_eq!(config.logging.filter, "domod=info,domo=info");
    }

    #[test]
    fn should_reject_unknown_default_mode_at_parse_time() {
        let toml = "
            [home]
            default_mode = 'party'
        ";
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.home.config_path, "home.json");
    }

    #[test]
    fn should_reject_empty_config_path() {
        let mut config = Config::default();
        config.home.config_path = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_accept_default_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}
