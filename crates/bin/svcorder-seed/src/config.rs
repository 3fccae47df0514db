//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `svcorder.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::str::FromStr;

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Target store.
    pub database: DatabaseConfig,
    /// What a run does after writing.
    pub seed: SeedConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Which storage adapter receives the seed data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// A `MongoDB` server reached through `database.uri`.
    #[default]
    MongoDb,
    /// A process-local store; nothing is persisted (dry run).
    Memory,
}

impl FromStr for Backend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mongodb" => Ok(Self::MongoDb),
            "memory" => Ok(Self::Memory),
            other => Err(ConfigError::Validation(format!(
                "unknown backend {other:?}, expected \"mongodb\" or \"memory\""
            ))),
        }
    }
}

/// Document store configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Storage adapter to use.
    pub backend: Backend,
    /// `MongoDB` connection string.
    pub uri: String,
    /// Logical database holding `services` and `orders`.
    pub name: String,
}

/// Seeding behaviour.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Read the collections back and compare them with the fixtures.
    pub verify: bool,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `svcorder.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or an
    /// override or the final configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("svcorder.toml")?;
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
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

    fn apply_env_overrides(
        &mut self,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(val) = var("MONGODB_URI") {
            self.database.uri = val;
        }
        if let Some(val) = var("MONGODB_DB") {
            self.database.name = val;
        }
        if let Some(val) = var("SVCORDER_BACKEND") {
            self.database.backend = val.parse()?;
        }
        if let Some(val) = var("SVCORDER_VERIFY") {
            self.seed.verify = parse_bool(&val).ok_or_else(|| {
                ConfigError::Validation(format!("SVCORDER_VERIFY must be a boolean, got {val:?}"))
            })?;
        }
        if let Some(val) = var("SVCORDER_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.database.backend == Backend::MongoDb
            && !(self.database.uri.starts_with("mongodb://")
                || self.database.uri.starts_with("mongodb+srv://"))
        {
            return Err(ConfigError::Validation(
                "database uri must start with mongodb:// or mongodb+srv://".to_string(),
            ));
        }
        let name = &self.database.name;
        if name.is_empty() || name.contains(['/', '\\', '.', ' ', '"', '$']) {
            return Err(ConfigError::Validation(format!(
                "invalid database name {name:?}"
            )));
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            backend: Backend::MongoDb,
            uri: "mongodb://localhost:27017".to_string(),
            name: "service_db".to_string(),
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { verify: true }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "svcorder=info,mongodb=warn".to_string(),
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
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.database.backend, Backend::MongoDb);
        assert_eq!(config.database.uri, "mongodb://localhost:27017");
        assert_eq!(config.database.name, "service_db");
        assert!(config.seed.verify);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [database]
            backend = 'memory'
            uri = 'mongodb://db.internal:27017'
            name = 'orders_demo'

            [seed]
            verify = false

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.database.backend, Backend::Memory);
        assert_eq!(config.database.uri, "mongodb://db.internal:27017");
        assert_eq!(config.database.name, "orders_demo");
        assert!(!config.seed.verify);
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [database]
            name = 'staging'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.database.name, "staging");
        assert_eq!(config.database.uri, "mongodb://localhost:27017");
        assert!(config.seed.verify);
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.database.name, "service_db");
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }

    #[test]
    fn should_apply_env_overrides() {
        let mut config = Config::default();
        config
            .apply_env_overrides(env(&[
                ("MONGODB_URI", "mongodb+srv://cluster.example.net"),
                ("MONGODB_DB", "service_db_test"),
                ("SVCORDER_BACKEND", "Memory"),
                ("SVCORDER_VERIFY", "off"),
                ("SVCORDER_LOG", "trace"),
            ]))
            .unwrap();

        assert_eq!(config.database.uri, "mongodb+srv://cluster.example.net");
        assert_eq!(config.database.name, "service_db_test");
        assert_eq!(config.database.backend, Backend::Memory);
        assert!(!config.seed.verify);
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_prefer_rust_log_over_svcorder_log() {
        let mut config = Config::default();
        config
            .apply_env_overrides(env(&[("SVCORDER_LOG", "trace"), ("RUST_LOG", "warn")]))
            .unwrap();
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn should_reject_unknown_backend() {
        let mut config = Config::default();
        let result = config.apply_env_overrides(env(&[("SVCORDER_BACKEND", "postgres")]));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_reject_non_boolean_verify_flag() {
        let mut config = Config::default();
        let result = config.apply_env_overrides(env(&[("SVCORDER_VERIFY", "maybe")]));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_reject_non_mongodb_uri() {
        let mut config = Config::default();
        config.database.uri = "postgres://localhost".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_ignore_uri_for_memory_backend() {
        let mut config = Config::default();
        config.database.backend = Backend::Memory;
        config.database.uri = String::new();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_reject_invalid_database_name() {
        for name in ["", "service.db", "a/b", "with space", "$cmd"] {
            let mut config = Config::default();
            config.database.name = name.to_string();
            assert!(config.validate().is_err(), "accepted {name:?}");
        }
    }
}
