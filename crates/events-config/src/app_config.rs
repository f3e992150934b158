//! Application configuration
//!
//! Loaded from `.events-board.toml` (see [`crate::load_config_file`]), then
//! overridden by environment variables. Database settings use the standard
//! libpq variable names so existing `PG*` setups work unchanged.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable overriding [`ApiConfig::base_url`]
pub const ENV_API_URL: &str = "EVENTS_API_URL";
/// Environment variable overriding [`ApiConfig::request_timeout_secs`]
pub const ENV_API_TIMEOUT: &str = "EVENTS_API_TIMEOUT_SECS";
pub const ENV_PG_USER: &str = "PGUSER";
pub const ENV_PG_HOST: &str = "PGHOST";
pub const ENV_PG_DATABASE: &str = "PGDATABASE";
pub const ENV_PG_PASSWORD: &str = "PGPASSWORD";
pub const ENV_PG_PORT: &str = "PGPORT";
/// Environment variable overriding [`DatabaseConfig::create_table`]
pub const ENV_SEED_CREATE_TABLE: &str = "EVENTS_SEED_CREATE_TABLE";

/// Errors raised while applying configuration overrides
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Complete configuration for the events applications
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Where the events REST API lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the API, without the `/api/events` path
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Upper bound for a single request
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

/// Connection settings for the seed loader's Postgres database
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_user")]
    pub user: String,

    #[serde(default = "default_db_host")]
    pub host: String,

    #[serde(default = "default_db_name")]
    pub database: String,

    #[serde(default)]
    pub password: String,

    #[serde(default = "default_db_port")]
    pub port: u16,

    /// Pool size; the loader inserts sequentially so one is enough
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Create the `events` table before seeding if it is missing
    #[serde(default)]
    pub create_table: bool,
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_db_user() -> String {
    "postgres".to_string()
}

fn default_db_host() -> String {
    "localhost".to_string()
}

fn default_db_name() -> String {
    "event_management".to_string()
}

fn default_db_port() -> u16 {
    5432
}

fn default_max_connections() -> u32 {
    1
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl ApiConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            user: default_db_user(),
            host: default_db_host(),
            database: default_db_name(),
            password: String::new(),
            port: default_db_port(),
            max_connections: default_max_connections(),
            create_table: false,
        }
    }
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("user", &self.user)
            .field("host", &self.host)
            .field("database", &self.database)
            .field("password", &"<redacted>")
            .field("port", &self.port)
            .field("max_connections", &self.max_connections)
            .field("create_table", &self.create_table)
            .finish()
    }
}

impl DatabaseConfig {
    /// Human readable target for logs, without the password
    pub fn display_target(&self) -> String {
        format!(
            "{}@{}:{}/{}",
            self.user, self.host, self.port, self.database
        )
    }
}

impl AppConfig {
    /// Load config from file (or defaults), then apply environment overrides
    ///
    /// A `.env` file is read first so its variables take part in the overrides.
    pub fn load() -> Result<Self, ConfigError> {
        crate::load_dotenv();

        let mut config = Self::from_file_or_default();
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    fn from_file_or_default() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Apply overrides looked up by variable name
    ///
    /// `lookup` is `std::env::var` in production; tests pass a map.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_URL) {
            self.api.base_url = url;
        }
        if let Some(value) = lookup(ENV_API_TIMEOUT) {
            self.api.request_timeout_secs = parse_value(ENV_API_TIMEOUT, value)?;
        }

        let db = &mut self.database;
        if let Some(user) = lookup(ENV_PG_USER) {
            db.user = user;
        }
        if let Some(host) = lookup(ENV_PG_HOST) {
            db.host = host;
        }
        if let Some(database) = lookup(ENV_PG_DATABASE) {
            db.database = database;
        }
        if let Some(password) = lookup(ENV_PG_PASSWORD) {
            db.password = password;
        }
        if let Some(value) = lookup(ENV_PG_PORT) {
            db.port = parse_value(ENV_PG_PORT, value)?;
        }
        if let Some(value) = lookup(ENV_SEED_CREATE_TABLE) {
            db.create_table = parse_value(ENV_SEED_CREATE_TABLE, value)?;
        }
        Ok(())
    }
}

fn parse_value<T>(key: &'static str, value: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match value.trim().parse() {
        Ok(parsed) => Ok(parsed),
        Err(e) => Err(ConfigError::InvalidValue {
            key,
            reason: e.to_string(),
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.api.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.database.host, "localhost");
        assert_eq!(config.database.port, 5432);
        assert_eq!(config.database.database, "event_management");
        assert!(config.database.password.is_empty());
        assert!(!config.database.create_table);
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r#"
            [api]
            base_url = "http://events.internal:8080"

            [database]
            user = "seeder"
            port = 6543
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.api.base_url, "http://events.internal:8080");
        assert_eq!(config.api.request_timeout_secs, 30);
        assert_eq!(config.database.user, "seeder");
        assert_eq!(config.database.port, 6543);
        // untouched fields keep their defaults
        assert_eq!(config.database.host, "localhost");
    }

    #[test]
    fn test_config_deserialize_empty() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = AppConfig::default();
        config
            .apply_overrides(lookup(&[
                ("EVENTS_API_URL", "https://api.example.com"),
                ("EVENTS_API_TIMEOUT_SECS", "5"),
                ("PGUSER", "app"),
                ("PGHOST", "db"),
                ("PGDATABASE", "events"),
                ("PGPASSWORD", "secret"),
                ("PGPORT", "5433"),
                ("EVENTS_SEED_CREATE_TABLE", "true"),
            ]))
            .unwrap();

        assert_eq!(config.api.base_url, "https://api.example.com");
        assert_eq!(config.api.request_timeout_secs, 5);
        assert_eq!(config.database.user, "app");
        assert_eq!(config.database.host, "db");
        assert_eq!(config.database.database, "events");
        assert_eq!(config.database.password, "secret");
        assert_eq!(config.database.port, 5433);
        assert!(config.database.create_table);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let mut config = AppConfig::default();
        let err = config
            .apply_overrides(lookup(&[("PGPORT", "fivefourthreetwo")]))
            .unwrap_err();
        assert!(err.to_string().contains("PGPORT"));
        assert_eq!(config.database.port, 5432);
    }

    #[test]
    fn test_debug_redacts_password() {
        let db = DatabaseConfig {
            password: "hunter2".to_string(),
            ..DatabaseConfig::default()
        };
        let debug = format!("{:?}", db);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("<redacted>"));
        assert_eq!(db.display_target(), "postgres@localhost:5432/event_management");
    }
}
