//! Application configuration module
//!
//! Configuration is assembled in layers, later layers winning:
//!
//! 1. built-in defaults
//! 2. an optional TOML file (`RITUALOS_CONFIG`, default `ritualos.toml`)
//! 3. environment variables (`SERVER_PORT`, `DATABASE_URL`, `JWT_SECRET`,
//!    `BCRYPT_COST`, `RUST_LOG`)
//!
//! ```toml
//! server_port = 8080
//! database_url = "postgres://localhost/ritualos"
//! jwt_secret = "change-me-to-something-long"
//! bcrypt_cost = 12
//! log_filter = "info,ritualos=debug"
//! ```

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CONFIG_FILE: &str = "ritualos.toml";
pub const DEFAULT_LOG_FILTER: &str = "info";
pub const DEFAULT_BCRYPT_COST: u32 = bcrypt::DEFAULT_COST;
/// Range bcrypt accepts for its work factor
pub const BCRYPT_COST_RANGE: std::ops::RangeInclusive<u32> = 4..=31;
pub const MIN_SECRET_LEN: usize = 16;

/// Application configuration
#[derive(Clone)]
pub struct AppConfig {
    /// Port the HTTP server binds to
    pub server_port: u16,
    /// PostgreSQL URL; without one the server runs on the in-memory store
    pub database_url: Option<String>,
    /// HMAC secret for bearer tokens
    pub jwt_secret: String,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("server_port", &self.server_port)
            .field("database_url", &self.database_url.as_ref().map(|_| "<set>"))
            .field("jwt_secret", &"<redacted>")
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("log_filter", &self.log_filter)
            .finish()
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from the config file (if any) and the environment
    pub fn load() -> Result<AppConfig, ConfigError> {
        let path = std::env::var("RITUALOS_CONFIG")
            .unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        let builder = AppConfig::builder().merge_file(Path::new(&path))?;
        builder.merge_env()?.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::WeakSecret(MIN_SECRET_LEN));
        }
        if !BCRYPT_COST_RANGE.contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "bcrypt_cost",
                value: self.bcrypt_cost.to_string(),
            });
        }
        Ok(())
    }
}

/// Shape of the optional TOML file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    server_port: Option<u16>,
    database_url: Option<String>,
    jwt_secret: Option<String>,
    bcrypt_cost: Option<u32>,
    log_filter: Option<String>,
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    server_port: Option<u16>,
    database_url: Option<String>,
    jwt_secret: Option<String>,
    bcrypt_cost: Option<u32>,
    log_filter: Option<String>,
}

impl AppConfigBuilder {
    pub fn server_port(mut self, port: u16) -> Self {
        self.server_port = Some(port);
        self
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    pub fn log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = Some(filter.into());
        self
    }

    /// Overlay values from a TOML file. A missing file is not an error.
    pub fn merge_file(self, path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(self);
        }
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        self.merge_toml(&contents)
    }

    /// Overlay values from TOML text
    pub fn merge_toml(mut self, contents: &str) -> Result<Self, ConfigError> {
        let file: FileConfig = toml::from_str(contents)?;
        self.server_port = file.server_port.or(self.server_port);
        self.database_url = file.database_url.or(self.database_url);
        self.jwt_secret = file.jwt_secret.or(self.jwt_secret);
        self.bcrypt_cost = file.bcrypt_cost.or(self.bcrypt_cost);
        self.log_filter = file.log_filter.or(self.log_filter);
        Ok(self)
    }

    /// Overlay values from environment variables
    pub fn merge_env(mut self) -> Result<Self, ConfigError> {
        if let Ok(port) = std::env::var("SERVER_PORT") {
            self.server_port = Some(parse_value("SERVER_PORT", &port)?);
        }
        if let Ok(url) = std::env::var("DATABASE_URL") {
            self.database_url = Some(url);
        }
        if let Ok(secret) = std::env::var("JWT_SECRET") {
            self.jwt_secret = Some(secret);
        }
        if let Ok(cost) = std::env::var("BCRYPT_COST") {
            self.bcrypt_cost = Some(parse_value("BCRYPT_COST", &cost)?);
        }
        if let Ok(filter) = std::env::var("RUST_LOG") {
            self.log_filter = Some(filter);
        }
        Ok(self)
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            server_port: self.server_port.unwrap_or(DEFAULT_PORT),
            database_url: self.database_url.filter(|url| !url.trim().is_empty()),
            jwt_secret: self
                .jwt_secret
                .ok_or(ConfigError::MissingValue("jwt_secret"))?,
            bcrypt_cost: self.bcrypt_cost.unwrap_or(DEFAULT_BCRYPT_COST),
            log_filter: self
                .log_filter
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        };
        config.validate()?;
        Ok(config)
    }
}

fn parse_value<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
    #[error("jwt_secret must be at least {0} bytes")]
    WeakSecret(usize),
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}
