//! Configuration management
//!
//! Loads configuration from:
//! 1. Default values
//! 2. Configuration file (config/local.toml)
//! 3. Environment variables (override)

use serde::Deserialize;
use std::path::PathBuf;

/// Default browser user agent sent on outbound scrape requests.
///
/// Instagram's web endpoints reject clients that don't look like a browser.
const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:122.0) Gecko/20100101 Firefox/122.0";

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub scraper: ScraperConfig,
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0")
    pub host: String,
    /// Port number (e.g., 5000)
    pub port: u16,
}

/// Artifact storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Root directory for per-user artifact folders
    pub data_dir: PathBuf,
    /// Path of the process-wide append-only CSV log
    pub csv_log: PathBuf,
}

/// Outbound scrape configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ScraperConfig {
    /// User agent for the shared HTTP client
    pub user_agent: String,
    /// Optional timeout for outbound requests.
    ///
    /// Unset by default: outbound calls run with no deadline, matching the
    /// service's single-linear-request model.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,
    /// Log format: "pretty" or "json"
    pub format: String,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// # Loading Order
    /// 1. Default values
    /// 2. config/default.toml (if exists)
    /// 3. config/local.toml (if exists)
    /// 4. Environment variables (GRAMSNAP_*)
    ///
    /// # Errors
    /// Returns error if configuration is invalid
    pub fn load() -> Result<Self, crate::error::AppError> {
        use config::{Config, Environment, File};

        let config = Config::builder()
            // Start with default values
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("storage.data_dir", "accounts_data")?
            .set_default("storage.csv_log", "instagram_data_log.csv")?
            .set_default("scraper.user_agent", DEFAULT_USER_AGENT)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?
            // Load from config/default.toml if it exists
            .add_source(File::with_name("config/default").required(false))
            // Load from config/local.toml if it exists (overrides default)
            .add_source(File::with_name("config/local").required(false))
            // Load from environment variables (GRAMSNAP_*)
            .add_source(
                Environment::with_prefix("GRAMSNAP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| crate::error::AppError::Config(e.to_string()))?;

        let app_config: Self = config
            .try_deserialize()
            .map_err(|e| crate::error::AppError::Config(e.to_string()))?;
        app_config.validate()?;
        Ok(app_config)
    }

    fn validate(&self) -> Result<(), crate::error::AppError> {
        if self.storage.data_dir.as_os_str().is_empty() {
            return Err(crate::error::AppError::Config(
                "storage.data_dir must not be empty".to_string(),
            ));
        }

        if self.storage.csv_log.as_os_str().is_empty() {
            return Err(crate::error::AppError::Config(
                "storage.csv_log must not be empty".to_string(),
            ));
        }

        if self.scraper.user_agent.trim().is_empty() {
            return Err(crate::error::AppError::Config(
                "scraper.user_agent must not be empty".to_string(),
            ));
        }

        if self.scraper.timeout_seconds == Some(0) {
            return Err(crate::error::AppError::Config(
                "scraper.timeout_seconds must be greater than 0 when set".to_string(),
            ));
        }

        Ok(())
    }
}
