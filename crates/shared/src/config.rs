//! Application configuration management.

use serde::Deserialize;

use crate::error::AppResult;
use crate::types::{DEFAULT_PAGE, DEFAULT_PER_PAGE, PaginationConfig};

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Database configuration.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Default pagination settings.
    #[serde(default)]
    pub pagination: PaginationSettings,
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    #[serde(default = "default_database_url")]
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_database_url() -> String {
    "sqlite::memory:".to_string()
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
        }
    }
}

/// Defaults applied to every pagination request.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationSettings {
    /// Page used when a request leaves it unset.
    #[serde(default = "default_page")]
    pub page: u32,
    /// Page size used when a request leaves it unset.
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    /// Base path for navigation links.
    #[serde(default)]
    pub path: String,
    /// Largest page size a request may ask for.
    #[serde(default)]
    pub max_per_page: Option<u32>,
}

fn default_page() -> u32 {
    DEFAULT_PAGE
}

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

impl Default for PaginationSettings {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
            path: String::new(),
            max_per_page: None,
        }
    }
}

impl PaginationSettings {
    /// Returns the default config these settings describe.
    #[must_use]
    pub fn to_config(&self) -> PaginationConfig {
        PaginationConfig::new(self.page, self.per_page, self.path.clone())
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// then `PAGETURN__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Configuration` if a source cannot be read or the
    /// merged values do not deserialize.
    pub fn load() -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("PAGETURN")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
