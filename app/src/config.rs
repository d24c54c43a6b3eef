//! Configuration management for the Agri-Pro application
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with AGRI_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Local store configuration
    pub store: StoreConfig,

    /// Schedule configuration
    pub schedule: ScheduleConfig,

    /// Fallback coordinates for the fixed geolocation provider
    pub location: LocationConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    /// Path of the JSON store file
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ScheduleConfig {
    /// Look-ahead window for upcoming tasks, in days
    pub upcoming_window_days: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LocationConfig {
    pub latitude: f64,
    pub longitude: f64,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("AGRI_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("store.path", "agri-pro-store.json")?
            .set_default(
                "schedule.upcoming_window_days",
                i64::from(shared::schedule::DEFAULT_UPCOMING_WINDOW_DAYS),
            )?
            // Abidjan, a reasonable West-African default
            .set_default("location.latitude", 5.36)?
            .set_default("location.longitude", -4.01)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (AGRI_ prefix)
            .add_source(
                Environment::with_prefix("AGRI")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            upcoming_window_days: shared::schedule::DEFAULT_UPCOMING_WINDOW_DAYS,
        }
    }
}
