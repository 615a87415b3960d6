use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::{DEFAULT_SEED_PATH, LOOKAHEAD_DAYS, SLOT_DURATION_MINUTES};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub scheduling: SchedulingConfig,
    pub seed: SeedConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SchedulingConfig {
    pub slot_minutes: u32,
    pub lookahead_days: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedConfig {
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from `.env` file and environment variables into a `Settings`.
    /// Environment variables take precedence over `.env` file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .set_default("scheduling.slot_minutes", i64::from(SLOT_DURATION_MINUTES))?
            .set_default("scheduling.lookahead_days", i64::from(LOOKAHEAD_DAYS))?
            .set_default("seed.path", DEFAULT_SEED_PATH)?
            .set_default("logging.level", "debug")?
            // Env file
            .add_source(
                config::Environment::default()
                    .convert_case(config::Case::Snake)
                    .separator("_")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?;

        if settings.scheduling.slot_minutes == 0 {
            anyhow::bail!("scheduling.slot_minutes must be positive");
        }

        Ok(settings)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
