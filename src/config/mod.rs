//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CONTRACT_LENS` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use contract_lens::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod ai;
mod error;
mod server;

pub use ai::{AiConfig, AiProvider};
pub use error::{ConfigError, ValidationError};
pub use server::{LogFormat, ServerConfig};

use secrecy::Secret;
use serde::Deserialize;

/// Environment variable read when no prefixed key is set.
pub const FALLBACK_API_KEY_VAR: &str = "API_KEY";

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, logging, CORS)
    #[serde(default)]
    pub server: ServerConfig,

    /// Generation service configuration
    #[serde(default)]
    pub ai: AiConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CONTRACT_LENS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Falls back to `API_KEY` when `CONTRACT_LENS__AI__API_KEY` is unset
    ///
    /// # Environment Variable Format
    ///
    /// - `CONTRACT_LENS__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `CONTRACT_LENS__AI__PROVIDER=openai` -> `ai.provider = openai`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut config: AppConfig = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CONTRACT_LENS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        if config.ai.api_key.is_none() {
            config.ai.api_key = std::env::var(FALLBACK_API_KEY_VAR).ok().map(Secret::new);
        }

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// The API key is deliberately not checked here.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        Ok(())
    }
}
