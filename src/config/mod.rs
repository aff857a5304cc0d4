//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `SEPNOTY` prefix and nested values use double underscores as separators.
//! Every section has defaults, so an empty environment yields a local-only
//! service on `0.0.0.0:8080`.
//!
//! # Example
//!
//! ```no_run
//! use sepnoty::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod ai;
mod error;
mod recommendation;
mod server;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use recommendation::{EnginePreference, RecommendationConfig};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Recommendation engine selection
    #[serde(default)]
    pub recommendation: RecommendationConfig,

    /// AI provider configuration (OpenAI)
    #[serde(default)]
    pub ai: AiConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SEPNOTY` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SEPNOTY__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `SEPNOTY__RECOMMENDATION__PRIMARY=remote` -> `recommendation.primary = remote`
    /// - `SEPNOTY__AI__OPENAI_API_KEY=...` -> `ai.openai_api_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SEPNOTY")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// Performs semantic validation of configuration:
    /// - Bind address, port and timeouts
    /// - URL schemes (HTTPS for the remote engine in production)
    /// - The preferred engine has what it needs
    /// - The preferred engine gives up before the request timeout does, so
    ///   a slow engine still leaves time for the local fallback
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.recommendation.validate(self.is_production())?;
        self.ai.validate()?;

        if self.recommendation.primary == EnginePreference::Llm && !self.ai.has_openai() {
            return Err(ValidationError::MissingRequired("SEPNOTY__AI__OPENAI_API_KEY"));
        }

        if let Some(engine_secs) = self.engine_timeout_secs() {
            let request_secs = self.server.request_timeout_secs;
            if engine_secs >= request_secs {
                return Err(ValidationError::EngineTimeoutTooLong {
                    engine_secs,
                    request_secs,
                });
            }
        }

        Ok(())
    }

    /// Timeout of the preferred engine, if one is configured
    pub fn engine_timeout_secs(&self) -> Option<u64> {
        match self.recommendation.primary {
            EnginePreference::Local => None,
            EnginePreference::Remote => Some(self.recommendation.timeout_secs),
            EnginePreference::Llm => Some(self.ai.timeout_secs),
        }
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
