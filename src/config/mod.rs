//! Application configuration module.
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values are read with the `VAT_ADVISOR`
//! prefix; nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use vat_advisor::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! let classifier = config.classifier.build().expect("Invalid classifier config");
//! ```

mod classifier;
mod error;
mod telemetry;

pub use classifier::{ClassifierConfig, ClassifierMode};
pub use error::{ConfigError, ValidationError};
pub use telemetry::{init_tracing, LogFormat};

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Classifier selection and provider settings.
    #[serde(default)]
    pub classifier: ClassifierConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Loads a `.env` file if present (for development), then reads
    /// variables such as `VAT_ADVISOR__CLASSIFIER__MODE=openai`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the expected
    /// types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("VAT_ADVISOR")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.classifier.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_configuration_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.classifier.mode, ClassifierMode::RuleBased);
    }

    #[test]
    fn loads_without_any_environment() {
        // With no VAT_ADVISOR variables set, everything falls back to
        // defaults.
        let config = AppConfig::load().unwrap();
        assert!(config.validate().is_ok());
    }
}
