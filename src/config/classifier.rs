//! Classifier selection and provider configuration.

use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

use crate::adapters::{OpenAiExtractor, OpenAiExtractorConfig, RuleBasedClassifier};
use crate::ports::VehicleClassifier;

use super::error::ValidationError;

/// Which classifier implementation to run.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ClassifierMode {
    /// Local keyword/lexicon rules; no network.
    #[default]
    RuleBased,
    /// OpenAI structured extraction.
    Openai,
}

/// Classifier configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierConfig {
    /// Selected implementation.
    #[serde(default)]
    pub mode: ClassifierMode,

    /// OpenAI API key (required in `openai` mode).
    pub openai_api_key: Option<String>,

    /// OpenAI model name.
    #[serde(default = "default_model")]
    pub openai_model: String,

    /// OpenAI API base URL.
    #[serde(default = "default_base_url")]
    pub openai_base_url: String,

    /// Provider request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl ClassifierConfig {
    /// Get timeout as Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if an OpenAI key is configured.
    pub fn has_openai(&self) -> bool {
        self.openai_api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// Validate the classifier configuration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.mode == ClassifierMode::Openai && !self.has_openai() {
            return Err(ValidationError::MissingRequired(
                "VAT_ADVISOR__CLASSIFIER__OPENAI_API_KEY",
            ));
        }
        Ok(())
    }

    /// Builds the configured classifier.
    ///
    /// This is the composition point: hosts inject the result into
    /// [`UtteranceHandler`](crate::application::handlers::UtteranceHandler).
    pub fn build(&self) -> Result<Arc<dyn VehicleClassifier>, ValidationError> {
        self.validate()?;
        match self.mode {
            ClassifierMode::RuleBased => Ok(Arc::new(RuleBasedClassifier::new())),
            ClassifierMode::Openai => {
                let api_key = self
                    .openai_api_key
                    .clone()
                    .filter(|k| !k.is_empty())
                    .ok_or(ValidationError::MissingRequired(
                        "VAT_ADVISOR__CLASSIFIER__OPENAI_API_KEY",
                    ))?;
                let provider_config = OpenAiExtractorConfig::new(api_key)
                    .with_model(self.openai_model.clone())
                    .with_base_url(self.openai_base_url.clone())
                    .with_timeout(self.timeout());
                Ok(Arc::new(OpenAiExtractor::new(provider_config)))
            }
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            mode: ClassifierMode::default(),
            openai_api_key: None,
            openai_model: default_model(),
            openai_base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_model() -> String {
    "gpt-5".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_the_local_classifier() {
        let config = ClassifierConfig::default();
        assert_eq!(config.mode, ClassifierMode::RuleBased);
        assert_eq!(config.timeout_secs, 30);
        assert!(!config.has_openai());
    }

    #[test]
    fn default_config_is_valid() {
        assert!(ClassifierConfig::default().validate().is_ok());
    }

    #[test]
    fn openai_mode_requires_a_key() {
        let config = ClassifierConfig {
            mode: ClassifierMode::Openai,
            ..Default::default()
        };
        assert!(config.validate().is_err());
        assert!(config.build().is_err());
    }

    #[test]
    fn empty_key_does_not_count() {
        let config = ClassifierConfig {
            mode: ClassifierMode::Openai,
            openai_api_key: Some(String::new()),
            ..Default::default()
        };
        assert!(!config.has_openai());
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let config = ClassifierConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidTimeout));
    }

    #[test]
    fn builds_the_rule_based_classifier_by_default() {
        let classifier = ClassifierConfig::default().build().unwrap();
        assert_eq!(classifier.info().name, "rule-based");
        assert!(!classifier.info().requires_network);
    }

    #[test]
    fn builds_the_openai_classifier_when_configured() {
        let config = ClassifierConfig {
            mode: ClassifierMode::Openai,
            openai_api_key: Some("sk-test".to_string()),
            ..Default::default()
        };
        let classifier = config.build().unwrap();
        assert_eq!(classifier.info().name, "openai");
        assert!(classifier.info().requires_network);
    }

    #[test]
    fn mode_deserializes_from_snake_case() {
        let mode: ClassifierMode = serde_json::from_str("\"rule_based\"").unwrap();
        assert_eq!(mode, ClassifierMode::RuleBased);
        let mode: ClassifierMode = serde_json::from_str("\"openai\"").unwrap();
        assert_eq!(mode, ClassifierMode::Openai);
    }

    #[test]
    fn timeout_converts_to_duration() {
        let config = ClassifierConfig {
            timeout_secs: 12,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(12));
    }
}
