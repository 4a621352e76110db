//! Rule-based classifier - the local, offline default.
//!
//! A thin port wrapper around the domain lexicon: deterministic, pure,
//! infallible, no network.

use async_trait::async_trait;

use crate::domain::classification::{classify_text, Classification};
use crate::ports::{ClassifierError, ClassifierInfo, VehicleClassifier};

/// Classifies with the keyword table and model-name lexicon.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedClassifier;

impl RuleBasedClassifier {
    /// Creates the classifier.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl VehicleClassifier for RuleBasedClassifier {
    async fn classify(&self, text: &str) -> Result<Classification, ClassifierError> {
        Ok(classify_text(text))
    }

    fn info(&self) -> ClassifierInfo {
        ClassifierInfo::new("rule-based", false)
    }
}
