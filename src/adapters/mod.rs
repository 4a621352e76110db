//! Adapters - implementations of the ports.

pub mod classifier;

pub use classifier::{
    MockClassifier, OpenAiExtractor, OpenAiExtractorConfig, RuleBasedClassifier,
};
