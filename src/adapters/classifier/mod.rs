//! Vehicle classifier adapters.
//!
//! Two production implementations of the classifier port - the local
//! rule-based one (default) and the OpenAI structured-extraction one -
//! plus a configurable mock for tests.

mod mock;
mod openai;
mod rule_based;

pub use mock::MockClassifier;
pub use openai::{OpenAiExtractor, OpenAiExtractorConfig};
pub use rule_based::RuleBasedClassifier;
