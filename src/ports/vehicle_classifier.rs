//! Vehicle Classifier Port.
//!
//! Abstracts how a free-text vehicle description becomes a
//! [`Classification`]: locally via the rule lexicon, or remotely via a
//! structured-extraction provider. The dialogue layer depends only on this
//! trait and treats every implementation identically.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::classification::Classification;

/// Port for vehicle classification.
#[async_trait]
pub trait VehicleClassifier: Send + Sync {
    /// Classifies a vehicle description.
    ///
    /// Implementations must return a result for any input, including the
    /// empty string. Only transport-level failures of remote
    /// implementations may error; the orchestration degrades those to the
    /// safe fallback classification.
    async fn classify(&self, text: &str) -> Result<Classification, ClassifierError>;

    /// Describes the implementation (for logs and diagnostics).
    fn info(&self) -> ClassifierInfo;
}

/// Description of a classifier implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierInfo {
    /// Implementation name, e.g. "rule-based" or "openai".
    pub name: String,
    /// Whether classification needs a network round trip.
    pub requires_network: bool,
}

impl ClassifierInfo {
    /// Creates classifier info.
    pub fn new(name: impl Into<String>, requires_network: bool) -> Self {
        Self {
            name: name.into(),
            requires_network,
        }
    }
}

/// Failure modes of remote classification.
#[derive(Debug, Clone, Error)]
pub enum ClassifierError {
    /// The request did not complete within the configured timeout.
    #[error("Classification request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u32 },

    /// Transport-level failure.
    #[error("Network error: {0}")]
    Network(String),

    /// The provider rejected our credentials.
    #[error("Authentication with the classification provider failed")]
    AuthenticationFailed,

    /// The provider throttled the request.
    #[error("Classification provider rate limited the request")]
    RateLimited,

    /// The provider rejected the request as malformed.
    #[error("Provider rejected the request: {0}")]
    InvalidRequest(String),

    /// The provider answered with something we cannot parse.
    #[error("Provider returned an unusable payload: {0}")]
    InvalidResponse(String),

    /// The provider is down or erroring.
    #[error("Classification provider unavailable: {0}")]
    Unavailable(String),
}

impl ClassifierError {
    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        ClassifierError::Network(message.into())
    }

    /// Creates an invalid-response error.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        ClassifierError::InvalidResponse(message.into())
    }

    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        ClassifierError::Unavailable(message.into())
    }

    /// Returns true when retrying later could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ClassifierError::Timeout { .. }
                | ClassifierError::Network(_)
                | ClassifierError::RateLimited
                | ClassifierError::Unavailable(_)
        )
    }
}
