//! Mock classifier for testing.
//!
//! Configurable to return queued classifications or inject errors, and
//! records every call for verification.
//!
//! # Example
//!
//! ```ignore
//! let classifier = MockClassifier::new()
//!     .with_classification(Classification::fallback("stub"))
//!     .with_error(ClassifierError::RateLimited);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::classification::Classification;
use crate::ports::{ClassifierError, ClassifierInfo, VehicleClassifier};

/// Mock classifier with queued responses and call tracking.
#[derive(Debug, Clone, Default)]
pub struct MockClassifier {
    /// Queued responses, consumed in order.
    responses: Arc<Mutex<VecDeque<Result<Classification, ClassifierError>>>>,
    /// Texts this classifier was asked to classify.
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockClassifier {
    /// Creates a mock with an empty queue.
    ///
    /// With the queue exhausted, calls return the empty classification.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful classification.
    pub fn with_classification(self, classification: Classification) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(classification));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: ClassifierError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Number of classify calls made.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// All texts passed to classify, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl VehicleClassifier for MockClassifier {
    async fn classify(&self, text: &str) -> Result<Classification, ClassifierError> {
        self.calls.lock().unwrap().push(text.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Classification::empty()))
    }

    fn info(&self) -> ClassifierInfo {
        ClassifierInfo::new("mock", false)
    }
}
