//! HandleUtterance command handler.
//!
//! Applies one inbound utterance to a session: dispatches on the current
//! step, classifies the vehicle when needed, and returns the updated
//! session together with the transcript entries appended this turn.
//!
//! The session is a value threaded in and out; the handler holds no
//! conversation state of its own.

use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::classification::Classification;
use crate::domain::deduction::Verdict;
use crate::domain::dialogue::{engine, DialogueStep, Session, TranscriptEntry};
use crate::domain::foundation::DomainError;
use crate::ports::VehicleClassifier;

/// Command to apply one utterance to a session.
#[derive(Debug, Clone)]
pub struct HandleUtteranceCommand {
    /// The session the utterance belongs to.
    pub session: Session,
    /// The raw user input.
    pub text: String,
}

impl HandleUtteranceCommand {
    /// Creates a new command.
    pub fn new(session: Session, text: impl Into<String>) -> Self {
        Self {
            session,
            text: text.into(),
        }
    }
}

/// Errors that can occur while handling an utterance.
///
/// These indicate misuse of the session aggregate, not user mistakes;
/// malformed user input is answered conversationally instead.
#[derive(Debug, Clone, Error)]
pub enum HandleUtteranceError {
    /// A session invariant was violated.
    #[error("Domain error: {0}")]
    Domain(String),
}

impl From<DomainError> for HandleUtteranceError {
    fn from(err: DomainError) -> Self {
        HandleUtteranceError::Domain(err.to_string())
    }
}

/// Result of applying one utterance.
#[derive(Debug, Clone)]
pub struct UtteranceOutcome {
    /// The updated session.
    pub session: Session,
    /// Transcript entries appended this turn, in emission order.
    pub new_entries: Vec<TranscriptEntry>,
    /// The verdict, when this turn reached one.
    pub verdict: Option<Verdict>,
}

/// Orchestrates the dialogue over the classifier port.
pub struct UtteranceHandler {
    classifier: Arc<dyn VehicleClassifier>,
}

impl UtteranceHandler {
    /// Creates a handler over the given classifier.
    pub fn new(classifier: Arc<dyn VehicleClassifier>) -> Self {
        debug!(classifier = %classifier.info().name, "utterance handler ready");
        Self { classifier }
    }

    /// Emits the greeting on a pristine session.
    ///
    /// Safe to call on every render; sessions that already spoke are
    /// returned unchanged.
    pub fn open(&self, mut session: Session) -> UtteranceOutcome {
        let mark = session.transcript().len();
        engine::greet(&mut session);
        let new_entries = session.transcript()[mark..].to_vec();
        UtteranceOutcome {
            session,
            new_entries,
            verdict: None,
        }
    }

    /// Applies one utterance and returns the updated session plus the
    /// transcript delta.
    ///
    /// Classifier failures are degraded to the safe fallback
    /// classification here, on the same code path as a success; they never
    /// surface to the caller.
    pub async fn handle(
        &self,
        command: HandleUtteranceCommand,
    ) -> Result<UtteranceOutcome, HandleUtteranceError> {
        let HandleUtteranceCommand { mut session, text } = command;

        // Whitespace-only input is ignored entirely.
        if text.trim().is_empty() {
            return Ok(UtteranceOutcome {
                session,
                new_entries: Vec::new(),
                verdict: None,
            });
        }

        let mark = session.transcript().len();
        engine::greet(&mut session);

        let verdict = match session.step() {
            DialogueStep::AwaitIndustry => engine::apply_industry(&mut session, &text)?,
            DialogueStep::AwaitVehicle => {
                let classification = self.classify_or_fallback(text.trim()).await;
                engine::apply_vehicle(&mut session, &text, classification)?
            }
            DialogueStep::AwaitSeats => engine::apply_seats(&mut session, &text)?,
            DialogueStep::Done => {
                engine::apply_done(&mut session, &text);
                None
            }
        };

        let new_entries = session.transcript()[mark..].to_vec();
        debug!(
            step = session.step().label(),
            appended = new_entries.len(),
            "utterance handled"
        );
        Ok(UtteranceOutcome {
            session,
            new_entries,
            verdict,
        })
    }

    async fn classify_or_fallback(&self, text: &str) -> Classification {
        match self.classifier.classify(text).await {
            Ok(classification) => classification,
            Err(error) => {
                warn!(%error, "classifier failed; degrading to fallback classification");
                Classification::fallback(format!("API 오류: {}", error))
            }
        }
    }
}
