//! Session aggregate.
//!
//! One value per conversation. The presentation layer owns storage and
//! threads the value through `handle_utterance`/`reset_session`; nothing in
//! this crate holds a session globally.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::classification::{Classification, VehicleTag};
use crate::domain::foundation::{DomainError, ErrorCode, SessionId, StateMachine};

use super::message::TranscriptEntry;
use super::step::DialogueStep;

/// State of one deduction conversation.
///
/// # Invariants
///
/// - `step` only advances along [`DialogueStep`]'s transitions.
/// - `industry`, `vehicle_text`, and `seat_count` are write-once.
/// - `transcript` is append-only; transcript order is causal order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    id: SessionId,
    step: DialogueStep,
    industry: Option<String>,
    vehicle_text: Option<String>,
    classification: Option<Classification>,
    seat_count: Option<u32>,
    transcript: Vec<TranscriptEntry>,
}

impl Session {
    /// A fresh session at the initial step with an empty transcript.
    pub fn new() -> Self {
        Self {
            id: SessionId::new(),
            step: DialogueStep::AwaitIndustry,
            industry: None,
            vehicle_text: None,
            classification: None,
            seat_count: None,
            transcript: Vec::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    /// The session id.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// The current dialogue step.
    pub fn step(&self) -> DialogueStep {
        self.step
    }

    /// The stored industry, once given.
    pub fn industry(&self) -> Option<&str> {
        self.industry.as_deref()
    }

    /// The stored vehicle description, once given.
    pub fn vehicle_text(&self) -> Option<&str> {
        self.vehicle_text.as_deref()
    }

    /// The stored classification, once the vehicle was classified.
    pub fn classification(&self) -> Option<&Classification> {
        self.classification.as_ref()
    }

    /// The stored seat count, once known.
    pub fn seat_count(&self) -> Option<u32> {
        self.seat_count
    }

    /// The full transcript, in causal order.
    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    /// Returns true once the verdict has been delivered.
    pub fn is_complete(&self) -> bool {
        self.step.is_done()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Mutations (driven by the dialogue engine)
    // ─────────────────────────────────────────────────────────────────────

    /// Stores the industry. Write-once.
    pub fn record_industry(&mut self, industry: impl Into<String>) -> Result<(), DomainError> {
        if self.industry.is_some() {
            return Err(DomainError::already_set("industry"));
        }
        self.industry = Some(industry.into());
        Ok(())
    }

    /// Stores the vehicle description and its classification. Write-once.
    pub fn record_vehicle(
        &mut self,
        text: impl Into<String>,
        classification: Classification,
    ) -> Result<(), DomainError> {
        if self.vehicle_text.is_some() {
            return Err(DomainError::already_set("vehicle_text"));
        }
        self.vehicle_text = Some(text.into());
        self.classification = Some(classification);
        Ok(())
    }

    /// Stores the seat count. Write-once.
    pub fn record_seat_count(&mut self, seats: u32) -> Result<(), DomainError> {
        if self.seat_count.is_some() {
            return Err(DomainError::already_set("seat_count"));
        }
        self.seat_count = Some(seats);
        Ok(())
    }

    /// Advances the step, validating the transition.
    pub fn advance(&mut self, to: DialogueStep) -> Result<(), DomainError> {
        self.step = self.step.transition_to(to).map_err(|_| {
            DomainError::new(
                ErrorCode::InvalidStepTransition,
                format!("Cannot move from {:?} to {:?}", self.step, to),
            )
            .with_detail("from", self.step.label())
            .with_detail("to", to.label())
        })?;
        Ok(())
    }

    /// Appends a verbatim user entry.
    pub fn append_user(&mut self, text: impl Into<String>) {
        self.transcript.push(TranscriptEntry::user(text));
    }

    /// Appends an assistant entry.
    pub fn append_assistant(&mut self, text: impl Into<String>) {
        self.transcript.push(TranscriptEntry::assistant(text));
    }

    /// Read-only projection for the presentation sidebar.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            step: self.step,
            industry: self.industry.clone(),
            vehicle_text: self.vehicle_text.clone(),
            seat_count: self.seat_count,
            top_tags: self
                .classification
                .as_ref()
                .map(|c| c.tags().to_vec())
                .unwrap_or_default(),
            scores: self
                .classification
                .as_ref()
                .map(|c| c.scores().clone())
                .unwrap_or_default(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// What the presentation layer may display about a session.
///
/// Everything is optional/unset-representable; a pristine session projects
/// to an all-empty snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Current step.
    pub step: DialogueStep,
    /// Industry, if given.
    pub industry: Option<String>,
    /// Vehicle description, if given.
    pub vehicle_text: Option<String>,
    /// Seat count, if known.
    pub seat_count: Option<u32>,
    /// Ranked classification tags, if classified.
    pub top_tags: Vec<VehicleTag>,
    /// Classification scores, if classified.
    pub scores: BTreeMap<VehicleTag, u32>,
}
