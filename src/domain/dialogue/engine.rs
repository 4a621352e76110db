//! Per-step transition functions.
//!
//! Pure state machine: each function applies one utterance to the session,
//! appends the exchange to the transcript, and advances the step. The
//! classifier runs outside (it may suspend); its result is passed in as
//! data, so a fallback classification follows the identical path as a
//! successful one.

use crate::domain::classification::Classification;
use crate::domain::deduction::{self, PolicyOutcome, Verdict};
use crate::domain::foundation::DomainError;

use super::replies;
use super::session::Session;
use super::step::DialogueStep;

/// Emits the greeting on a pristine session.
///
/// Idempotent: once anything is in the transcript this is a no-op, so the
/// presentation layer may call it on every render.
pub fn greet(session: &mut Session) {
    if session.transcript().is_empty() && session.step() == DialogueStep::AwaitIndustry {
        session.append_assistant(replies::greeting());
    }
}

/// Applies the industry answer.
///
/// A directly deductible industry ends the conversation with a verdict;
/// otherwise the advisor asks for the vehicle name.
pub fn apply_industry(session: &mut Session, text: &str) -> Result<Option<Verdict>, DomainError> {
    let industry = text.trim();
    session.append_user(text);
    session.record_industry(industry)?;

    if deduction::is_deductible_industry(industry) {
        let verdict = Verdict::deductible(deduction::DeductionReason::IndustryDirectUse);
        session.append_assistant(replies::verdict_reply(&verdict));
        session.advance(DialogueStep::Done)?;
        Ok(Some(verdict))
    } else {
        session.append_assistant(replies::ask_vehicle());
        session.advance(DialogueStep::AwaitVehicle)?;
        Ok(None)
    }
}

/// Applies the vehicle answer together with its classification.
///
/// Reports the estimate, then either delivers the verdict or asks for the
/// seat count when a van/bus lacks one.
pub fn apply_vehicle(
    session: &mut Session,
    text: &str,
    classification: Classification,
) -> Result<Option<Verdict>, DomainError> {
    let vehicle = text.trim();
    session.append_user(text);

    let report = replies::classification_report(vehicle, &classification);
    let outcome = deduction::decide(
        session.industry().unwrap_or(""),
        classification.tags(),
        classification.seats_detected(),
    );
    let seats_in_text = classification.seats_detected();

    session.record_vehicle(vehicle, classification)?;
    if let Some(seats) = seats_in_text {
        session.record_seat_count(seats)?;
    }
    session.append_assistant(report);

    match outcome {
        PolicyOutcome::Decided(verdict) => {
            session.append_assistant(replies::verdict_reply(&verdict));
            session.advance(DialogueStep::Done)?;
            Ok(Some(verdict))
        }
        PolicyOutcome::NeedsSeats => {
            session.append_assistant(replies::ask_seats());
            session.advance(DialogueStep::AwaitSeats)?;
            Ok(None)
        }
    }
}

/// Applies the seat-count answer.
///
/// Non-numeric input re-prompts and stays on this step; the retry loop is
/// unbounded on purpose.
pub fn apply_seats(session: &mut Session, text: &str) -> Result<Option<Verdict>, DomainError> {
    session.append_user(text);

    match text.trim().parse::<u32>() {
        Err(_) => {
            session.append_assistant(replies::seat_retry());
            Ok(None)
        }
        Ok(seats) => {
            session.record_seat_count(seats)?;
            let verdict = deduction::seat_count_verdict(seats);
            session.append_assistant(replies::verdict_reply(&verdict));
            session.advance(DialogueStep::Done)?;
            Ok(Some(verdict))
        }
    }
}

/// Applies an utterance after the verdict: fixed restart hint, no other
/// mutation.
pub fn apply_done(session: &mut Session, text: &str) {
    session.append_user(text);
    session.append_assistant(replies::restart_hint());
}
