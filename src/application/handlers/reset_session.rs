//! Session reset.
//!
//! Reset replaces the session wholesale; there is no partial clearing.
//! The greeting re-appears when the presentation layer opens the fresh
//! session.

use crate::domain::dialogue::Session;

/// Returns a brand-new session at the initial step.
pub fn reset_session() -> Session {
    Session::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::RuleBasedClassifier;
    use crate::application::handlers::{HandleUtteranceCommand, UtteranceHandler};
    use crate::domain::dialogue::DialogueStep;
    use std::sync::Arc;

    #[test]
    fn reset_matches_a_pristine_session() {
        let fresh = reset_session();
        assert_eq!(fresh.snapshot(), Session::new().snapshot());
        assert!(fresh.transcript().is_empty());
        assert_eq!(fresh.step(), DialogueStep::AwaitIndustry);
    }

    #[tokio::test]
    async fn reset_mid_conversation_starts_over_with_the_greeting() {
        let handler = UtteranceHandler::new(Arc::new(RuleBasedClassifier::new()));

        // Progress into the middle of a conversation, then discard it.
        let session = handler.open(Session::new()).session;
        let outcome = handler
            .handle(HandleUtteranceCommand::new(session, "제조업"))
            .await
            .unwrap();
        assert_eq!(outcome.session.step(), DialogueStep::AwaitVehicle);

        let fresh = reset_session();
        assert!(fresh.transcript().is_empty());

        let opened = handler.open(fresh);
        assert_eq!(opened.new_entries.len(), 1);
        assert!(opened.new_entries[0].text().contains("업종"));
        assert_eq!(opened.session.step(), DialogueStep::AwaitIndustry);
    }

    #[test]
    fn reset_sessions_are_independent_values() {
        let a = reset_session();
        let b = reset_session();
        assert_ne!(a.id(), b.id());
        assert_eq!(a.snapshot(), b.snapshot());
    }
}
