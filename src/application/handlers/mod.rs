//! Application handlers.

mod handle_utterance;
mod reset_session;

pub use handle_utterance::{
    HandleUtteranceCommand, HandleUtteranceError, UtteranceHandler, UtteranceOutcome,
};
pub use reset_session::reset_session;
