//! Foundation module - Shared domain primitives.
//!
//! Value objects, identifiers, and error types that form the vocabulary
//! of the VAT advisor domain.

mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{MessageId, SessionId};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
