//! Transcript entries.
//!
//! The transcript is an append-only log of user/assistant exchanges;
//! entries are immutable once appended and their order is causal order.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MessageId, Timestamp};

/// Who authored a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// The end user.
    User,
    /// The advisor.
    Assistant,
}

/// One immutable entry in a session transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    id: MessageId,
    role: Role,
    text: String,
    created_at: Timestamp,
}

impl TranscriptEntry {
    /// A user entry, echoing the utterance verbatim.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    /// An assistant entry.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Role::Assistant, text)
    }

    fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            role,
            text: text.into(),
            created_at: Timestamp::now(),
        }
    }

    /// The entry id.
    pub fn id(&self) -> &MessageId {
        &self.id
    }

    /// The author role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// The entry text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// When the entry was appended.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns true for user entries.
    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }

    /// Returns true for assistant entries.
    pub fn is_assistant(&self) -> bool {
        self.role == Role::Assistant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_entry_keeps_text_verbatim() {
        let entry = TranscriptEntry::user("  택시 운송업  ");
        assert!(entry.is_user());
        assert_eq!(entry.text(), "  택시 운송업  ");
    }

    #[test]
    fn assistant_entry_has_assistant_role() {
        let entry = TranscriptEntry::assistant("몇 인승 차량인가요?");
        assert!(entry.is_assistant());
        assert!(!entry.is_user());
        assert_eq!(entry.role(), Role::Assistant);
    }

    #[test]
    fn entries_get_distinct_ids() {
        let a = TranscriptEntry::user("a");
        let b = TranscriptEntry::user("a");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn role_serializes_to_snake_case() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            "\"assistant\""
        );
    }
}
