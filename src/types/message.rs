use time::OffsetDateTime;

use crate::types::priority::Priority;
use crate::types::sender::Sender;
use crate::utils;

/// Category label the service uses for emergency replies.
pub const EMERGENCY_CATEGORY: &str = "emergency";

/// A transcript entry.
///
/// Messages are immutable once appended to a transcript and carry a
/// strictly-increasing sequence number scoped to the session.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    /// Sequence number within the session.
    pub seq: u64,

    /// Who authored the message.
    pub sender: Sender,

    /// The message text, verbatim.
    pub text: String,

    /// Category the service attached, for bot messages.
    pub category: Option<String>,

    /// Priority of the message.
    pub priority: Priority,

    /// When the message was appended, local to this client.
    pub timestamp: OffsetDateTime,
}

impl Message {
    /// Creates a user-authored transcript entry.
    pub fn user(seq: u64, text: impl Into<String>) -> Self {
        Self {
            seq,
            sender: Sender::User,
            text: text.into(),
            category: None,
            priority: Priority::Normal,
            timestamp: utils::time::now(),
        }
    }

    /// Creates a bot-authored transcript entry.
    pub fn bot(
        seq: u64,
        text: impl Into<String>,
        category: Option<String>,
        priority: Priority,
    ) -> Self {
        Self {
            seq,
            sender: Sender::Bot,
            text: text.into(),
            category,
            priority,
            timestamp: utils::time::now(),
        }
    }

    /// Returns true if this message should get emergency treatment.
    ///
    /// High priority flags a message as an emergency regardless of its
    /// category.
    pub fn is_emergency(&self) -> bool {
        self.priority == Priority::High
            || self.category.as_deref() == Some(EMERGENCY_CATEGORY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_priority_is_emergency_regardless_of_category() {
        let msg = Message::bot(1, "evacuate", Some("greeting".to_string()), Priority::High);
        assert!(msg.is_emergency());
    }

    #[test]
    fn emergency_category_is_emergency() {
        let msg = Message::bot(1, "code blue", Some("emergency".to_string()), Priority::Normal);
        assert!(msg.is_emergency());
    }

    #[test]
    fn normal_bot_message_is_not_emergency() {
        let msg = Message::bot(1, "hello", Some("greeting".to_string()), Priority::Normal);
        assert!(!msg.is_emergency());
    }

    #[test]
    fn user_messages_default_to_normal() {
        let msg = Message::user(1, "hello");
        assert_eq!(msg.sender, Sender::User);
        assert_eq!(msg.priority, Priority::Normal);
        assert!(!msg.is_emergency());
    }
}
