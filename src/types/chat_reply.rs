use serde::{Deserialize, Serialize};

use crate::types::priority::Priority;

/// Response body for `POST /chat`.
///
/// Only `message` is required; everything else is defaulted when absent.
/// The body is otherwise unvalidated: the category is an open-ended label
/// and `timestamp` is a display string the service formats itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    /// The reply text.
    pub message: String,

    /// The session identifier correlating this exchange, if assigned.
    #[serde(default)]
    pub session_id: Option<String>,

    /// Label describing what kind of reply this is.
    #[serde(default)]
    pub category: Option<String>,

    /// Reply priority; `NORMAL` when the service omits it.
    #[serde(default)]
    pub priority: Priority,

    /// Display timestamp attached by the service.
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_body() {
        let reply: ChatReply = serde_json::from_str(r#"{"message":"Hi!"}"#).unwrap();
        assert_eq!(reply.message, "Hi!");
        assert!(reply.session_id.is_none());
        assert!(reply.category.is_none());
        assert_eq!(reply.priority, Priority::Normal);
        assert!(reply.timestamp.is_none());
    }

    #[test]
    fn full_body() {
        let json = r#"{
            "message": "Call 1234 now.",
            "session_id": "s1",
            "category": "emergency",
            "priority": "HIGH",
            "timestamp": "14:05"
        }"#;
        let reply: ChatReply = serde_json::from_str(json).unwrap();
        assert_eq!(reply.session_id.as_deref(), Some("s1"));
        assert_eq!(reply.category.as_deref(), Some("emergency"));
        assert_eq!(reply.priority, Priority::High);
        assert_eq!(reply.timestamp.as_deref(), Some("14:05"));
    }

    #[test]
    fn unknown_priority_is_an_error() {
        let json = r#"{"message":"x","priority":"URGENT"}"#;
        assert!(serde_json::from_str::<ChatReply>(json).is_err());
    }
}
