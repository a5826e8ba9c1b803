use serde::{Deserialize, Serialize};

/// Request body for `POST /chat`.
///
/// `session_id` serializes as JSON `null` until the service has assigned
/// one; after that the client echoes the same identifier on every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The user's message text.
    pub message: String,

    /// The session identifier assigned by the service, if any.
    pub session_id: Option<String>,
}

impl ChatRequest {
    /// Creates a new chat request.
    pub fn new(message: impl Into<String>, session_id: Option<String>) -> Self {
        Self {
            message: message.into(),
            session_id,
        }
    }
}
