use serde::{Deserialize, Serialize};

/// Response body for `POST /help`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpReply {
    /// The help text to display.
    pub message: String,
}
