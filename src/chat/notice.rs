//! Transient user-facing notices for failed requests.
//!
//! Every chat failure is folded into one of four user-facing categories:
//! the service could not be reached, the service failed (5xx), the request
//! was rejected (4xx), or something else went wrong. The notice carries a
//! dismiss delay so renderers that support it can auto-hide the notice.

use std::time::Duration;

use crate::error::Error;

/// A transient notice shown alongside the transcript after a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Short heading for the notice.
    pub title: String,

    /// User-facing body text. This is also what gets appended to the
    /// transcript as a bot-styled error message.
    pub body: String,

    /// How long the notice stays up before self-dismissing.
    pub dismiss_after: Duration,
}

impl Notice {
    /// Classifies an error into a user-facing notice.
    pub fn from_error(err: &Error, dismiss_after: Duration) -> Self {
        let (title, body) = if err.is_connection() || err.is_timeout() {
            (
                "Connection error",
                "Cannot reach the assistant service. Check the network and try again.",
            )
        } else if err.is_server_error() {
            (
                "Server error",
                "The service hit an internal error. Please try again shortly.",
            )
        } else if err.is_client_error() {
            (
                "Request error",
                "The request was not accepted. Please rephrase your message and resend.",
            )
        } else {
            (
                "Error",
                "Sorry, a temporary error occurred. Please try again.",
            )
        };
        Self {
            title: title.to_string(),
            body: body.to_string(),
            dismiss_after,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DISMISS: Duration = Duration::from_secs(5);

    #[test]
    fn connection_failures() {
        let notice = Notice::from_error(&Error::connection("refused", None), DISMISS);
        assert_eq!(notice.title, "Connection error");
        let notice = Notice::from_error(&Error::timeout("gave up", None), DISMISS);
        assert_eq!(notice.title, "Connection error");
    }

    #[test]
    fn server_failures() {
        let notice = Notice::from_error(&Error::internal_server("boom"), DISMISS);
        assert_eq!(notice.title, "Server error");
        let notice = Notice::from_error(&Error::service_unavailable("busy"), DISMISS);
        assert_eq!(notice.title, "Server error");
    }

    #[test]
    fn request_failures() {
        let notice = Notice::from_error(&Error::bad_request("nope"), DISMISS);
        assert_eq!(notice.title, "Request error");
    }

    #[test]
    fn everything_else_is_generic() {
        let notice = Notice::from_error(&Error::serialization("bad json", None), DISMISS);
        assert_eq!(notice.title, "Error");
        assert_eq!(notice.dismiss_after, DISMISS);
    }
}
