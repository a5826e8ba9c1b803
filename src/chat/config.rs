//! Configuration types for the chat application.
//!
//! This module provides CLI argument parsing via `arrrg` and configuration
//! structures for controlling chat behavior.

use std::time::Duration;

use arrrg_derive::CommandLine;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default delay before a transient notice self-dismisses.
const DEFAULT_NOTICE_DISMISS_SECS: u64 = 5;

/// At most this many quick-reply affordances are surfaced per reply.
const DEFAULT_MAX_QUICK_REPLIES: usize = 4;

/// Command-line arguments for the wardline-chat tool.
#[derive(CommandLine, Debug, Default, PartialEq, Eq)]
pub struct ChatArgs {
    /// Service base URL.
    #[arrrg(optional, "Service base URL (default: WARDLINE_URL or localhost)", "URL")]
    pub url: Option<String>,

    /// Request timeout in seconds.
    #[arrrg(optional, "Request timeout in seconds (default: 60)", "SECONDS")]
    pub timeout: Option<u64>,

    /// Disable ANSI colors and styles.
    #[arrrg(flag, "Disable ANSI colors/styles")]
    pub no_color: bool,
}

/// Configuration for a chat session.
///
/// This struct holds the resolved configuration values after processing
/// command-line arguments with appropriate defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    /// Service base URL; `None` falls back to WARDLINE_URL or localhost.
    pub base_url: Option<String>,

    /// Request timeout.
    pub timeout: Duration,

    /// Whether to use ANSI colors and styles in output.
    pub use_color: bool,

    /// How long transient notices stay up before self-dismissing.
    pub notice_dismiss: Duration,

    /// Maximum number of quick-reply affordances surfaced per reply.
    pub max_quick_replies: usize,
}

impl ChatConfig {
    /// Creates a new ChatConfig with default values.
    ///
    /// Defaults:
    /// - Base URL: resolved by the client (WARDLINE_URL or localhost)
    /// - Timeout: 60 seconds
    /// - Color: enabled
    /// - Notice dismiss delay: 5 seconds
    /// - Quick replies: at most 4
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            use_color: true,
            notice_dismiss: Duration::from_secs(DEFAULT_NOTICE_DISMISS_SECS),
            max_quick_replies: DEFAULT_MAX_QUICK_REPLIES,
        }
    }

    /// Sets the service base URL.
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Disables ANSI color output.
    pub fn without_color(mut self) -> Self {
        self.use_color = false;
        self
    }

    /// Sets the notice dismiss delay.
    pub fn with_notice_dismiss(mut self, dismiss: Duration) -> Self {
        self.notice_dismiss = dismiss;
        self
    }

    /// Sets the maximum number of quick replies surfaced per reply.
    pub fn with_max_quick_replies(mut self, max: usize) -> Self {
        self.max_quick_replies = max;
        self
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ChatArgs> for ChatConfig {
    fn from(args: ChatArgs) -> Self {
        ChatConfig {
            base_url: args.url,
            timeout: Duration::from_secs(args.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS)),
            use_color: !args.no_color,
            ..ChatConfig::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ChatConfig::new();
        assert!(config.base_url.is_none());
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert!(config.use_color);
        assert_eq!(config.notice_dismiss, Duration::from_secs(5));
        assert_eq!(config.max_quick_replies, 4);
    }

    #[test]
    fn config_from_args_defaults() {
        let args = ChatArgs::default();
        let config = ChatConfig::from(args);
        assert!(config.base_url.is_none());
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert!(config.use_color);
    }

    #[test]
    fn config_from_args_custom() {
        let args = ChatArgs {
            url: Some("http://ward.example:5000/".to_string()),
            timeout: Some(15),
            no_color: true,
        };
        let config = ChatConfig::from(args);
        assert_eq!(
            config.base_url.as_deref(),
            Some("http://ward.example:5000/")
        );
        assert_eq!(config.timeout, Duration::from_secs(15));
        assert!(!config.use_color);
    }

    #[test]
    fn config_builder_pattern() {
        let config = ChatConfig::new()
            .with_base_url("http://ward.example/".to_string())
            .with_timeout(Duration::from_secs(10))
            .without_color()
            .with_notice_dismiss(Duration::from_secs(2))
            .with_max_quick_replies(2);
        assert_eq!(config.base_url.as_deref(), Some("http://ward.example/"));
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(!config.use_color);
        assert_eq!(config.notice_dismiss, Duration::from_secs(2));
        assert_eq!(config.max_quick_replies, 2);
    }
}
