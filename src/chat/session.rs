//! Core chat session management.
//!
//! This module provides the `ChatSession` struct which owns conversation
//! state (transcript, session identifier, navigation level, in-flight flag)
//! and drives the service client and a renderer.

use crate::chat::config::ChatConfig;
use crate::chat::notice::Notice;
use crate::client::WardClient;
use crate::format;
use crate::observability;
use crate::render::Renderer;
use crate::types::{Message, NavLevel, classify_category};

/// What became of one `send` call.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// The reply was received and appended to the transcript.
    Delivered,

    /// The input was empty or another request was in flight; nothing
    /// changed.
    Dropped,

    /// The request failed; the failure was recovered into the transcript
    /// and a transient notice.
    Failed,
}

/// A chat session against the ward assistant service.
///
/// The session enforces one chat request in flight at a time: sends issued
/// while a request is outstanding are silently dropped, not queued. The
/// session identifier is adopted from the first reply that carries one and
/// is never cleared or rotated afterward.
pub struct ChatSession {
    client: WardClient,
    config: ChatConfig,
    transcript: Vec<Message>,
    session_id: Option<String>,
    next_seq: u64,
    in_flight: bool,
    navigation: NavLevel,
    quick_replies: Vec<String>,
    request_count: u64,
    error_count: u64,
}

/// Aggregated stats for a chat session.
#[derive(Debug, Clone)]
pub struct SessionStats {
    /// The number of transcript entries.
    pub message_count: usize,
    /// The session identifier, once assigned.
    pub session_id: Option<String>,
    /// The current navigation level.
    pub navigation: NavLevel,
    /// Total chat requests issued.
    pub total_requests: u64,
    /// Total chat requests that failed.
    pub total_errors: u64,
}

impl ChatSession {
    /// Creates a new chat session with the given client and configuration.
    pub fn new(client: WardClient, config: ChatConfig) -> Self {
        Self {
            client,
            config,
            transcript: Vec::new(),
            session_id: None,
            next_seq: 1,
            in_flight: false,
            navigation: NavLevel::Main,
            quick_replies: Vec::new(),
            request_count: 0,
            error_count: 0,
        }
    }

    /// Sends a user message and renders the reply.
    ///
    /// This method:
    /// 1. Drops empty input and input submitted while a request is in
    ///    flight (transcript untouched)
    /// 2. Appends exactly one user message before issuing the request
    /// 3. On success, adopts the session id, appends the bot reply,
    ///    recomputes navigation, and surfaces quick replies
    /// 4. On failure, appends a bot-styled error message and emits a
    ///    transient notice
    ///
    /// The in-flight flag is cleared on completion either way.
    pub async fn send(&mut self, input: &str, renderer: &mut dyn Renderer) -> SendOutcome {
        let input = input.trim();
        if input.is_empty() {
            return SendOutcome::Dropped;
        }
        if self.in_flight {
            observability::MESSAGES_DROPPED.click();
            return SendOutcome::Dropped;
        }

        let user_msg = Message::user(self.take_seq(), input);
        renderer.print_message(&user_msg);
        self.transcript.push(user_msg);

        self.in_flight = true;
        self.request_count += 1;
        let result = self.client.chat(input, self.session_id.as_deref()).await;
        self.in_flight = false;

        match result {
            Ok(reply) => {
                if self.session_id.is_none() {
                    self.session_id = reply.session_id.clone();
                }

                let bot_msg = Message::bot(
                    self.take_seq(),
                    reply.message.clone(),
                    reply.category.clone(),
                    reply.priority,
                );
                let emergency = bot_msg.is_emergency();
                renderer.print_message(&bot_msg);
                self.transcript.push(bot_msg);

                if emergency {
                    observability::EMERGENCY_ALERTS.click();
                    renderer.emergency_alert();
                }

                if let Some(level) = reply.category.as_deref().and_then(classify_category) {
                    self.navigation = level;
                    renderer.show_navigation(level);
                }

                self.quick_replies = format::extract_options(&reply.message);
                self.quick_replies.truncate(self.config.max_quick_replies);
                if !self.quick_replies.is_empty() {
                    renderer.print_quick_replies(&self.quick_replies);
                }

                SendOutcome::Delivered
            }
            Err(err) => {
                self.error_count += 1;
                let notice = Notice::from_error(&err, self.config.notice_dismiss);

                let error_msg = Message::bot(
                    self.take_seq(),
                    notice.body.clone(),
                    Some("error".to_string()),
                    Default::default(),
                );
                renderer.print_message(&error_msg);
                self.transcript.push(error_msg);
                renderer.print_notice(&notice);

                SendOutcome::Failed
            }
        }
    }

    /// Fetches help text from the service and renders it.
    ///
    /// Falls back to the built-in help text on any failure. There is no
    /// in-flight guard: a help request may overlap an outstanding chat
    /// request (they render to disjoint regions).
    pub async fn request_help(&self, renderer: &mut dyn Renderer) {
        match self.client.help().await {
            Ok(help) => renderer.print_help(&help.message),
            Err(_) => renderer.print_help(crate::chat::commands::default_help_text()),
        }
    }

    /// Clears the transcript, quick replies, and navigation state.
    ///
    /// The session identifier and the sequence counter survive: the
    /// identifier is never rotated client-side and sequence numbers stay
    /// strictly increasing for the life of the session.
    pub fn clear(&mut self) {
        self.transcript.clear();
        self.quick_replies.clear();
        self.navigation = NavLevel::Main;
    }

    /// Returns the transcript entries appended so far.
    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    /// Returns the session identifier, once assigned.
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    /// Returns the current navigation level.
    pub fn navigation(&self) -> NavLevel {
        self.navigation
    }

    /// Returns the quick-reply labels extracted from the latest reply.
    pub fn quick_replies(&self) -> &[String] {
        &self.quick_replies
    }

    /// Returns the base URL of the service this session talks to.
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// Returns the current session statistics snapshot.
    pub fn stats(&self) -> SessionStats {
        SessionStats {
            message_count: self.transcript.len(),
            session_id: self.session_id.clone(),
            navigation: self.navigation,
            total_requests: self.request_count,
            total_errors: self.error_count,
        }
    }

    fn take_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::notice::Notice;
    use crate::types::Priority;

    /// Renderer that swallows everything.
    struct NullRenderer;

    impl Renderer for NullRenderer {
        fn print_message(&mut self, _: &Message) {}
        fn print_help(&mut self, _: &str) {}
        fn print_notice(&mut self, _: &Notice) {}
        fn print_quick_replies(&mut self, _: &[String]) {}
        fn show_navigation(&mut self, _: NavLevel) {}
        fn emergency_alert(&mut self) {}
        fn print_info(&mut self, _: &str) {}
        fn print_error(&mut self, _: &str) {}
    }

    fn session() -> ChatSession {
        let client = WardClient::new(Some("http://127.0.0.1:9/".to_string())).unwrap();
        ChatSession::new(client, ChatConfig::default())
    }

    #[tokio::test]
    async fn empty_input_is_dropped() {
        let mut session = session();
        let outcome = session.send("   ", &mut NullRenderer).await;
        assert_eq!(outcome, SendOutcome::Dropped);
        assert!(session.transcript().is_empty());
        assert_eq!(session.stats().total_requests, 0);
    }

    #[tokio::test]
    async fn in_flight_sends_are_dropped_and_counted() {
        use biometrics::Sensor;

        let mut session = session();
        let before = observability::MESSAGES_DROPPED.read();

        // Typing nothing is not a dropped message.
        let outcome = session.send("   ", &mut NullRenderer).await;
        assert_eq!(outcome, SendOutcome::Dropped);
        assert_eq!(observability::MESSAGES_DROPPED.read(), before);

        session.in_flight = true;
        let outcome = session.send("hello", &mut NullRenderer).await;
        assert_eq!(outcome, SendOutcome::Dropped);
        assert!(session.transcript().is_empty());
        assert_eq!(observability::MESSAGES_DROPPED.read(), before + 1);
    }

    #[test]
    fn clear_retains_session_id_and_counter() {
        let mut session = session();
        session.session_id = Some("s1".to_string());
        let user_msg = Message::user(session.take_seq(), "hi");
        session.transcript.push(user_msg);
        let bot_msg = Message::bot(
            session.take_seq(),
            "hello",
            Some("greeting".to_string()),
            Priority::Normal,
        );
        session.transcript.push(bot_msg);
        session.navigation = NavLevel::DrillDown;

        session.clear();
        assert!(session.transcript().is_empty());
        assert_eq!(session.session_id(), Some("s1"));
        assert_eq!(session.navigation(), NavLevel::Main);
        // Counter keeps climbing after a clear.
        assert_eq!(session.take_seq(), 3);
    }

    #[test]
    fn new_session_defaults() {
        let session = session();
        assert!(session.transcript().is_empty());
        assert!(session.session_id().is_none());
        assert_eq!(session.navigation(), NavLevel::Main);
        assert!(session.quick_replies().is_empty());
    }
}
