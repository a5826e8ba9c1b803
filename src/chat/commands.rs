//! Slash command parsing for the chat application.
//!
//! This module handles parsing of special commands that start with `/`,
//! allowing users to control the session and navigate the menu tree
//! without typing the canned navigation phrases by hand.

/// A parsed chat command.
///
/// Navigation commands (`Main`, `Back`, `Search`) resolve to canned
/// messages that are sent to the service like any other input; the rest
/// act locally.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatCommand {
    /// Clear the local transcript.
    Clear,

    /// Fetch help text from the service.
    Guide,

    /// Jump back to the main menu.
    Main,

    /// Go up one navigation level.
    Back,

    /// Search the menu tree for a term.
    Search(String),

    /// Display session statistics.
    Stats,

    /// Display local command help.
    Help,

    /// Exit the chat application.
    Quit,

    /// Report a parsing error back to the caller.
    Invalid(String),
}

/// Canned message that returns the conversation to the main menu.
pub const MAIN_MENU_MESSAGE: &str = "main";

/// Canned message that goes up one navigation level.
pub const BACK_MESSAGE: &str = "back";

/// Parses user input for slash commands.
///
/// Returns `Some(ChatCommand)` if the input is a command, or `None` if it
/// should be sent to the service as a regular message.
///
/// # Examples
///
/// ```
/// # use wardline::chat::parse_command;
/// assert!(parse_command("/quit").is_some());
/// assert!(parse_command("/search gauze").is_some());
/// assert!(parse_command("the fourth-floor printer is broken").is_none());
/// ```
pub fn parse_command(input: &str) -> Option<ChatCommand> {
    let input = input.trim();

    if !input.starts_with('/') {
        return None;
    }

    let mut parts = input[1..].splitn(2, ' ');
    let command = parts.next()?.to_lowercase();
    let argument = parts.next().map(|s| s.trim()).filter(|s| !s.is_empty());

    let result = match command.as_str() {
        "clear" => ChatCommand::Clear,
        "guide" => ChatCommand::Guide,
        "main" => ChatCommand::Main,
        "back" => ChatCommand::Back,
        "search" => match argument {
            Some(term) if term.chars().count() >= 2 => ChatCommand::Search(term.to_string()),
            Some(_) => {
                ChatCommand::Invalid("/search needs at least two characters".to_string())
            }
            None => ChatCommand::Invalid("/search requires a term".to_string()),
        },
        "stats" | "status" => ChatCommand::Stats,
        "help" | "?" => ChatCommand::Help,
        "quit" | "exit" | "q" => ChatCommand::Quit,
        _ => ChatCommand::Invalid(format!("Unknown command: /{}", command)),
    };

    Some(result)
}

/// Returns help text describing available commands.
pub fn help_text() -> &'static str {
    r#"Available commands:
  /guide            Fetch help from the assistant service
  /main             Return to the main menu
  /back             Go up one navigation level
  /search <term>    Search the menu tree (two characters minimum)
  /clear            Clear the local transcript
  /stats            Show session statistics
  /help             Show this help message
  /quit             Exit the chat

Typing a number 1-4 selects the matching quick reply, when shown."#
}

/// Built-in help shown when the service's help endpoint is unreachable.
pub fn default_help_text() -> &'static str {
    r#"Ward assistant help

Ask about:
• Repairs: report broken equipment or fixtures
• Supplies: request ward stock and sterile goods
• Contacts: look up department phone extensions
• Emergencies: describe the situation for immediate guidance

Send "main" to return to the main menu or "back" to go up one level."#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_quit_commands() {
        assert_eq!(parse_command("/quit"), Some(ChatCommand::Quit));
        assert_eq!(parse_command("/exit"), Some(ChatCommand::Quit));
        assert_eq!(parse_command("/q"), Some(ChatCommand::Quit));
        assert_eq!(parse_command("  /quit  "), Some(ChatCommand::Quit));
    }

    #[test]
    fn parse_navigation_commands() {
        assert_eq!(parse_command("/main"), Some(ChatCommand::Main));
        assert_eq!(parse_command("/back"), Some(ChatCommand::Back));
        assert_eq!(parse_command("/guide"), Some(ChatCommand::Guide));
    }

    #[test]
    fn parse_search() {
        assert_eq!(
            parse_command("/search gauze"),
            Some(ChatCommand::Search("gauze".to_string()))
        );
        assert!(matches!(
            parse_command("/search g"),
            Some(ChatCommand::Invalid(msg)) if msg.contains("two characters")
        ));
        assert!(matches!(
            parse_command("/search"),
            Some(ChatCommand::Invalid(msg)) if msg.contains("requires")
        ));
    }

    #[test]
    fn parse_clear_and_stats() {
        assert_eq!(parse_command("/clear"), Some(ChatCommand::Clear));
        assert_eq!(parse_command("/CLEAR"), Some(ChatCommand::Clear));
        assert_eq!(parse_command("/stats"), Some(ChatCommand::Stats));
        assert_eq!(parse_command("/status"), Some(ChatCommand::Stats));
    }

    #[test]
    fn unknown_commands_are_invalid() {
        assert!(matches!(
            parse_command("/frobnicate"),
            Some(ChatCommand::Invalid(msg)) if msg.contains("frobnicate")
        ));
    }

    #[test]
    fn non_commands() {
        assert_eq!(parse_command("hello"), None);
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("  "), None);
    }

    #[test]
    fn help_texts_not_empty() {
        assert!(help_text().contains("/guide"));
        assert!(help_text().contains("/quit"));
        assert!(default_help_text().contains("• Repairs"));
    }
}
