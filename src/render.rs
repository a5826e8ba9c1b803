//! Output rendering for the chat transcript.
//!
//! This module provides the renderer trait the session drives and a
//! plain-text implementation. The trait is the injection point that keeps
//! the session logic headless: tests drive it with recording renderers and
//! the state machine never touches a terminal.

use std::io::{self, Stdout, Write};

use crate::chat::Notice;
use crate::format::{self, Span};
use crate::types::{Message, NavLevel, Sender};
use crate::utils;

/// ANSI escape code for bold text (used for phone extensions).
const ANSI_BOLD: &str = "\x1b[1m";

/// ANSI escape code for dim text (used for hints and notices).
const ANSI_DIM: &str = "\x1b[2m";

/// ANSI escape code for underlined text (used for links).
const ANSI_UNDERLINE: &str = "\x1b[4m";

/// ANSI escape code for red text (used for emergencies and errors).
const ANSI_RED: &str = "\x1b[31m";

/// ANSI escape code for cyan text (used for links and quick replies).
const ANSI_CYAN: &str = "\x1b[36m";

/// ANSI escape code to reset all styling.
const ANSI_RESET: &str = "\x1b[0m";

/// Terminal bell, the closest analog to a system notification.
const BELL: &str = "\x07";

/// Trait for rendering session output.
///
/// This abstraction allows for different rendering strategies:
/// - Plain text with ANSI styling
/// - Plain text without styling (for piping/redirecting)
/// - Recording renderers for headless tests
pub trait Renderer: Send {
    /// Render one transcript entry.
    fn print_message(&mut self, message: &Message);

    /// Render help text (server-provided or the built-in default).
    fn print_help(&mut self, text: &str);

    /// Render a transient failure notice.
    fn print_notice(&mut self, notice: &Notice);

    /// Surface quick-reply affordances for the latest reply.
    fn print_quick_replies(&mut self, options: &[String]);

    /// Reflect a navigation level change.
    fn show_navigation(&mut self, level: NavLevel);

    /// Signal that an emergency reply arrived.
    fn emergency_alert(&mut self);

    /// Print an informational message.
    fn print_info(&mut self, info: &str);

    /// Print an error message.
    fn print_error(&mut self, error: &str);
}

/// Plain text renderer with optional ANSI styling.
///
/// Bot messages are printed with a clock label and category tag; links are
/// underlined, phone extensions bold, emergency messages red. User messages
/// are not re-echoed: the prompt already shows the typed line.
pub struct PlainTextRenderer {
    stdout: Stdout,
    use_color: bool,
}

impl PlainTextRenderer {
    /// Creates a new PlainTextRenderer with ANSI colors enabled.
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            use_color: true,
        }
    }

    /// Creates a new PlainTextRenderer with specified color setting.
    pub fn with_color(use_color: bool) -> Self {
        Self {
            stdout: io::stdout(),
            use_color,
        }
    }

    /// Flushes stdout to ensure immediate display.
    fn flush(&mut self) {
        let _ = self.stdout.flush();
    }

    fn write_span(&mut self, span: &Span, emergency: bool) {
        if !self.use_color {
            print!("{}", span.as_str());
            return;
        }
        match span {
            Span::Text(text) => {
                if emergency {
                    print!("{ANSI_RED}{text}{ANSI_RESET}");
                } else {
                    print!("{text}");
                }
            }
            Span::Link(url) => {
                print!("{ANSI_CYAN}{ANSI_UNDERLINE}{url}{ANSI_RESET}");
            }
            Span::Phone(number) => {
                print!("{ANSI_BOLD}{number}{ANSI_RESET}");
            }
        }
    }

    fn print_hint(&mut self, hint: &str) {
        if self.use_color {
            println!("{ANSI_DIM}{hint}{ANSI_RESET}");
        } else {
            println!("{hint}");
        }
        self.flush();
    }
}

impl Default for PlainTextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for PlainTextRenderer {
    fn print_message(&mut self, message: &Message) {
        if message.sender == Sender::User {
            return;
        }

        let clock = utils::time::clock_label(message.timestamp);
        let emergency = message.is_emergency();
        match message.category.as_deref() {
            Some(category) => print!("Bot [{clock}] ({category}): "),
            None => print!("Bot [{clock}]: "),
        }
        for (index, line) in format::format_message(&message.text).iter().enumerate() {
            if index > 0 {
                print!("    ");
            }
            for span in line {
                self.write_span(span, emergency);
            }
            println!();
        }
        self.flush();
    }

    fn print_help(&mut self, text: &str) {
        for line in text.lines() {
            println!("    {line}");
        }
        self.flush();
    }

    fn print_notice(&mut self, notice: &Notice) {
        let secs = notice.dismiss_after.as_secs();
        if self.use_color {
            eprintln!(
                "{ANSI_RED}[{}]{ANSI_RESET} {} {ANSI_DIM}(dismisses in {secs}s){ANSI_RESET}",
                notice.title, notice.body
            );
        } else {
            eprintln!("[{}] {} (dismisses in {secs}s)", notice.title, notice.body);
        }
    }

    fn print_quick_replies(&mut self, options: &[String]) {
        self.print_hint("quick replies:");
        for (index, option) in options.iter().enumerate() {
            if self.use_color {
                println!("  {ANSI_CYAN}[{}]{ANSI_RESET} {option}", index + 1);
            } else {
                println!("  [{}] {option}", index + 1);
            }
        }
        self.flush();
    }

    fn show_navigation(&mut self, level: NavLevel) {
        match level {
            NavLevel::Main => {
                self.print_hint("(main menu: ask about repairs, supplies, or contacts)");
            }
            NavLevel::DrillDown => {
                self.print_hint("(navigation: /back, /main, or /search <term>)");
            }
        }
    }

    fn emergency_alert(&mut self) {
        if self.use_color {
            print!("{BELL}");
            println!("{ANSI_RED}{ANSI_BOLD}*** EMERGENCY ***{ANSI_RESET}");
        } else {
            println!("*** EMERGENCY ***");
        }
        self.flush();
    }

    fn print_info(&mut self, info: &str) {
        println!("{info}");
        self.flush();
    }

    fn print_error(&mut self, error: &str) {
        eprintln!("Error: {error}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_default_has_color() {
        let renderer = PlainTextRenderer::new();
        assert!(renderer.use_color);
    }

    #[test]
    fn renderer_without_color() {
        let renderer = PlainTextRenderer::with_color(false);
        assert!(!renderer.use_color);
    }
}
