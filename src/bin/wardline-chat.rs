//! Interactive chat application for the ward assistant service.
//!
//! This binary provides a REPL interface for talking to the ward assistant
//! chatbot over its HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Basic usage with default settings (WARDLINE_URL or localhost)
//! wardline-chat
//!
//! # Point at a specific service
//! wardline-chat --url http://ward.example:5000/
//!
//! # Disable colors (useful for piping output)
//! wardline-chat --no-color
//! ```
//!
//! # Commands
//!
//! While chatting, you can use slash commands:
//! - `/guide` - Fetch help from the service
//! - `/main` - Return to the main menu
//! - `/back` - Go up one navigation level
//! - `/search <term>` - Search the menu tree
//! - `/stats` - Show session statistics
//! - `/clear` - Clear the local transcript
//! - `/quit` - Exit the application
//!
//! Typing a bare number 1-4 selects the matching quick reply, when shown.

use arrrg::CommandLine;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use wardline::chat::{
    BACK_MESSAGE, ChatArgs, ChatCommand, ChatConfig, ChatSession, MAIN_MENU_MESSAGE, help_text,
    parse_command,
};
use wardline::{PlainTextRenderer, Renderer, WardClient};

/// Main entry point for the wardline-chat application.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (args, _) = ChatArgs::from_command_line_relaxed("wardline-chat [OPTIONS]");
    let config = ChatConfig::from(args);
    let use_color = config.use_color;

    let client = WardClient::with_options(config.base_url.clone(), Some(config.timeout))?;
    let mut session = ChatSession::new(client, config);
    let mut renderer = PlainTextRenderer::with_color(use_color);
    let mut rl = DefaultEditor::new()?;

    println!("Ward assistant ({})", session.base_url());
    println!("Type /help for commands, /quit to exit\n");

    loop {
        let readline = rl.readline("You: ");

        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                // Bare numbers select quick replies.
                if let Some(label) = quick_reply_for(&session, line) {
                    session.send(&label, &mut renderer).await;
                    continue;
                }

                // Check for slash commands
                if let Some(cmd) = parse_command(line) {
                    match cmd {
                        ChatCommand::Quit => {
                            println!("Goodbye!");
                            break;
                        }
                        ChatCommand::Clear => {
                            session.clear();
                            renderer.print_info("Transcript cleared.");
                        }
                        ChatCommand::Help => {
                            for line in help_text().lines() {
                                println!("    {}", line);
                            }
                        }
                        ChatCommand::Guide => {
                            session.request_help(&mut renderer).await;
                        }
                        ChatCommand::Main => {
                            session.send(MAIN_MENU_MESSAGE, &mut renderer).await;
                        }
                        ChatCommand::Back => {
                            session.send(BACK_MESSAGE, &mut renderer).await;
                        }
                        ChatCommand::Search(term) => {
                            session.send(&term, &mut renderer).await;
                        }
                        ChatCommand::Stats => {
                            print_stats(&session);
                        }
                        ChatCommand::Invalid(message) => {
                            renderer.print_error(&message);
                        }
                    }
                    continue;
                }

                // Regular message - send to the service
                session.send(line, &mut renderer).await;
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C at prompt - soft interrupt
                println!();
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D - exit
                println!("\nGoodbye!");
                break;
            }
            Err(err) => {
                renderer.print_error(&format!("Input error: {}", err));
                break;
            }
        }
    }

    Ok(())
}

/// Resolves a bare number 1-4 to the matching quick-reply label.
fn quick_reply_for(session: &ChatSession, line: &str) -> Option<String> {
    let n = line.parse::<usize>().ok()?;
    if n == 0 {
        return None;
    }
    session.quick_replies().get(n - 1).cloned()
}

fn print_stats(session: &ChatSession) {
    let stats = session.stats();
    println!("    Session Statistics:");
    println!("      Service: {}", session.base_url());
    println!("      Messages: {}", stats.message_count);
    match stats.session_id.as_deref() {
        Some(id) => println!("      Session id: {}", id),
        None => println!("      Session id: (not assigned)"),
    }
    println!("      Navigation: {}", stats.navigation);
    println!(
        "      Requests: {} total / {} failed",
        stats.total_requests, stats.total_errors
    );
}
