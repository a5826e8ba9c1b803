//! Chat application module for conversing with the ward assistant service.
//!
//! This module provides a REPL chat interface built on top of the wardline
//! client library. It supports:
//!
//! - Transcript rendering with emergency styling
//! - Quick-reply affordances extracted from bullet-marked reply options
//! - Navigation state driven by reply categories
//! - Slash commands for session control
//!
//! # Architecture
//!
//! The module is organized into several components:
//!
//! - [`config`]: CLI argument parsing and configuration
//! - [`session`]: Core chat session management and service interaction
//! - [`commands`]: Slash command parsing and handling
//! - [`notice`]: Classification of failures into transient notices

mod commands;
mod config;
mod notice;
mod session;

pub use crate::render::{PlainTextRenderer, Renderer};
pub use commands::{
    BACK_MESSAGE, ChatCommand, MAIN_MENU_MESSAGE, default_help_text, help_text, parse_command,
};
pub use config::{ChatArgs, ChatConfig};
pub use notice::Notice;
pub use session::{ChatSession, SendOutcome, SessionStats};
