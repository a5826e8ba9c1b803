// Public modules
pub mod chat;
pub mod client;
pub mod error;
pub mod format;
pub mod observability;
pub mod render;
pub mod types;
pub mod utils;

// Re-exports
pub use client::WardClient;
pub use error::{Error, Result};
pub use render::{PlainTextRenderer, Renderer};
pub use types::*;
