// Public modules
pub mod chat_reply;
pub mod chat_request;
pub mod help_reply;
pub mod message;
pub mod navigation;
pub mod priority;
pub mod sender;

// Re-exports
pub use chat_reply::ChatReply;
pub use chat_request::ChatRequest;
pub use help_reply::HelpReply;
pub use message::{EMERGENCY_CATEGORY, Message};
pub use navigation::{DRILLDOWN_CATEGORIES, NavLevel, classify_category};
pub use priority::{Priority, PriorityParseError};
pub use sender::Sender;
