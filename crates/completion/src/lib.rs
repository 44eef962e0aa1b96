//! Remote completion client for the Tracery panel
//!
//! One synchronous-looking exchange per user turn: the assembled prompt goes
//! out as a single-message chat-completion request with a bearer credential,
//! and the first choice's message text comes back. The response sanitizer
//! strips markdown code fences before anything reaches the conversation;
//! an empty result after sanitization is a failure, never a success.

pub mod backend;
pub mod config;
pub mod constants;
pub mod sanitize;
pub mod types;

// Re-exports for convenience
pub use backend::{CompletionBackend, CompletionError, RemoteBackend};
pub use config::CompletionConfig;
pub use sanitize::strip_code_fences;
pub use types::{ChatChoice, ChatMessage, ChatRequest, ChatResponse, ChoiceMessage};
