//! Conversation model and panel state machine
//!
//! This crate holds the pure core of the Tracery panel: the append-only
//! conversation log, the prompt assembly for follow-up requests, and the
//! reducer that transitions panel state in response to user and network
//! events. It performs no I/O; network and host calls are modeled as
//! effects returned from the reducer, so the whole state machine can be
//! tested without a runtime or a UI.

pub mod log;
pub mod prompt;
pub mod state;
pub mod turn;

// Re-exports for convenience
pub use crate::log::ConversationLog;
pub use prompt::build_prompt;
pub use state::{
    Notice, PanelAction, PanelEffect, PanelPhase, PanelState, RequestToken, Step, USAGE_GUIDE,
};
pub use turn::{Author, Turn};
