//! Host-agnostic panel application services
//!
//! This crate wires the pure panel state machine to its two external
//! collaborators: the hosted completion endpoint (through
//! [`completion::CompletionBackend`]) and the design-tool host (through the
//! capability traits in [`host`]). Nothing here renders anything: the host
//! owns the panel surface, while this crate owns what happens between a
//! submission and the next idle state.

pub mod host;
pub mod session;

// Re-exports for convenience
pub use host::{
    Clipboard, HostError, HostNotifier, MemoryClipboard, NullNotifier, PanelPlacement,
    PanelPresenter, VecNotifier,
};
pub use session::{CopyError, PanelSession, SubmitOutcome};
