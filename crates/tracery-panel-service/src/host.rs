//! Host capability traits
//!
//! The design-tool host is an external collaborator that places the panel,
//! shows transient notifications, and owns the platform clipboard. The
//! service invokes these capabilities but never implements them. Concrete
//! bridges live in adapter crates; the in-memory implementations here exist
//! for tests and headless use.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Error when a host capability call fails
#[derive(Debug, Clone)]
pub struct HostError {
    pub message: String,
}

impl HostError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for HostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "host error: {}", self.message)
    }
}

impl std::error::Error for HostError {}

/// Placement and size configuration for the panel surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelPlacement {
    /// Anchor within the host window (e.g. "top right")
    pub position: String,
    pub width: u32,
    pub height: u32,
}

impl Default for PanelPlacement {
    fn default() -> Self {
        Self {
            position: "top right".to_string(),
            width: 300,
            height: 220,
        }
    }
}

/// Asks the host to show the panel surface
#[async_trait]
pub trait PanelPresenter: Send + Sync {
    async fn present(&self, placement: &PanelPlacement) -> Result<(), HostError>;
}

/// Surfaces a short transient message to the user
#[async_trait]
pub trait HostNotifier: Send + Sync {
    async fn notify(&self, message: &str) -> Result<(), HostError>;
}

/// Writes text to the platform clipboard
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), HostError>;
}

/// A no-op notifier that discards all messages
///
/// Useful for testing or when notifications aren't needed.
pub struct NullNotifier;

#[async_trait]
impl HostNotifier for NullNotifier {
    async fn notify(&self, _message: &str) -> Result<(), HostError> {
        Ok(())
    }
}

/// A vector-based notifier that collects messages
///
/// Useful for testing to verify which notifications were surfaced.
#[derive(Default)]
pub struct VecNotifier {
    messages: std::sync::Mutex<Vec<String>>,
}

impl VecNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All collected messages, in order
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl HostNotifier for VecNotifier {
    async fn notify(&self, message: &str) -> Result<(), HostError> {
        self.messages.lock().unwrap().push(message.to_string());
        Ok(())
    }
}

/// An in-memory clipboard that records the last written text
#[derive(Default)]
pub struct MemoryClipboard {
    contents: std::sync::Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently written text
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().unwrap().clone()
    }
}

#[async_trait]
impl Clipboard for MemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<(), HostError> {
        *self.contents.lock().unwrap() = Some(text.to_string());
        Ok(())
    }
}

/// A clipboard that refuses every write
///
/// Useful for testing the failure notification path.
pub struct FailingClipboard;

#[async_trait]
impl Clipboard for FailingClipboard {
    async fn write_text(&self, _text: &str) -> Result<(), HostError> {
        Err(HostError::new("clipboard unavailable"))
    }
}

/// A presenter that records requested placements
#[derive(Default)]
pub struct RecordingPresenter {
    placements: std::sync::Mutex<Vec<PanelPlacement>>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn placements(&self) -> Vec<PanelPlacement> {
        self.placements.lock().unwrap().clone()
    }
}

#[async_trait]
impl PanelPresenter for RecordingPresenter {
    async fn present(&self, placement: &PanelPlacement) -> Result<(), HostError> {
        self.placements.lock().unwrap().push(placement.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_placement() {
        let placement = PanelPlacement::default();
        assert_eq!(placement.position, "top right");
        assert_eq!(placement.width, 300);
        assert_eq!(placement.height, 220);
    }

    #[test]
    fn test_placement_serializes_camel_case() {
        let json = serde_json::to_value(PanelPlacement::default()).unwrap();
        assert_eq!(json["position"], "top right");
        assert_eq!(json["width"], 300);
    }

    #[tokio::test]
    async fn test_vec_notifier_collects_in_order() {
        let notifier = VecNotifier::new();
        notifier.notify("first").await.unwrap();
        notifier.notify("second").await.unwrap();
        assert_eq!(notifier.messages(), vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_memory_clipboard_records_last_write() {
        let clipboard = MemoryClipboard::new();
        assert!(clipboard.contents().is_none());
        clipboard.write_text("const X = 1").await.unwrap();
        assert_eq!(clipboard.contents().as_deref(), Some("const X = 1"));
    }

    #[tokio::test]
    async fn test_failing_clipboard_errors() {
        let clipboard = FailingClipboard;
        assert!(clipboard.write_text("anything").await.is_err());
    }
}
