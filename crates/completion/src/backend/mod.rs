//! Completion backend abstraction
//!
//! The panel talks to a hosted model endpoint through a single trait so the
//! service layer can be exercised against a scripted double in tests. The
//! one real implementation is [`RemoteBackend`].

pub mod remote;

use async_trait::async_trait;

pub use remote::RemoteBackend;

/// Error types for completion operations
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("no API credential configured")]
    MissingCredential,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("model returned no usable code")]
    EmptyCompletion,
}

/// One prompt in, sanitized code out
///
/// `complete` resolves to non-empty code with fence markers already
/// stripped, or to an error. Callers never see raw fenced output and never
/// see an empty success.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Human-readable name for diagnostics
    fn name(&self) -> &'static str;

    /// Whether a credential is configured
    fn is_configured(&self) -> bool;

    /// Send one prompt and await the sanitized completion
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}
