//! HTTP bridge to the design-tool host runtime
//!
//! The host exposes a small local endpoint through which a panel can ask for
//! its surface, raise notifications, and write the platform clipboard. This
//! crate implements the service-layer capability traits against that
//! endpoint, keeping the host entirely out of the core crates.

use async_trait::async_trait;
use serde_json::json;

use tracery_panel_service::{Clipboard, HostError, HostNotifier, PanelPlacement, PanelPresenter};

/// Environment variable overriding the host bridge URL
pub const BRIDGE_URL_ENV: &str = "TRACERY_HOST_BRIDGE_URL";

/// Default bridge URL for local development
const DEFAULT_BRIDGE_URL: &str = "http://127.0.0.1:8787";

/// Error types for bridge calls
#[derive(Debug, thiserror::Error)]
pub enum HostBridgeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("host bridge returned status {status}")]
    Status { status: u16 },
}

/// Capability implementations backed by the host's local bridge endpoint
///
/// Every call is one `POST` with a small JSON body; a non-success status is
/// an error. The bridge holds no state of its own.
pub struct HttpHostBridge {
    /// HTTP client for bridge requests
    http_client: reqwest::Client,
    base_url: String,
}

impl HttpHostBridge {
    /// Create a bridge against the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a bridge from `TRACERY_HOST_BRIDGE_URL`, defaulted for local development
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BRIDGE_URL_ENV).unwrap_or_else(|_| DEFAULT_BRIDGE_URL.to_string());
        Self::new(base_url)
    }

    /// The bridge base URL in use
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn post(&self, path: &str, body: serde_json::Value) -> Result<(), HostBridgeError> {
        let url = self.endpoint(path);
        log::debug!("bridge call: POST {}", url);

        let response = self
            .http_client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(HostBridgeError::Http)?;

        if !response.status().is_success() {
            return Err(HostBridgeError::Status {
                status: response.status().as_u16(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl PanelPresenter for HttpHostBridge {
    async fn present(&self, placement: &PanelPlacement) -> Result<(), HostError> {
        let body = serde_json::to_value(placement)
            .map_err(|e| HostError::new(format!("failed to encode placement: {}", e)))?;
        self.post("panel/present", body)
            .await
            .map_err(|e| HostError::new(e.to_string()))
    }
}

#[async_trait]
impl HostNotifier for HttpHostBridge {
    async fn notify(&self, message: &str) -> Result<(), HostError> {
        self.post("panel/notify", json!({ "message": message }))
            .await
            .map_err(|e| HostError::new(e.to_string()))
    }
}

#[async_trait]
impl Clipboard for HttpHostBridge {
    async fn write_text(&self, text: &str) -> Result<(), HostError> {
        self.post("clipboard/write", json!({ "text": text }))
            .await
            .map_err(|e| HostError::new(e.to_string()))
    }
}
