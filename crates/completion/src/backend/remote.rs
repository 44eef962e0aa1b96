//! Hosted chat-completion backend
//!
//! Issues one outbound request per user turn to the configured endpoint and
//! extracts the first choice's message text. There is no retry, no backoff,
//! and no streaming; the call runs to completion or to a transport failure.

use async_trait::async_trait;

use super::{CompletionBackend, CompletionError};
use crate::config::CompletionConfig;
use crate::sanitize;
use crate::types::{ChatMessage, ChatRequest, ChatResponse};

/// Backend for an OpenAI-compatible hosted endpoint
pub struct RemoteBackend {
    /// HTTP client for API requests
    http_client: reqwest::Client,
    config: CompletionConfig,
}

impl RemoteBackend {
    /// Create a backend with the given configuration
    pub fn new(config: CompletionConfig) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            config,
        }
    }

    /// Create a backend configured from defaults and the environment
    pub fn from_env() -> Self {
        Self::new(CompletionConfig::from_env())
    }

    /// The configuration in use
    pub fn config(&self) -> &CompletionConfig {
        &self.config
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl CompletionBackend for RemoteBackend {
    fn name(&self) -> &'static str {
        "hosted-chat"
    }

    fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(CompletionError::MissingCredential)?;

        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
            temperature: self.config.temperature,
        };

        let url = self.endpoint();
        log::debug!("sending completion request to {}", url);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(CompletionError::Http)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Api { status, body });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::Malformed(format!("failed to parse response: {}", e)))?;

        let content = parsed
            .choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .ok_or_else(|| CompletionError::Malformed("response carried no choices".to_string()))?;

        let code = sanitize::strip_code_fences(content);
        if code.is_empty() {
            return Err(CompletionError::EmptyCompletion);
        }

        log::debug!("completion returned {} chars after sanitization", code.len());
        Ok(code)
    }
}
