//! Configuration for the completion client

use serde::{Deserialize, Serialize};

use crate::constants::{defaults, env as env_keys};

/// Connection and sampling settings for the hosted model endpoint
///
/// The credential is read from the environment only; it is skipped during
/// (de)serialization so it never lands in a config file or a log payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// Base URL of the hosted model API
    pub base_url: String,
    /// Model identifier
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Bearer credential, supplied via the environment
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::BASE_URL.to_string(),
            model: defaults::MODEL.to_string(),
            temperature: defaults::TEMPERATURE,
            api_key: None,
        }
    }
}

impl CompletionConfig {
    /// Defaults plus the credential from the environment
    ///
    /// An unset or empty `TRACERY_API_KEY` leaves the credential absent; the
    /// backend refuses to send requests until one is configured.
    pub fn from_env() -> Self {
        let api_key = std::env::var(env_keys::API_KEY)
            .ok()
            .filter(|key| !key.trim().is_empty());
        if api_key.is_none() {
            log::warn!("{} is not set; completion requests will fail", env_keys::API_KEY);
        }
        Self {
            api_key,
            ..Self::default()
        }
    }

    /// Replace the credential
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CompletionConfig::default();
        assert_eq!(config.base_url, "https://api.deepseek.com");
        assert_eq!(config.model, "deepseek-coder");
        assert!((config.temperature - 0.7).abs() < f32::EPSILON);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_credential_is_never_serialized() {
        let config = CompletionConfig::default().with_api_key("sk-secret");
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("sk-secret"));
    }
}
