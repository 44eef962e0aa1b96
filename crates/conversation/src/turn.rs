//! Conversation turns
//!
//! A turn is one message in the panel conversation, authored by either the
//! user or the assistant. Turns are immutable once created and are only ever
//! appended to the log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    User,
    Assistant,
}

impl Author {
    /// Label used when rendering a turn into prompt context
    pub fn label(&self) -> &'static str {
        match self {
            Author::User => "User",
            Author::Assistant => "Assistant",
        }
    }
}

/// One message in the conversation
///
/// Assistant turns produced by a successful generation carry the sanitized
/// code snippet and the fixed usage guide; user turns carry neither.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Turn {
    /// Unique identifier, never reused
    pub id: Uuid,
    /// Who authored this turn
    pub author: Author,
    /// Display text of the turn
    pub text: String,
    /// Generated code snippet, if this turn carries one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Usage guide shown alongside the generated code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guide: Option<String>,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

impl Turn {
    /// Create a user turn from an utterance
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            author: Author::User,
            text: text.into(),
            code: None,
            guide: None,
            created_at: Utc::now(),
        }
    }

    /// Create an assistant turn carrying a generated code snippet
    pub fn assistant(
        text: impl Into<String>,
        code: impl Into<String>,
        guide: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            author: Author::Assistant,
            text: text.into(),
            code: Some(code.into()),
            guide: Some(guide.into()),
            created_at: Utc::now(),
        }
    }

    /// Whether this turn carries a generated code snippet
    pub fn has_code(&self) -> bool {
        self.code.is_some()
    }
}
