//! Panel state machine
//!
//! The panel's mutable UI state (input text, loading flag, message list) is
//! modeled as an explicit state value transitioned by a pure reducer. The
//! network call is an effect returned from the reducer, not performed by it,
//! so transitions can be tested without any runtime.
//!
//! Each outbound request carries a [`RequestToken`]. A completion action is
//! applied only when its token matches the one currently awaited; anything
//! else is a stale response from a superseded request and is discarded.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::log::ConversationLog;
use crate::prompt;
use crate::turn::Turn;

/// Fixed usage guide attached to every generated snippet
pub const USAGE_GUIDE: &str = "Tip: Paste the code into a Framer Code Component.";

/// Display text of an assistant turn carrying generated code
const ASSISTANT_TEXT: &str = "Here is the generated component.";

/// Token identifying one outbound completion request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestToken(Uuid);

impl RequestToken {
    /// Mint a token for a new request
    pub fn fresh() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Where the panel is in its request cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelPhase {
    /// Ready for a new submission
    Idle,
    /// A completion request is in flight
    AwaitingResponse { request: RequestToken },
}

impl PanelPhase {
    /// Whether a request is currently in flight
    pub fn is_awaiting(&self) -> bool {
        matches!(self, PanelPhase::AwaitingResponse { .. })
    }

    fn is_current(&self, token: RequestToken) -> bool {
        matches!(self, PanelPhase::AwaitingResponse { request } if *request == token)
    }
}

/// Inputs the reducer responds to
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PanelAction {
    /// The user submitted new text
    Submit { text: String },
    /// A completion request finished with sanitized, non-empty code
    #[serde(rename_all = "camelCase")]
    CompletionArrived { request: RequestToken, code: String },
    /// A completion request failed
    #[serde(rename_all = "camelCase")]
    CompletionFailed { request: RequestToken, error: String },
}

/// Short user-facing outcomes surfaced through the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Notice {
    CodeGenerated,
    GenerationFailed,
}

impl Notice {
    /// Message text shown by the host
    pub fn message(&self) -> &'static str {
        match self {
            Notice::CodeGenerated => "Code generated! Click copy to use it.",
            Notice::GenerationFailed => "Failed to generate code.",
        }
    }
}

/// External work requested by a transition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PanelEffect {
    /// Send the assembled prompt to the completion endpoint
    #[serde(rename_all = "camelCase")]
    DispatchCompletion { request: RequestToken, prompt: String },
    /// Surface a short message through the host
    Notify { notice: Notice },
}

/// Result of applying one action: the next state plus requested effects
#[derive(Debug, Clone)]
pub struct Step {
    pub state: PanelState,
    pub effects: Vec<PanelEffect>,
}

impl Step {
    fn unchanged(state: PanelState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }
}

/// The panel's complete application state
#[derive(Debug, Clone)]
pub struct PanelState {
    pub conversation: ConversationLog,
    pub phase: PanelPhase,
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelState {
    /// Create the initial state: empty conversation, idle
    pub fn new() -> Self {
        Self {
            conversation: ConversationLog::new(),
            phase: PanelPhase::Idle,
        }
    }

    /// Apply one action, producing the next state and any effects
    pub fn apply(self, action: PanelAction) -> Step {
        match action {
            PanelAction::Submit { text } => self.submit(text),
            PanelAction::CompletionArrived { request, code } => self.arrived(request, code),
            PanelAction::CompletionFailed { request, error } => self.failed(request, error),
        }
    }

    fn submit(mut self, text: String) -> Step {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Step::unchanged(self);
        }
        if self.phase.is_awaiting() {
            log::debug!("submission ignored: a request is already in flight");
            return Step::unchanged(self);
        }

        // Context comes from earlier turns only; the builder appends the new
        // utterance itself.
        let prompt = prompt::build_prompt(&self.conversation, trimmed);
        self.conversation.append(Turn::user(trimmed));

        let request = RequestToken::fresh();
        self.phase = PanelPhase::AwaitingResponse { request };
        Step {
            state: self,
            effects: vec![PanelEffect::DispatchCompletion { request, prompt }],
        }
    }

    fn arrived(mut self, request: RequestToken, code: String) -> Step {
        if !self.phase.is_current(request) {
            log::debug!("discarding completion for a superseded request");
            return Step::unchanged(self);
        }

        self.conversation
            .append(Turn::assistant(ASSISTANT_TEXT, code, USAGE_GUIDE));
        self.phase = PanelPhase::Idle;
        Step {
            state: self,
            effects: vec![PanelEffect::Notify {
                notice: Notice::CodeGenerated,
            }],
        }
    }

    fn failed(mut self, request: RequestToken, error: String) -> Step {
        if !self.phase.is_current(request) {
            log::debug!("discarding failure for a superseded request");
            return Step::unchanged(self);
        }

        log::warn!("completion request failed: {}", error);
        self.phase = PanelPhase::Idle;
        Step {
            state: self,
            effects: vec![PanelEffect::Notify {
                notice: Notice::GenerationFailed,
            }],
        }
    }
}
