//! Panel session
//!
//! [`PanelSession`] owns the panel state for the lifetime of the panel and
//! drives the reducer: user input goes in as an action, the returned effects
//! are executed against the completion backend and the host, and the
//! outcomes are fed back as further actions. The state lock is held only for
//! the pure reducer step, never across an await.

use std::sync::Arc;

use parking_lot::Mutex;
use uuid::Uuid;

use completion::CompletionBackend;
use conversation::{
    ConversationLog, Notice, PanelAction, PanelEffect, PanelState, RequestToken,
};

use crate::host::{Clipboard, HostError, HostNotifier, PanelPlacement, PanelPresenter};

/// Message shown after a successful clipboard write
const CLIPBOARD_COPIED: &str = "Code copied to clipboard!";
/// Message shown when the clipboard write fails
const CLIPBOARD_FAILED: &str = "Clipboard copy failed.";

/// Outcome of a submission, for the caller driving the panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new assistant turn was appended
    Generated { turn_id: Uuid },
    /// The submission was ignored: empty text, or a request already in flight
    Ignored,
    /// The completion failed; the user has been notified
    Failed,
}

/// Error when copying a recorded snippet to the clipboard
#[derive(Debug, thiserror::Error)]
pub enum CopyError {
    #[error("no code snippet recorded under that turn")]
    NoCode,

    #[error(transparent)]
    Clipboard(#[from] HostError),
}

/// One panel's conversation and its collaborators
pub struct PanelSession {
    state: Mutex<PanelState>,
    backend: Arc<dyn CompletionBackend>,
    notifier: Arc<dyn HostNotifier>,
    clipboard: Arc<dyn Clipboard>,
    placement: PanelPlacement,
}

impl PanelSession {
    /// Create a session with the default placement
    pub fn new(
        backend: Arc<dyn CompletionBackend>,
        notifier: Arc<dyn HostNotifier>,
        clipboard: Arc<dyn Clipboard>,
    ) -> Self {
        Self {
            state: Mutex::new(PanelState::new()),
            backend,
            notifier,
            clipboard,
            placement: PanelPlacement::default(),
        }
    }

    /// Override the panel placement
    pub fn with_placement(mut self, placement: PanelPlacement) -> Self {
        self.placement = placement;
        self
    }

    /// Ask the host to show the panel surface
    pub async fn open(&self, presenter: &dyn PanelPresenter) -> Result<(), HostError> {
        presenter.present(&self.placement).await
    }

    /// Snapshot of the conversation, in display order
    pub fn conversation(&self) -> ConversationLog {
        self.state.lock().conversation.clone()
    }

    /// Whether a completion request is currently in flight
    pub fn is_awaiting(&self) -> bool {
        self.state.lock().phase.is_awaiting()
    }

    /// Submit user text and drive the request cycle to its next idle state
    ///
    /// Empty text and re-entrant submissions are ignored without touching
    /// the conversation. Otherwise the user turn is recorded, the prompt is
    /// dispatched, and the success or failure is folded back into the state
    /// and surfaced through the host notifier.
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        let effects = self.step(PanelAction::Submit {
            text: text.to_string(),
        });

        let Some((request, prompt)) = Self::dispatch_of(&effects) else {
            return SubmitOutcome::Ignored;
        };

        let action = match self.backend.complete(&prompt).await {
            Ok(code) => PanelAction::CompletionArrived { request, code },
            Err(e) => {
                log::warn!("completion via {} failed: {}", self.backend.name(), e);
                PanelAction::CompletionFailed {
                    request,
                    error: e.to_string(),
                }
            }
        };

        let effects = self.step(action);
        let generated = effects.iter().any(|effect| {
            matches!(
                effect,
                PanelEffect::Notify {
                    notice: Notice::CodeGenerated
                }
            )
        });
        self.run_notifications(&effects).await;

        if generated {
            match self.state.lock().conversation.last() {
                Some(turn) => SubmitOutcome::Generated { turn_id: turn.id },
                None => SubmitOutcome::Failed,
            }
        } else {
            SubmitOutcome::Failed
        }
    }

    /// Copy a recorded snippet to the platform clipboard
    ///
    /// Both outcomes surface a notification; the error is returned as well
    /// so programmatic callers can react.
    pub async fn copy_code(&self, turn_id: Uuid) -> Result<(), CopyError> {
        let code = {
            let state = self.state.lock();
            state
                .conversation
                .find(turn_id)
                .and_then(|turn| turn.code.clone())
        };
        let Some(code) = code else {
            return Err(CopyError::NoCode);
        };

        match self.clipboard.write_text(&code).await {
            Ok(()) => {
                self.notify(CLIPBOARD_COPIED).await;
                Ok(())
            }
            Err(e) => {
                log::warn!("clipboard write failed: {}", e);
                self.notify(CLIPBOARD_FAILED).await;
                Err(CopyError::Clipboard(e))
            }
        }
    }

    /// Apply one action under the lock and hand back the requested effects
    fn step(&self, action: PanelAction) -> Vec<PanelEffect> {
        let mut guard = self.state.lock();
        let current = std::mem::take(&mut *guard);
        let step = current.apply(action);
        *guard = step.state;
        step.effects
    }

    fn dispatch_of(effects: &[PanelEffect]) -> Option<(RequestToken, String)> {
        effects.iter().find_map(|effect| match effect {
            PanelEffect::DispatchCompletion { request, prompt } => {
                Some((*request, prompt.clone()))
            }
            PanelEffect::Notify { .. } => None,
        })
    }

    async fn run_notifications(&self, effects: &[PanelEffect]) {
        for effect in effects {
            if let PanelEffect::Notify { notice } = effect {
                self.notify(notice.message()).await;
            }
        }
    }

    async fn notify(&self, message: &str) {
        // A broken notifier must not take the panel down with it.
        if let Err(e) = self.notifier.notify(message).await {
            log::warn!("host notification failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use completion::CompletionError;
    use conversation::Author;

    use crate::host::{FailingClipboard, MemoryClipboard, RecordingPresenter, VecNotifier};

    /// Backend scripted to return a fixed outcome
    struct ScriptedBackend {
        code: Option<String>,
    }

    impl ScriptedBackend {
        fn ok(code: &str) -> Arc<Self> {
            Arc::new(Self {
                code: Some(code.to_string()),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self { code: None })
        }
    }

    #[async_trait]
    impl CompletionBackend for ScriptedBackend {
        fn name(&self) -> &'static str {
            "scripted"
        }

        fn is_configured(&self) -> bool {
            true
        }

        async fn complete(&self, _prompt: &str) -> Result<String, CompletionError> {
            match &self.code {
                Some(code) => Ok(code.clone()),
                None => Err(CompletionError::EmptyCompletion),
            }
        }
    }

    fn session(backend: Arc<ScriptedBackend>) -> (PanelSession, Arc<VecNotifier>) {
        let notifier = Arc::new(VecNotifier::new());
        let session = PanelSession::new(
            backend,
            notifier.clone(),
            Arc::new(MemoryClipboard::new()),
        );
        (session, notifier)
    }

    #[tokio::test]
    async fn test_successful_submit_records_both_turns() {
        let (session, notifier) = session(ScriptedBackend::ok("const X = () => null"));

        let outcome = session.submit("Button with hover rotate").await;

        let turn_id = match outcome {
            SubmitOutcome::Generated { turn_id } => turn_id,
            other => panic!("expected Generated, got {:?}", other),
        };

        let log = session.conversation();
        assert_eq!(log.len(), 2);
        assert_eq!(log.turns()[0].author, Author::User);
        assert_eq!(log.turns()[1].author, Author::Assistant);
        assert_eq!(log.find(turn_id).unwrap().code.as_deref(), Some("const X = () => null"));
        assert!(!session.is_awaiting());

        assert_eq!(notifier.messages(), vec!["Code generated! Click copy to use it."]);
    }

    #[tokio::test]
    async fn test_failed_submit_leaves_only_user_turn() {
        let (session, notifier) = session(ScriptedBackend::failing());

        let outcome = session.submit("a card").await;

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(session.conversation().len(), 1);
        assert!(!session.is_awaiting());
        assert_eq!(notifier.messages(), vec!["Failed to generate code."]);
    }

    #[tokio::test]
    async fn test_empty_submit_is_ignored_silently() {
        let (session, notifier) = session(ScriptedBackend::ok("unused"));

        let outcome = session.submit("   ").await;

        assert_eq!(outcome, SubmitOutcome::Ignored);
        assert!(session.conversation().is_empty());
        assert!(notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn test_copy_code_writes_and_notifies() {
        let backend = ScriptedBackend::ok("export const Card = () => null");
        let notifier = Arc::new(VecNotifier::new());
        let clipboard = Arc::new(MemoryClipboard::new());
        let session = PanelSession::new(backend, notifier.clone(), clipboard.clone());

        let turn_id = match session.submit("a card").await {
            SubmitOutcome::Generated { turn_id } => turn_id,
            other => panic!("expected Generated, got {:?}", other),
        };

        session.copy_code(turn_id).await.unwrap();

        assert_eq!(
            clipboard.contents().as_deref(),
            Some("export const Card = () => null")
        );
        assert_eq!(
            notifier.messages().last().map(String::as_str),
            Some("Code copied to clipboard!")
        );
    }

    #[tokio::test]
    async fn test_copy_code_failure_notifies() {
        let backend = ScriptedBackend::ok("const X = 1");
        let notifier = Arc::new(VecNotifier::new());
        let session =
            PanelSession::new(backend, notifier.clone(), Arc::new(FailingClipboard));

        let turn_id = match session.submit("x").await {
            SubmitOutcome::Generated { turn_id } => turn_id,
            other => panic!("expected Generated, got {:?}", other),
        };

        let result = session.copy_code(turn_id).await;

        assert!(matches!(result, Err(CopyError::Clipboard(_))));
        assert_eq!(
            notifier.messages().last().map(String::as_str),
            Some("Clipboard copy failed.")
        );
    }

    #[tokio::test]
    async fn test_copy_code_unknown_turn() {
        let (session, _) = session(ScriptedBackend::ok("const X = 1"));
        let result = session.copy_code(Uuid::new_v4()).await;
        assert!(matches!(result, Err(CopyError::NoCode)));
    }

    #[tokio::test]
    async fn test_open_presents_with_default_placement() {
        let (session, _) = session(ScriptedBackend::ok("unused"));
        let presenter = RecordingPresenter::new();

        session.open(&presenter).await.unwrap();

        let placements = presenter.placements();
        assert_eq!(placements.len(), 1);
        assert_eq!(placements[0], PanelPlacement::default());
    }
}
