//! Append-only conversation log
//!
//! Insertion order is display order and is semantically meaningful: prompt
//! assembly walks earlier turns to build follow-up context. The log exposes
//! no removal or in-place mutation API.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::turn::Turn;

/// Ordered, append-only sequence of turns
///
/// The log lives in memory for the lifetime of the panel session and is
/// discarded when the panel closes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversationLog {
    turns: Vec<Turn>,
}

impl ConversationLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn, returning a reference to the stored value
    pub fn append(&mut self, turn: Turn) -> &Turn {
        self.turns.push(turn);
        // Just pushed, so the vec is non-empty.
        self.turns.last().unwrap()
    }

    /// All turns in insertion order
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Number of turns in the log
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Whether the log is empty
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// The most recently appended turn
    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// Look up a turn by id
    pub fn find(&self, id: Uuid) -> Option<&Turn> {
        self.turns.iter().find(|t| t.id == id)
    }

    /// Turns that carry a generated code snippet, in insertion order
    pub fn code_turns(&self) -> impl Iterator<Item = &Turn> {
        self.turns.iter().filter(|t| t.has_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_order() {
        let mut log = ConversationLog::new();
        log.append(Turn::user("first"));
        log.append(Turn::user("second"));

        assert_eq!(log.len(), 2);
        assert_eq!(log.turns()[0].text, "first");
        assert_eq!(log.turns()[1].text, "second");
        assert_eq!(log.last().unwrap().text, "second");
    }

    #[test]
    fn test_code_turns_filters_user_turns() {
        let mut log = ConversationLog::new();
        log.append(Turn::user("make a button"));
        log.append(Turn::assistant("done", "const B = () => null", "paste it"));
        log.append(Turn::user("now a card"));

        let code: Vec<_> = log.code_turns().collect();
        assert_eq!(code.len(), 1);
        assert_eq!(code[0].code.as_deref(), Some("const B = () => null"));
    }

    #[test]
    fn test_find_by_id() {
        let mut log = ConversationLog::new();
        let id = log.append(Turn::user("hello")).id;

        assert!(log.find(id).is_some());
        assert!(log.find(Uuid::new_v4()).is_none());
    }
}
