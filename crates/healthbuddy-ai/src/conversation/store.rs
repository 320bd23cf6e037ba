//! Shared, append-only conversation storage.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::turn::Turn;

/// Handle to one conversation's turns.
///
/// Clones share the same underlying storage: a turn appended through one
/// handle is visible through every other. Growth is unbounded.
#[derive(Debug, Clone, Default)]
pub struct ConversationHandle {
    turns: Arc<Mutex<Vec<Turn>>>,
}

impl ConversationHandle {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic mid-push cannot leave the Vec half-written, so a poisoned
    // lock still guards consistent data.
    fn lock(&self) -> MutexGuard<'_, Vec<Turn>> {
        self.turns.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add a turn to the end.
    pub fn append(&self, turn: Turn) {
        self.lock().push(turn);
    }

    /// Reset to an empty conversation. Idempotent.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Snapshot of every turn, oldest first.
    pub fn turns(&self) -> Vec<Turn> {
        self.lock().clone()
    }

    pub fn last(&self) -> Option<Turn> {
        self.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Whether both handles refer to the same storage.
    pub fn same_as(&self, other: &ConversationHandle) -> bool {
        Arc::ptr_eq(&self.turns, &other.turns)
    }
}
