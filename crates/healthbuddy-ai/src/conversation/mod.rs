//! Conversation store.
//!
//! A conversation is the ordered list of turns for one chat session.
//! Insertion order is chronological order, and it is the order replayed
//! both to the model and to the display.

mod store;
mod turn;

pub use store::ConversationHandle;
pub use turn::{ChatRole, Turn};
