use std::fmt;

use serde::{Deserialize, Serialize};

/// Every user-triggerable action in a chat session.
///
/// The secret-entry control, the clear button, and the bottom chat input
/// all resolve to an `Action`. The session dispatcher matches on this enum
/// to drive one pass of the conversation state machine.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    // -- Credential --
    SubmitCredential(String),

    // -- Conversation --
    SendMessage(String),
    ClearHistory,
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::SubmitCredential(_) => f
                .debug_tuple("SubmitCredential")
                .field(&"[REDACTED]")
                .finish(),
            Action::SendMessage(text) => f.debug_tuple("SendMessage").field(text).finish(),
            Action::ClearHistory => f.write_str("ClearHistory"),
        }
    }
}

impl Action {
    /// Human-readable label, used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            Action::SubmitCredential(_) => "Submit",
            Action::SendMessage(_) => "Send Message",
            Action::ClearHistory => "Clear History",
        }
    }
}
