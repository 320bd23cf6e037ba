//! Session states and pass outcomes.

/// Where a chat session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No confirmed credential yet; only `SubmitCredential` can make progress.
    AwaitingCredential,
    /// Credential confirmed. Never leaves this state.
    Ready,
}

/// How a single pass ended (errors are reported separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassOutcome {
    /// The pass ran to the end and may have changed the conversation.
    Completed,
    /// The credential gate stopped the pass early.
    Halted,
    /// Nothing to do (empty input, or a credential after one is confirmed).
    Idle,
}
