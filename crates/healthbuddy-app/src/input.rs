//! Maps raw input lines to session actions.

use healthbuddy_common::Action;

use crate::app_state::SessionState;

/// Resolve one line of user input.
///
/// While awaiting a credential every line is a credential submission.
/// Once ready, the clear command triggers the clear control and anything
/// else is a chat message.
pub fn action_for_line(line: &str, state: SessionState, clear_command: &str) -> Action {
    let line = line.trim_end_matches(['\r', '\n']);
    match state {
        SessionState::AwaitingCredential => Action::SubmitCredential(line.to_string()),
        SessionState::Ready if line.trim() == clear_command => Action::ClearHistory,
        SessionState::Ready => Action::SendMessage(line.to_string()),
    }
}
