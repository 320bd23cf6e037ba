//! Page and transcript rendering.

use healthbuddy_ai::{ChatRole, Turn};
use healthbuddy_config::schema::UiConfig;

use super::core::ChatSession;
use super::types::SessionState;
use crate::surface::Surface;

/// Display label for a turn's role.
pub(super) fn role_label(ui: &UiConfig, role: ChatRole) -> &str {
    match role {
        ChatRole::User => &ui.user_label,
        ChatRole::Assistant => &ui.assistant_label,
    }
}

pub(super) fn render_turn(ui: &UiConfig, turn: &Turn, surface: &mut dyn Surface) {
    surface.chat_message(role_label(ui, turn.role()), turn.content());
}

/// Replay every turn, front to back.
pub(super) fn render_all(ui: &UiConfig, turns: &[Turn], surface: &mut dyn Surface) {
    for turn in turns {
        render_turn(ui, turn, surface);
    }
}

impl ChatSession {
    /// Full page: title, then either the secret prompt or the clear control
    /// and the whole transcript.
    pub(super) fn render_page(&mut self, surface: &mut dyn Surface) {
        surface.title(&self.ui.title);
        match self.state {
            SessionState::AwaitingCredential => {
                surface.secret_prompt(&self.ui.credential_label, &self.ui.submit_label);
            }
            SessionState::Ready => {
                surface.clear_control(&self.ui.clear_label, &self.ui.clear_command);
                let turns = self.conversation().turns();
                render_all(&self.ui, &turns, surface);
            }
        }
    }

    /// Bottom input for new messages, shown whenever the session is ready.
    pub(super) fn render_input(&self, surface: &mut dyn Surface) {
        if self.state == SessionState::Ready {
            surface.input_hint(&self.ui.input_placeholder);
        }
    }
}
