//! Action dispatch: runs one pass of the session for a user action.

use healthbuddy_ai::AiError;
use healthbuddy_common::Action;

use super::core::ChatSession;
use super::credential::Gate;
use super::turn::run_turn;
use super::types::{PassOutcome, SessionState};
use crate::surface::Surface;

impl ChatSession {
    /// Dispatch a user [`Action`] as one pass.
    ///
    /// A remote failure is drawn on the surface and also returned; the
    /// session stays usable for the next action.
    pub async fn dispatch(
        &mut self,
        action: Action,
        surface: &mut dyn Surface,
    ) -> Result<PassOutcome, AiError> {
        tracing::debug!(session = %self.id, action = action.label(), "Dispatching action");

        let result = self.run_pass(action, surface).await;
        if let Err(ref e) = result {
            surface.error(&e.to_string());
        }
        self.render_input(surface);
        result
    }

    async fn run_pass(
        &mut self,
        action: Action,
        surface: &mut dyn Surface,
    ) -> Result<PassOutcome, AiError> {
        if let Action::SubmitCredential(ref value) = action {
            if self.state == SessionState::Ready {
                return Ok(PassOutcome::Idle);
            }
            if self.submit_credential(value) {
                // Fresh page so the secret prompt disappears.
                self.render_page(surface);
                return Ok(PassOutcome::Completed);
            }
        }

        if let Gate::Halt = self.ensure_credential(surface) {
            return Ok(PassOutcome::Halted);
        }

        let processor = self.get_or_create_model_session()?;
        let conversation = self.conversation();

        match action {
            Action::ClearHistory => {
                conversation.clear();
                tracing::debug!(session = %self.id, "Conversation cleared");
                self.render_page(surface);
                Ok(PassOutcome::Completed)
            }
            Action::SendMessage(text) => {
                run_turn(&processor, &conversation, &text, &self.ui, surface).await
            }
            // Handled above: either confirmed or halted by the gate.
            Action::SubmitCredential(_) => Ok(PassOutcome::Idle),
        }
    }
}
