//! ChatSession struct definition and constructor.

use std::sync::Arc;

use healthbuddy_ai::{ConversationHandle, TurnProcessor};
use healthbuddy_common::SessionId;
use healthbuddy_config::schema::UiConfig;

use super::credential::{Credential, CredentialSlot};
use super::model::ModelFactory;
use super::types::SessionState;
use crate::surface::Surface;

/// Typed per-session state, owned by the session and outliving any pass.
#[derive(Default)]
pub(super) struct SessionContext {
    pub(super) credential: CredentialSlot,
    pub(super) model: Option<Arc<TurnProcessor>>,
    pub(super) conversation: Option<ConversationHandle>,
}

/// One user's chat session.
pub struct ChatSession {
    pub(super) id: SessionId,
    pub(super) state: SessionState,
    pub(super) ctx: SessionContext,
    pub(super) factory: Box<dyn ModelFactory>,
    pub(super) ui: UiConfig,
}

impl ChatSession {
    /// Create a session. A credential supplied up front (from the
    /// environment) skips the secret prompt entirely.
    pub fn new(
        ui: UiConfig,
        factory: Box<dyn ModelFactory>,
        initial_credential: Option<Credential>,
    ) -> Self {
        let state = if initial_credential.is_some() {
            SessionState::Ready
        } else {
            SessionState::AwaitingCredential
        };
        let id = SessionId::new();
        tracing::debug!(session = %id, ?state, "Chat session created");
        Self {
            id,
            state,
            ctx: SessionContext {
                credential: CredentialSlot::with_confirmed(initial_credential),
                ..SessionContext::default()
            },
            factory,
            ui,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn ui(&self) -> &UiConfig {
        &self.ui
    }

    /// This session's conversation, created empty on first access.
    ///
    /// Every call returns a handle to the same storage.
    pub fn conversation(&mut self) -> ConversationHandle {
        self.ctx
            .conversation
            .get_or_insert_with(ConversationHandle::new)
            .clone()
    }

    /// Draw the initial page.
    pub fn start(&mut self, surface: &mut dyn Surface) {
        self.render_page(surface);
        self.render_input(surface);
    }
}
