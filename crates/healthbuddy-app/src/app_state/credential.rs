//! Credential lifecycle and the gate in front of every pass.

use std::fmt;

use super::core::ChatSession;
use super::types::SessionState;
use crate::surface::Surface;

/// A confirmed API key. Never empty.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Confirm a submitted value. Blank input yields `None`.
    pub fn confirm(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            None
        } else {
            Some(Self(value.to_string()))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential([REDACTED])")
    }
}

/// Credential storage for one session: absent, pending, then confirmed.
#[derive(Debug, Default)]
pub(super) struct CredentialSlot {
    /// Last submitted value, kept until it is confirmed.
    pending: Option<String>,
    confirmed: Option<Credential>,
}

impl CredentialSlot {
    pub(super) fn with_confirmed(credential: Option<Credential>) -> Self {
        Self {
            pending: None,
            confirmed: credential,
        }
    }

    pub(super) fn confirmed(&self) -> Option<&Credential> {
        self.confirmed.as_ref()
    }

    /// Capture a submission. Returns true if it confirmed the credential.
    fn submit(&mut self, value: &str) -> bool {
        if self.confirmed.is_some() {
            return false;
        }
        self.pending = Some(value.to_string());
        match Credential::confirm(value) {
            Some(credential) => {
                self.confirmed = Some(credential);
                self.pending = None;
                true
            }
            None => false,
        }
    }

    pub(super) fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }
}

/// Result of the credential gate.
pub(super) enum Gate {
    Proceed,
    Halt,
}

impl ChatSession {
    /// No-op once a credential is confirmed. Otherwise draws the secret
    /// prompt and halts the pass.
    pub(super) fn ensure_credential(&self, surface: &mut dyn Surface) -> Gate {
        if self.ctx.credential.confirmed().is_some() {
            return Gate::Proceed;
        }
        if self.ctx.credential.pending().is_some() {
            tracing::debug!(session = %self.id, "Submitted credential was empty");
        }
        surface.secret_prompt(&self.ui.credential_label, &self.ui.submit_label);
        Gate::Halt
    }

    /// Handle a credential submission while awaiting one.
    ///
    /// Returns true when the session moved to `Ready`.
    pub(super) fn submit_credential(&mut self, value: &str) -> bool {
        if !self.ctx.credential.submit(value) {
            return false;
        }
        self.state = SessionState::Ready;
        tracing::info!(session = %self.id, "Credential confirmed");
        true
    }
}
