//! Chat session state machine.
//!
//! A `ChatSession` lives for one user's whole session. Every user action is
//! handed to [`ChatSession::dispatch`], which runs one pass: credential gate,
//! model session fetch-or-create, conversation fetch, turn controller, and
//! rendering of whatever the pass appended.

mod core;
mod credential;
mod dispatch;
mod model;
mod render;
mod turn;
mod types;


pub use core::ChatSession;
pub use credential::Credential;
pub use model::{GeminiFactory, ModelFactory};
pub use types::{PassOutcome, SessionState};
