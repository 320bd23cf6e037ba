//! Turn controller: one user message in, one assistant reply out.

use healthbuddy_ai::{AiError, ConversationHandle, Turn, TurnProcessor};
use healthbuddy_config::schema::UiConfig;

use super::render::render_turn;
use super::types::PassOutcome;
use crate::surface::Surface;

/// Run one turn.
///
/// The user turn is appended and drawn before the remote call. If the call
/// fails, that turn stays in the conversation unanswered and the error is
/// returned; nothing else is appended.
pub(super) async fn run_turn(
    processor: &TurnProcessor,
    conversation: &ConversationHandle,
    input: &str,
    ui: &UiConfig,
    surface: &mut dyn Surface,
) -> Result<PassOutcome, AiError> {
    if input.trim().is_empty() {
        return Ok(PassOutcome::Idle);
    }

    let user_turn = Turn::user(input);
    render_turn(ui, &user_turn, surface);
    conversation.append(user_turn);

    let history = conversation.turns();
    let reply = processor.invoke(&history, input).await?;

    let (usage, calls) = processor.usage();
    tracing::debug!(
        calls,
        input_tokens = usage.input_tokens,
        output_tokens = usage.output_tokens,
        total_tokens = usage.total_tokens(),
        "Session token usage"
    );

    let assistant_turn = Turn::assistant(reply);
    render_turn(ui, &assistant_turn, surface);
    conversation.append(assistant_turn);

    Ok(PassOutcome::Completed)
}
