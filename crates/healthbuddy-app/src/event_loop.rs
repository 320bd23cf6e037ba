//! Reads user input line by line and dispatches each as one pass.

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use healthbuddy_common::HealthBuddyError;

use crate::app_state::{ChatSession, SessionState};
use crate::input::action_for_line;
use crate::secret::{self, SecretEntry};
use crate::surface::Surface;

/// Drive a session until the input ends.
///
/// Pass errors are already shown by the session; they are logged here and
/// the loop keeps going. While a credential is awaited and `secret_entry`
/// is [`SecretEntry::Masked`], the line is read from the terminal without
/// echo instead of from `input`.
pub async fn run<R>(
    session: &mut ChatSession,
    mut input: R,
    surface: &mut dyn Surface,
    secret_entry: SecretEntry,
) -> healthbuddy_common::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    session.start(surface);

    loop {
        let masked =
            secret_entry == SecretEntry::Masked && session.state() == SessionState::AwaitingCredential;
        let line = if masked {
            read_masked().await?
        } else {
            read_line(&mut input).await?
        };
        let Some(line) = line else {
            break;
        };

        let action = action_for_line(&line, session.state(), &session.ui().clear_command);
        match session.dispatch(action, surface).await {
            Ok(outcome) => tracing::debug!(session = %session.id(), ?outcome, "Pass finished"),
            Err(e) => tracing::warn!(session = %session.id(), "Pass failed: {e}"),
        }
    }

    tracing::info!(session = %session.id(), "Input closed, ending session");
    Ok(())
}

/// Next input line, or `None` at end of input. Invalid UTF-8 is replaced
/// rather than treated as an error.
async fn read_line<R>(input: &mut R) -> std::io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf).await? == 0 {
        return Ok(None);
    }
    let line = match String::from_utf8(buf) {
        Ok(line) => line,
        Err(e) => {
            tracing::warn!("Input line is not valid UTF-8, replacing invalid bytes");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };
    Ok(Some(line))
}

async fn read_masked() -> healthbuddy_common::Result<Option<String>> {
    let line = tokio::task::spawn_blocking(secret::read_masked_line)
        .await
        .map_err(|e| HealthBuddyError::Runtime(e.to_string()))??;
    Ok(line)
}
