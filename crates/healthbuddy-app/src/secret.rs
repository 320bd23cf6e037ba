//! Masked entry for the API key.
//!
//! On an interactive terminal the key is read in raw mode so nothing the
//! user types is echoed; each character shows as `*`.

use std::io::{self, IsTerminal, Write};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;

/// How credential submissions are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretEntry {
    /// Raw-mode terminal read with masked echo.
    Masked,
    /// Same as any other input line (piped stdin).
    Plain,
}

impl SecretEntry {
    pub fn detect() -> Self {
        if io::stdin().is_terminal() {
            SecretEntry::Masked
        } else {
            SecretEntry::Plain
        }
    }
}

/// Keeps the terminal in raw mode until dropped.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            tracing::warn!("Failed to restore terminal mode: {e}");
        }
    }
}

/// Read one masked line from the terminal. Blocks until Enter.
///
/// `None` means the user gave up on input (Ctrl-C, or Ctrl-D on an empty
/// line).
pub fn read_masked_line() -> io::Result<Option<String>> {
    let mut out = io::stdout();
    let line = {
        let _raw = RawModeGuard::enable()?;
        collect_secret(event::read, &mut out)?
    };
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(line)
}

/// Assemble a secret from key events, writing only mask characters to
/// `echo`.
pub(crate) fn collect_secret<F, W>(mut next_event: F, echo: &mut W) -> io::Result<Option<String>>
where
    F: FnMut() -> io::Result<Event>,
    W: Write,
{
    let mut secret = String::new();
    loop {
        let event = next_event()?;
        let key = match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => key,
            Event::Paste(text) => {
                for c in text.chars().filter(|c| !c.is_control()) {
                    secret.push(c);
                    echo.write_all(b"*")?;
                }
                echo.flush()?;
                continue;
            }
            _ => continue,
        };

        let KeyEvent {
            code, modifiers, ..
        } = key;
        let ctrl = modifiers.contains(KeyModifiers::CONTROL);
        match code {
            KeyCode::Enter => return Ok(Some(secret)),
            KeyCode::Char('c') if ctrl => return Ok(None),
            KeyCode::Char('d') if ctrl && secret.is_empty() => return Ok(None),
            KeyCode::Char(c) if !ctrl => {
                secret.push(c);
                echo.write_all(b"*")?;
            }
            KeyCode::Backspace => {
                if secret.pop().is_some() {
                    echo.write_all(b"\x08 \x08")?;
                }
            }
            _ => {}
        }
        echo.flush()?;
    }
}
