//! Display surface for the chat page.
//!
//! The page is, top to bottom: title, secret-entry controls (only while a
//! credential is missing), the clear-history control, the transcript, and
//! the input for new messages. `TerminalSurface` draws it as plain lines.

use std::io::Write;

/// Drawing primitives a chat session needs.
pub trait Surface {
    fn title(&mut self, text: &str);
    fn secret_prompt(&mut self, label: &str, submit_label: &str);
    fn clear_control(&mut self, label: &str, command: &str);
    fn chat_message(&mut self, role_label: &str, content: &str);
    fn input_hint(&mut self, placeholder: &str);
    fn error(&mut self, message: &str);
}

/// Line-oriented surface over any writer (stdout in the binary).
pub struct TerminalSurface<W: Write> {
    out: W,
    write_failed: bool,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            write_failed: false,
        }
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        let result = self
            .out
            .write_all(text.as_bytes())
            .and_then(|()| self.out.flush());
        if let Err(e) = result {
            if !self.write_failed {
                tracing::warn!("Failed to write to terminal: {e}");
            }
            self.write_failed = true;
        }
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn title(&mut self, text: &str) {
        let rule = "=".repeat(text.chars().count());
        self.emit(&format!("\n{text}\n{rule}\n"));
    }

    fn secret_prompt(&mut self, label: &str, submit_label: &str) {
        self.emit(&format!("{label} (Enter to {submit_label}): "));
    }

    fn clear_control(&mut self, label: &str, command: &str) {
        self.emit(&format!("[{label}: {command}]\n"));
    }

    fn chat_message(&mut self, role_label: &str, content: &str) {
        let mut block = format!("\n{role_label}:\n");
        for line in content.lines() {
            block.push_str("  ");
            block.push_str(line);
            block.push('\n');
        }
        self.emit(&block);
    }

    fn input_hint(&mut self, placeholder: &str) {
        self.emit(&format!("\n({placeholder})\n> "));
    }

    fn error(&mut self, message: &str) {
        self.emit(&format!("\n[error] {message}\n"));
    }
}

#[cfg(test)]
pub(crate) mod recording {
    use super::Surface;

    /// One drawn element.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub(crate) enum Drawn {
        Title(String),
        SecretPrompt,
        ClearControl,
        Message { role: String, content: String },
        InputHint,
        Error(String),
    }

    /// Surface that records what was drawn, in order.
    #[derive(Default)]
    pub(crate) struct RecordingSurface {
        pub(crate) drawn: Vec<Drawn>,
    }

    impl RecordingSurface {
        pub(crate) fn messages(&self) -> Vec<(String, String)> {
            self.drawn
                .iter()
                .filter_map(|d| match d {
                    Drawn::Message { role, content } => Some((role.clone(), content.clone())),
                    _ => None,
                })
                .collect()
        }

        pub(crate) fn count(&self, wanted: &Drawn) -> usize {
            self.drawn.iter().filter(|d| *d == wanted).count()
        }

        pub(crate) fn take(&mut self) -> Vec<Drawn> {
            std::mem::take(&mut self.drawn)
        }
    }

    impl Surface for RecordingSurface {
        fn title(&mut self, text: &str) {
            self.drawn.push(Drawn::Title(text.to_string()));
        }

        fn secret_prompt(&mut self, _label: &str, _submit_label: &str) {
            self.drawn.push(Drawn::SecretPrompt);
        }

        fn clear_control(&mut self, _label: &str, _command: &str) {
            self.drawn.push(Drawn::ClearControl);
        }

        fn chat_message(&mut self, role_label: &str, content: &str) {
            self.drawn.push(Drawn::Message {
                role: role_label.to_string(),
                content: content.to_string(),
            });
        }

        fn input_hint(&mut self, _placeholder: &str) {
            self.drawn.push(Drawn::InputHint);
        }

        fn error(&mut self, message: &str) {
            self.drawn.push(Drawn::Error(message.to_string()));
        }
    }
}
