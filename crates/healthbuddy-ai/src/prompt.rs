//! Chat prompt template.
//!
//! A template is an ordered list of slots: a fixed system instruction, a
//! placeholder for prior turns, and the new human input. Rendering fills the
//! placeholders and yields the message list sent to the model.

use crate::conversation::Turn;
use crate::{Message, Role};

/// One slot of a [`ChatPrompt`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptSlot {
    /// Fixed system instruction.
    System(String),
    /// Expands to every turn of the conversation history, in order.
    History,
    /// Expands to the new user input as a single user message.
    Input,
}

/// Prompt template with a system instruction, a history placeholder, and a
/// human input slot.
#[derive(Debug, Clone)]
pub struct ChatPrompt {
    slots: Vec<PromptSlot>,
}

impl ChatPrompt {
    pub fn new(system_instruction: impl Into<String>) -> Self {
        Self {
            slots: vec![
                PromptSlot::System(system_instruction.into()),
                PromptSlot::History,
                PromptSlot::Input,
            ],
        }
    }

    pub fn slots(&self) -> &[PromptSlot] {
        &self.slots
    }

    /// Render the template.
    ///
    /// `history` is expanded verbatim even when its last turn already holds
    /// `input`; both slots are always filled.
    pub fn format(&self, history: &[Turn], input: &str) -> Vec<Message> {
        let mut messages = Vec::with_capacity(history.len() + 2);
        for slot in &self.slots {
            match slot {
                PromptSlot::System(text) => messages.push(Message {
                    role: Role::System,
                    content: text.clone(),
                }),
                PromptSlot::History => messages.extend(history.iter().map(Message::from)),
                PromptSlot::Input => messages.push(Message {
                    role: Role::User,
                    content: input.to_string(),
                }),
            }
        }
        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_has_three_slots_in_order() {
        let prompt = ChatPrompt::new("sys");
        assert_eq!(
            prompt.slots(),
            &[
                PromptSlot::System("sys".into()),
                PromptSlot::History,
                PromptSlot::Input
            ]
        );
    }

    #[test]
    fn format_with_empty_history() {
        let messages = ChatPrompt::new("sys").format(&[], "Halo");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[1].content, "Halo");
    }

    #[test]
    fn format_expands_history_in_order_then_input() {
        let history = vec![
            Turn::user("satu"),
            Turn::assistant("dua"),
            Turn::user("tiga"),
        ];
        let messages = ChatPrompt::new("sys").format(&history, "tiga");

        let got: Vec<(Role, &str)> = messages
            .iter()
            .map(|m| (m.role, m.content.as_str()))
            .collect();
        assert_eq!(
            got,
            vec![
                (Role::System, "sys"),
                (Role::User, "satu"),
                (Role::Assistant, "dua"),
                (Role::User, "tiga"),
                (Role::User, "tiga"),
            ]
        );
    }
}
