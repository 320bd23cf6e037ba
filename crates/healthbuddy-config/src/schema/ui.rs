//! Labels and captions for the chat surface.

use serde::{Deserialize, Serialize};

/// Chat surface configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub title: String,
    pub input_placeholder: String,
    pub clear_label: String,
    /// Line that triggers the clear control in the terminal surface.
    pub clear_command: String,
    pub user_label: String,
    pub assistant_label: String,
    pub credential_label: String,
    pub submit_label: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: "HealthBuddy - Asisten Kesehatanmu".into(),
            input_placeholder: "Tanya tentang kesehatan, nutrisi, atau gaya hidup!".into(),
            clear_label: "Hapus Riwayat".into(),
            clear_command: "/clear".into(),
            user_label: "User".into(),
            assistant_label: "HealthBuddy".into(),
            credential_label: "Google API Key".into(),
            submit_label: "Submit".into(),
        }
    }
}
