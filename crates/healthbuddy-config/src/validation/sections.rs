//! Validation for the assistant and ui sections.

use crate::schema::HealthBuddyConfig;

use super::helpers::{validate_non_empty, validate_range, validate_range_f64};

/// Validate assistant constraints.
pub(crate) fn validate_assistant(errors: &mut Vec<String>, config: &HealthBuddyConfig) {
    let assistant = &config.assistant;
    validate_non_empty(errors, "assistant.name", &assistant.name);
    validate_non_empty(errors, "assistant.model", &assistant.model);
    validate_non_empty(errors, "assistant.system_prompt", &assistant.system_prompt);
    validate_range(errors, "assistant.max_tokens", assistant.max_tokens, 1, 65536);
    validate_range_f64(
        errors,
        "assistant.temperature",
        assistant.temperature,
        0.0,
        2.0,
    );
    validate_range(
        errors,
        "assistant.request_timeout_secs",
        assistant.request_timeout_secs,
        1,
        600,
    );
}

/// Validate ui constraints.
pub(crate) fn validate_ui(errors: &mut Vec<String>, config: &HealthBuddyConfig) {
    validate_non_empty(errors, "ui.clear_command", &config.ui.clear_command);
    if config.ui.user_label == config.ui.assistant_label {
        errors.push(format!(
            "ui.user_label and ui.assistant_label are both \"{}\"",
            config.ui.user_label
        ));
    }
}
