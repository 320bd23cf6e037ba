//! Full configuration validation.
//!
//! Each section has its own validator; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod sections;


use crate::schema::HealthBuddyConfig;
use healthbuddy_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &HealthBuddyConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    sections::validate_assistant(&mut errors, config);
    sections::validate_ui(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
