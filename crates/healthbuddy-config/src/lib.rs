//! HealthBuddy configuration system.
//!
//! Provides TOML-based configuration for the assistant persona, the chat
//! surface labels, and logging. All config sections use sensible defaults
//! so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use healthbuddy_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("model: {}", config.assistant.model);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

// Re-export core types for convenience
pub use schema::{HealthBuddyConfig, CONFIG_SCHEMA_VERSION};
pub use toml_loader::{load_default, load_from_path};

use std::path::Path;

use healthbuddy_common::ConfigError;

/// Convenience function to load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creates a default
/// if none exists, and validates the result.
pub fn load_config() -> Result<HealthBuddyConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path (the `--config` override).
///
/// Unlike [`load_config`], a missing file is an error: the user asked for
/// this exact file.
pub fn load_config_from(path: &Path) -> Result<HealthBuddyConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}
