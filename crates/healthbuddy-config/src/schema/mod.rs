//! Configuration schema types for HealthBuddy.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod assistant;
mod logging;
mod ui;

pub use assistant::*;
pub use logging::*;
pub use ui::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for HealthBuddy.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HealthBuddyConfig {
    pub assistant: AssistantConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}
