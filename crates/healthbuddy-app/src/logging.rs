//! Log subscriber setup.
//!
//! Logging starts before the config is read so loader warnings are not
//! lost. The filter is reloadable and picks up `[logging] level` once the
//! config is known, unless `--log-level` was given.

use healthbuddy_config::schema::LogLevel;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

pub type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Directive for the `healthbuddy` targets: CLI flag first, then config.
pub fn directive(cli_level: Option<&str>, config_level: LogLevel) -> String {
    cli_level
        .map(|level| format!("healthbuddy={level}"))
        .unwrap_or_else(|| config_level.directive())
}

/// `RUST_LOG` plus `directive`, falling back to the default level when
/// the directive does not parse.
pub fn build_filter(directive: &str) -> EnvFilter {
    let filter = EnvFilter::from_default_env();
    match directive.parse() {
        Ok(d) => filter.add_directive(d),
        Err(_) => match LogLevel::default().directive().parse() {
            Ok(d) => filter.add_directive(d),
            Err(_) => filter,
        },
    }
}

/// Install the global subscriber, writing to stderr.
pub fn init(directive: &str) -> FilterHandle {
    let (filter, handle) = reload::Layer::new(build_filter(directive));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
    handle
}

/// Switch to the config's level. A `--log-level` flag keeps precedence.
pub fn apply_config_level(handle: &FilterHandle, cli_level: Option<&str>, config_level: LogLevel) {
    if cli_level.is_some() {
        return;
    }
    if let Err(e) = handle.reload(build_filter(&directive(None, config_level))) {
        tracing::warn!("Failed to apply configured log level: {e}");
    }
}
