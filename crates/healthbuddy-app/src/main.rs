mod app_state;
mod cli;
mod env;
mod event_loop;
mod input;
mod logging;
mod secret;
mod surface;

use std::path::Path;

use healthbuddy_common::HealthBuddyError;
use healthbuddy_config::schema::LogLevel;
use healthbuddy_config::HealthBuddyConfig;

use app_state::{ChatSession, Credential, GeminiFactory};
use secret::SecretEntry;
use surface::TerminalSurface;

/// Load config from `--config` or the platform default.
///
/// An explicit path must load cleanly; the default path falls back to
/// built-in defaults on any error.
fn load_config(args: &cli::Args) -> healthbuddy_common::Result<HealthBuddyConfig> {
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
        return Ok(healthbuddy_config::load_config_from(Path::new(path))?);
    }
    Ok(healthbuddy_config::load_config().unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        HealthBuddyConfig::default()
    }))
}

fn run() -> healthbuddy_common::Result<()> {
    // Load .env file before anything else
    let dotenv_loaded = env::load_dotenv(Path::new(".env"));

    let args = cli::parse();

    let cli_level = args.log_level.as_deref();
    let log_filter = logging::init(&logging::directive(cli_level, LogLevel::default()));
    if dotenv_loaded {
        tracing::debug!("Loaded environment from .env");
    }

    tracing::info!("HealthBuddy v{} starting...", env!("CARGO_PKG_VERSION"));

    let mut config = load_config(&args)?;
    logging::apply_config_level(&log_filter, cli_level, config.logging.level);
    tracing::info!("Config loaded (model: {})", config.assistant.model);

    if let Some(model) = args.model {
        tracing::info!("Using model override: {model}");
        config.assistant.model = model;
    }

    let initial_credential = env::api_key_from_env().and_then(|key| Credential::confirm(&key));
    if initial_credential.is_some() {
        tracing::info!("Using {} from environment", env::API_KEY_VAR);
    }

    let factory = GeminiFactory::new(config.assistant.clone());
    let mut session = ChatSession::new(config.ui, Box::new(factory), initial_credential);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| HealthBuddyError::Runtime(e.to_string()))?;

    let mut surface = TerminalSurface::new(std::io::stdout());
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    runtime.block_on(event_loop::run(
        &mut session,
        stdin,
        &mut surface,
        SecretEntry::detect(),
    ))?;

    tracing::info!("Shutdown complete");
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        tracing::error!("{e}");
        eprintln!("healthbuddy: {e}");
        std::process::exit(1);
    }
}
