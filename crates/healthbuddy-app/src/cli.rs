use clap::Parser;

/// HealthBuddy, a friendly health assistant in your terminal.
#[derive(Parser, Debug)]
#[command(name = "healthbuddy", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Gemini model override (e.g. gemini-2.0-flash).
    #[arg(long)]
    pub model: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_is_all_none() {
        let args = Args::try_parse_from(["healthbuddy"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.log_level.is_none());
        assert!(args.model.is_none());
    }

    #[test]
    fn parses_overrides() {
        let args = Args::try_parse_from([
            "healthbuddy",
            "--config",
            "/tmp/hb.toml",
            "--log-level",
            "debug",
            "--model",
            "gemini-2.0-flash",
        ])
        .unwrap();
        assert_eq!(args.config.as_deref(), Some("/tmp/hb.toml"));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.model.as_deref(), Some("gemini-2.0-flash"));
    }
}
