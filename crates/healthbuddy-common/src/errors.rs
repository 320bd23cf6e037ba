use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum HealthBuddyError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("runtime error: {0}")]
    Runtime(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("assistant.model must not be empty".into());
        assert_eq!(
            err.to_string(),
            "config validation error: assistant.model must not be empty"
        );
    }

    #[test]
    fn healthbuddy_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: HealthBuddyError = config_err.into();
        assert!(matches!(err, HealthBuddyError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn healthbuddy_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed");
        let err: HealthBuddyError = io_err.into();
        assert!(matches!(err, HealthBuddyError::Io(_)));
        assert!(err.to_string().contains("stdout closed"));
    }

    #[test]
    fn healthbuddy_error_runtime_display() {
        let err = HealthBuddyError::Runtime("no reactor".into());
        assert_eq!(err.to_string(), "runtime error: no reactor");
    }
}
