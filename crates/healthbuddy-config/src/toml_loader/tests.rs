//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_parse_error() {
    let result = load_from_path(Path::new("/tmp/nonexistent_healthbuddy_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, healthbuddy_common::ConfigError::ParseError(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[assistant]
model = "gemini-2.0-flash"
temperature = 0.2

[ui]
assistant_label = "Dokter Bot"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.assistant.model, "gemini-2.0-flash");
    assert_eq!(config.assistant.temperature, 0.2);
    assert_eq!(config.ui.assistant_label, "Dokter Bot");
    // Defaults preserved
    assert_eq!(config.assistant.name, "HealthBuddy");
    assert_eq!(config.ui.user_label, "User");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, healthbuddy_common::ConfigError::ParseError(_)));
}

#[test]
fn load_config_with_invalid_values_is_returned_as_parsed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[assistant]\nmax_tokens = 0\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.assistant.max_tokens, 0);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("healthbuddy").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.assistant.model, "gemini-2.5-flash");
    assert_eq!(config.ui.title, "HealthBuddy - Asisten Kesehatanmu");
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::HealthBuddyConfig;

    let config: HealthBuddyConfig = toml::from_str(default_config_toml()).unwrap();
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_is_reasonable() {
    // dirs::config_dir can be unavailable in stripped-down CI containers
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("healthbuddy"));
        assert!(path_str.ends_with("config.toml"));
    }
}
