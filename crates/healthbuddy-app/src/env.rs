//! `.env` loading and the environment-provided credential.

use std::path::Path;

/// Name of the environment variable holding the Gemini API key.
pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";

/// Parse `KEY=VALUE` lines. Blank lines and `#` comments are skipped and
/// surrounding quotes are stripped from values.
pub fn parse_dotenv(contents: &str) -> Vec<(String, String)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let line = line.strip_prefix("export ").unwrap_or(line);
            let (key, value) = line.split_once('=')?;
            let key = key.trim();
            if key.is_empty() {
                return None;
            }
            let value = value.trim().trim_matches('"').trim_matches('\'');
            Some((key.to_string(), value.to_string()))
        })
        .collect()
}

/// Load environment variables from a .env file, never overriding
/// variables that are already set. Returns whether a file was found.
pub fn load_dotenv(path: &Path) -> bool {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return false;
    };
    for (key, value) in parse_dotenv(&contents) {
        if std::env::var_os(&key).is_none() {
            std::env::set_var(key, value);
        }
    }
    true
}

/// The API key from the process environment, if set and non-blank.
pub fn api_key_from_env() -> Option<String> {
    std::env::var(API_KEY_VAR)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_keys_comments_and_quotes() {
        let parsed = parse_dotenv(
            "# secrets\n\nGOOGLE_API_KEY=\"AIza123\"\nexport RUST_LOG='healthbuddy=debug'\nBROKEN\n=nokey\n",
        );
        assert_eq!(
            parsed,
            vec![
                ("GOOGLE_API_KEY".to_string(), "AIza123".to_string()),
                ("RUST_LOG".to_string(), "healthbuddy=debug".to_string()),
            ]
        );
    }

    #[test]
    fn value_may_contain_equals() {
        let parsed = parse_dotenv("TOKEN=abc=def");
        assert_eq!(parsed, vec![("TOKEN".to_string(), "abc=def".to_string())]);
    }

    #[test]
    fn load_dotenv_does_not_override_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(
            &path,
            "HB_TEST_DOTENV_EXISTING=from_file\nHB_TEST_DOTENV_NEW=from_file\n",
        )
        .unwrap();
        std::env::set_var("HB_TEST_DOTENV_EXISTING", "from_env");

        assert!(load_dotenv(&path));
        assert_eq!(std::env::var("HB_TEST_DOTENV_EXISTING").unwrap(), "from_env");
        assert_eq!(std::env::var("HB_TEST_DOTENV_NEW").unwrap(), "from_file");
    }

    #[test]
    fn load_dotenv_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!load_dotenv(&dir.path().join(".env")));
    }
}
