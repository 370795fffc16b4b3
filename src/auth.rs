use crate::config::Config;

/// Run a shell command and capture trimmed stdout as a token.
fn try_cli_token(command: &str) -> Option<String> {
    let output = std::process::Command::new("sh")
        .args(["-c", command])
        .output()
        .ok()?;

    if output.status.success() {
        let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if !token.is_empty() {
            return Some(token);
        }
    }
    None
}

/// Resolve an API token, trying the configured env var first, then the
/// configured command. `None` means unauthenticated requests.
pub fn resolve_token(config: &Config) -> Option<String> {
    if let Some(env_var) = &config.token_env {
        if let Ok(token) = std::env::var(env_var) {
            if !token.is_empty() {
                return Some(token);
            }
        }
    }

    if let Some(cmd) = &config.token_command {
        if let Some(token) = try_cli_token(cmd) {
            return Some(token);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_token_captures_stdout() {
        assert_eq!(try_cli_token("echo abc123"), Some("abc123".to_string()));
    }

    #[test]
    fn cli_token_rejects_failures_and_empty_output() {
        assert_eq!(try_cli_token("false"), None);
        assert_eq!(try_cli_token("true"), None);
    }

    #[test]
    fn token_command_used_when_env_missing() {
        let config = Config {
            token_env: Some("HUBSEEK_TEST_TOKEN_UNSET".to_string()),
            token_command: Some("echo from-command".to_string()),
            ..Config::default()
        };
        assert_eq!(resolve_token(&config), Some("from-command".to_string()));
    }
}
