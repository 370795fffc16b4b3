use serde::Deserialize;
use std::path::PathBuf;

fn default_per_page() -> u64 {
    20
}

fn default_api_host() -> String {
    "api.github.com".to_string()
}

fn default_token_env() -> Option<String> {
    Some("GITHUB_TOKEN".to_string())
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Items fetched per page; also the offset step for prev/next.
    #[serde(default = "default_per_page")]
    pub per_page: u64,
    #[serde(default = "default_api_host")]
    pub api_host: String,
    /// Environment variable to read a token from. A token is optional; the
    /// search endpoints work unauthenticated at lower rate limits.
    #[serde(default = "default_token_env")]
    pub token_env: Option<String>,
    /// Shell command producing a token (e.g. `gh auth token`).
    #[serde(default)]
    pub token_command: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
            api_host: default_api_host(),
            token_env: default_token_env(),
            token_command: None,
        }
    }
}

fn config_path() -> Option<PathBuf> {
    let config_dir = dirs::config_dir()?;
    Some(config_dir.join("hubseek").join("config.toml"))
}

impl Config {
    pub fn load() -> Self {
        let Some(path) = config_path() else {
            return Config::default();
        };

        let Ok(content) = std::fs::read_to_string(&path) else {
            return Config::default();
        };

        match toml::from_str::<Config>(&content) {
            Ok(config) if config.per_page > 0 => config,
            Ok(_) => {
                tracing::warn!("per_page must be positive, using defaults");
                Config::default()
            }
            Err(e) => {
                tracing::warn!("invalid config file: {}", e);
                Config::default()
            }
        }
    }
}
