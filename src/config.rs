use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default base URL for GitHub API
pub const DEFAULT_GITHUB_BASE_URL: &str = "https://api.github.com";

/// Releases requested per repository (one page)
pub const DEFAULT_PER_PAGE: u32 = 50;

/// GitHub caps `per_page` at 100
pub const MAX_PER_PAGE: u32 = 100;

/// Timeout for a single release request in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

const APP_NAME: &str = "latest-versions";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Runtime configuration
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub github: GitHubConfig,
}

/// GitHub Releases API configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct GitHubConfig {
    pub base_url: String,
    pub per_page: u32,
    pub timeout_ms: u64,
    pub token: Option<String>,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GITHUB_BASE_URL.to_string(),
            per_page: DEFAULT_PER_PAGE,
            timeout_ms: FETCH_TIMEOUT_MS,
            token: None,
        }
    }
}

/// Values that override the config file, usually from the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub per_page: Option<u32>,
    pub token: Option<String>,
}

impl Config {
    /// Parse a JSON config document.
    pub fn from_json(path: &Path, content: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the config file.
    ///
    /// An explicit path must exist. The default path is optional and falls
    /// back to built-in defaults when absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match explicit {
            Some(path) => (path.to_path_buf(), true),
            None => (config_path(), false),
        };

        match std::fs::read_to_string(&path) {
            Ok(content) => Self::from_json(&path, &content),
            Err(e) if !required && e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Read { path, source }),
        }
    }

    /// Apply environment and command-line overrides on top of the file values.
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(base_url) = overrides.base_url {
            self.github.base_url = base_url;
        }
        if let Some(per_page) = overrides.per_page {
            self.github.per_page = per_page;
        }
        if overrides.token.is_some() {
            self.github.token = overrides.token;
        }
        self.github.per_page = self.github.per_page.clamp(1, MAX_PER_PAGE);
        self
    }
}

/// Token from `GITHUB_TOKEN`, ignoring an empty value.
pub fn token_from_env() -> Option<String> {
    std::env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty())
}

/// Returns the path to the config directory for latest-versions.
/// Uses $XDG_CONFIG_HOME/latest-versions if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/latest-versions,
/// or ./latest-versions if neither is available.
pub fn config_dir() -> PathBuf {
    config_dir_with_env(std::env::var("XDG_CONFIG_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the default config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

fn config_dir_with_env(xdg_config_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let config_dir = xdg_config_home
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));

    config_dir.join(APP_NAME)
}
