use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_USER_AGENT, GITHUB_API_BASE, HUNT_DIRECTORIES, REPO_NAME, REPO_OWNER};

const CONFIG_DIR_NAME: &str = "hearth";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Identity of the hunt repository and how to reach it.
///
/// Passed explicitly into the collection so tests and alternate mirrors can
/// substitute their own values. Every field is optional in the JSON form;
/// missing fields fall back to the upstream HEARTH repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SourceConfig {
    pub owner: String,
    pub repo: String,
    /// Directories enumerated in order by `get_all`
    pub directories: Vec<String>,
    pub api_base: String,
    pub user_agent: String,

    /// Personal access token, raises the unauthenticated rate limit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Enables the in-process cache decorator when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_ttl_secs: Option<u64>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            owner: REPO_OWNER.to_string(),
            repo: REPO_NAME.to_string(),
            directories: HUNT_DIRECTORIES.iter().map(|d| d.to_string()).collect(),
            api_base: GITHUB_API_BASE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            token: None,
            timeout_secs: None,
            cache_ttl_secs: None,
        }
    }
}

impl SourceConfig {
    /// Load config from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from an explicit path, else from the default location if that
    /// file exists, else fall back to defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match default_config_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn cache_ttl(&self) -> Option<Duration> {
        self.cache_ttl_secs.map(Duration::from_secs)
    }

    /// Contents API URL for one directory
    pub fn contents_url(&self, directory: &str) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.api_base.trim_end_matches('/'),
            self.owner,
            self.repo,
            directory
        )
    }
}

/// `~/.config/hearth/config.json` on Linux, platform equivalent elsewhere
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
