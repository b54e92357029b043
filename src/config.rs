use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

// =============================================================================
// Fetch-related constants
// =============================================================================

/// Default base URL for the GitHub REST API
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Timeout for each fetch request in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

/// Number of commits requested from the commits endpoint
pub const DEFAULT_PER_PAGE: u32 = 50;

// =============================================================================
// Repository layout defaults
// =============================================================================

pub const DEFAULT_OWNER: &str = "Codrad";
pub const DEFAULT_REPO: &str = "docusaurus-deploy";

/// Branch that CI pushes documentation sources to
pub const DEFAULT_PREVIEW_BRANCH: &str = "sphinx-preview";

/// Branch that holds the deployed site
pub const DEFAULT_PAGES_BRANCH: &str = "gh-pages";

/// Directory on the pages branch containing one subdirectory per preview
pub const DEFAULT_PREVIEW_DIR: &str = "sphinx-preview";

/// Environment variable holding tracing filter directives
pub const LOG_ENV_VAR: &str = "SPHINX_PREVIEWS_LOG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Generator settings
///
/// Loaded from an optional JSON file. Missing fields fall back to defaults.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Owner of the repository holding both branches
    pub owner: String,
    /// Repository holding both branches
    pub repo: String,
    /// Site path segment the previews are served under; defaults to `repo`
    pub deploy_repo: Option<String>,
    pub preview_branch: String,
    pub pages_branch: String,
    pub preview_dir: String,
    pub per_page: u32,
    pub api_url: String,
    pub timeout_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            owner: DEFAULT_OWNER.to_string(),
            repo: DEFAULT_REPO.to_string(),
            deploy_repo: None,
            preview_branch: DEFAULT_PREVIEW_BRANCH.to_string(),
            pages_branch: DEFAULT_PAGES_BRANCH.to_string(),
            preview_dir: DEFAULT_PREVIEW_DIR.to_string(),
            per_page: DEFAULT_PER_PAGE,
            api_url: DEFAULT_API_URL.to_string(),
            timeout_ms: FETCH_TIMEOUT_MS,
        }
    }
}

impl Settings {
    /// Reads settings from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Site path segment previews are served under
    pub fn deploy_repo(&self) -> &str {
        self.deploy_repo.as_deref().unwrap_or(&self.repo)
    }
}
