//! GitHub REST API source implementation

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::{FETCH_TIMEOUT_MS, Settings};
use crate::source::error::FetchError;
use crate::source::types::{Commit, DirectoryEntry};
use crate::source::PreviewSource;

/// Source implementation for the GitHub REST API
pub struct GitHubSource {
    client: reqwest::Client,
    base_url: String,
    owner: String,
    repo: String,
}

impl GitHubSource {
    /// Creates a new GitHubSource with a custom base URL
    pub fn new(base_url: &str, owner: &str, repo: &str) -> Self {
        Self::with_timeout(
            base_url,
            owner,
            repo,
            Duration::from_millis(FETCH_TIMEOUT_MS),
        )
    }

    pub fn with_timeout(base_url: &str, owner: &str, repo: &str, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("sphinx-previews")
                .timeout(timeout)
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
            owner: owner.to_string(),
            repo: repo.to_string(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::with_timeout(
            &settings.api_url,
            &settings.owner,
            &settings.repo,
            Duration::from_millis(settings.timeout_ms),
        )
    }

    fn repo_url(&self) -> String {
        format!("{}/repos/{}/{}", self.base_url, self.owner, self.repo)
    }

    async fn get_json(&self, url: &str, query: &[(&str, &str)]) -> Result<Value, FetchError> {
        debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(url)
            .query(query)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(url.to_string()));
        }

        let rate_limit_exhausted = status == reqwest::StatusCode::FORBIDDEN
            && response
                .headers()
                .get("x-ratelimit-remaining")
                .is_some_and(|v| v.as_bytes() == b"0");

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS || rate_limit_exhausted {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(FetchError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        if !status.is_success() {
            warn!("GitHub API returned status {}: {}", status, url);
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response.json().await.map_err(|e| {
            warn!("Failed to parse GitHub response from {}: {}", url, e);
            FetchError::InvalidResponse(e.to_string())
        })
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, FetchError> {
    serde_json::from_value(value).map_err(|e| {
        warn!("Unexpected GitHub payload shape: {}", e);
        FetchError::InvalidResponse(e.to_string())
    })
}

#[async_trait::async_trait]
impl PreviewSource for GitHubSource {
    async fn fetch_commits(&self, branch: &str, per_page: u32) -> Result<Vec<Commit>, FetchError> {
        let url = format!("{}/commits", self.repo_url());
        let per_page = per_page.to_string();

        let value = self
            .get_json(&url, &[("sha", branch), ("per_page", &per_page)])
            .await?;
        decode(value)
    }

    async fn fetch_directory(
        &self,
        path: &str,
        git_ref: &str,
    ) -> Result<Vec<DirectoryEntry>, FetchError> {
        let url = format!("{}/contents/{}", self.repo_url(), path.trim_matches('/'));

        match self.get_json(&url, &[("ref", git_ref)]).await? {
            value @ Value::Array(_) => decode(value),
            _ => {
                debug!("{} is not a directory, treating listing as empty", path);
                Ok(Vec::new())
            }
        }
    }
}
