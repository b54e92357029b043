//! Hosting API layer for preview metadata
//!
//! # Modules
//!
//! - [`github`]: GitHub REST API implementation of [`PreviewSource`]
//! - [`error`]: Error type for fetch operations
//! - [`types`]: Commit and directory listing payloads

pub mod error;
pub mod github;
pub mod types;

#[cfg(test)]
use mockall::automock;

pub use error::FetchError;
pub use github::GitHubSource;
pub use types::{Commit, CommitAuthor, CommitDetails, DirectoryEntry};

/// Trait for fetching preview metadata from a source-control host
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait PreviewSource: Send + Sync {
    /// Fetches the most recent commits on a branch
    ///
    /// # Arguments
    /// * `branch` - Branch whose history is listed
    /// * `per_page` - Maximum number of commits returned
    async fn fetch_commits(&self, branch: &str, per_page: u32) -> Result<Vec<Commit>, FetchError>;

    /// Fetches the entries of a directory on a branch
    ///
    /// Returns an empty list when `path` names a file instead of a directory.
    async fn fetch_directory(
        &self,
        path: &str,
        git_ref: &str,
    ) -> Result<Vec<DirectoryEntry>, FetchError>;
}
