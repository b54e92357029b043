//! Source test utilities

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use sphinx_previews::source::{
    Commit, CommitAuthor, CommitDetails, DirectoryEntry, FetchError, PreviewSource,
};

/// Builds a commit authored by "Jane" on 2024-01-01
pub fn commit(sha: &str, message: &str) -> Commit {
    Commit {
        sha: sha.to_string(),
        commit: CommitDetails {
            message: message.to_string(),
            author: CommitAuthor {
                name: "Jane".to_string(),
                date: Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
            },
        },
    }
}

/// Mock source for testing
///
/// A `None` response fails the request with a network-style error.
#[derive(Default)]
pub struct MockSource {
    commits: Option<Vec<Commit>>,
    listing: Option<Vec<DirectoryEntry>>,
    requests: AtomicUsize,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_commits(mut self, commits: Vec<Commit>) -> Self {
        self.commits = Some(commits);
        self
    }

    pub fn with_listing(mut self, names: &[&str]) -> Self {
        self.listing = Some(names.iter().map(|n| DirectoryEntry::new(*n)).collect());
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PreviewSource for MockSource {
    async fn fetch_commits(&self, branch: &str, _per_page: u32) -> Result<Vec<Commit>, FetchError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        self.commits
            .clone()
            .ok_or_else(|| FetchError::InvalidResponse(format!("no commits for {}", branch)))
    }

    async fn fetch_directory(
        &self,
        path: &str,
        _git_ref: &str,
    ) -> Result<Vec<DirectoryEntry>, FetchError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        self.listing
            .clone()
            .ok_or_else(|| FetchError::NotFound(path.to_string()))
    }
}
