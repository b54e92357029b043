use chrono::{DateTime, Utc};

use crate::source::Commit;

/// Format used for commit dates on the page
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Number of SHA characters shown in a preview title
const SHORT_SHA_LEN: usize = 7;

/// A single preview as shown on the page
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewEntry {
    /// Commit SHA or build name; unique within a page and used in URLs
    pub id: String,
    pub title: String,
    pub message: String,
    /// Commit author; `None` for build directories
    pub author: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

impl PreviewEntry {
    pub fn from_commit(commit: &Commit) -> Self {
        let author = &commit.commit.author;
        let short_sha: String = commit.sha.chars().take(SHORT_SHA_LEN).collect();

        Self {
            id: commit.sha.clone(),
            title: format!("Preview: {}", short_sha),
            message: commit.commit.message.clone(),
            author: Some(author.name.clone()),
            date: Some(author.date),
        }
    }

    pub fn from_build(name: &str, number: u64) -> Self {
        Self {
            id: name.to_string(),
            title: format!("Preview: {}", name),
            message: format!("Documentation build {}", number),
            author: None,
            date: None,
        }
    }

    /// Metadata line: author and date for commits, build name otherwise
    pub fn meta(&self) -> String {
        match (&self.author, &self.date) {
            (Some(author), Some(date)) => format!(
                "Author: {} \u{2022} Date: {}",
                author,
                date.format(DATE_FORMAT)
            ),
            (Some(author), None) => format!("Author: {}", author),
            (None, Some(date)) => format!("Date: {}", date.format(DATE_FORMAT)),
            (None, None) => format!("Build: {}", self.id),
        }
    }
}
