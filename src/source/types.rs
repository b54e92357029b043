//! Payload types returned by the hosting API

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Entry of the commits-on-branch endpoint
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Commit {
    pub sha: String,
    pub commit: CommitDetails,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CommitDetails {
    pub message: String,
    pub author: CommitAuthor,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CommitAuthor {
    pub name: String,
    pub date: DateTime<Utc>,
}

/// Entry of the directory-contents endpoint
///
/// Files and directories alike; only the name identifies a preview.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DirectoryEntry {
    pub name: String,
}

impl DirectoryEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn commit_deserializes_nested_author() {
        let commit: Commit = serde_json::from_value(json!({
            "sha": "abc123",
            "url": "https://api.github.com/repos/o/r/commits/abc123",
            "commit": {
                "message": "Update docs",
                "author": {
                    "name": "Jane",
                    "email": "jane@example.com",
                    "date": "2024-03-01T12:30:00Z"
                }
            }
        }))
        .unwrap();

        assert_eq!(commit.sha, "abc123");
        assert_eq!(commit.commit.message, "Update docs");
        assert_eq!(commit.commit.author.name, "Jane");
        assert_eq!(
            commit.commit.author.date,
            Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap()
        );
    }

    #[test]
    fn directory_entry_ignores_extra_fields() {
        let entries: Vec<DirectoryEntry> = serde_json::from_value(json!([
            { "name": "abc123", "type": "dir", "path": "sphinx-preview/abc123" },
            { "name": "index.html", "type": "file" },
            { "name": "link", "type": "symlink" }
        ]))
        .unwrap();

        assert_eq!(
            entries,
            vec![
                DirectoryEntry::new("abc123"),
                DirectoryEntry::new("index.html"),
                DirectoryEntry::new("link"),
            ]
        );
    }
}
