//! Derivation of the rendered preview list from fetched metadata

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::preview::entry::PreviewEntry;
use crate::source::{Commit, DirectoryEntry};

static BUILD_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^v-(\d+)$").expect("valid build name pattern"));

/// Keeps commits that have a deployed preview directory, in commit order
pub fn deployed_commits(commits: &[Commit], entries: &[DirectoryEntry]) -> Vec<PreviewEntry> {
    let deployed: HashSet<&str> = entries.iter().map(|e| e.name.as_str()).collect();

    commits
        .iter()
        .filter(|c| deployed.contains(c.sha.as_str()))
        .map(PreviewEntry::from_commit)
        .collect()
}

pub fn all_commits(commits: &[Commit]) -> Vec<PreviewEntry> {
    commits.iter().map(PreviewEntry::from_commit).collect()
}

/// Parses the build number out of a `v-<digits>` directory name
pub fn parse_build_number(name: &str) -> Option<u64> {
    BUILD_NAME
        .captures(name)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Keeps `v-<n>` entries, newest build first
///
/// Entries with equal numbers (e.g. `v-1` and `v-01`) keep their listing order.
pub fn version_builds(entries: &[DirectoryEntry]) -> Vec<PreviewEntry> {
    let mut builds: Vec<(u64, &str)> = entries
        .iter()
        .filter_map(|e| parse_build_number(&e.name).map(|n| (n, e.name.as_str())))
        .collect();

    builds.sort_by(|a, b| b.0.cmp(&a.0));

    builds
        .into_iter()
        .map(|(number, name)| PreviewEntry::from_build(name, number))
        .collect()
}
