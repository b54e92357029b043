//! Fetch chain producing the preview list

use clap::ValueEnum;
use tracing::{info, warn};

use crate::config::Settings;
use crate::preview::derive::{all_commits, deployed_commits, version_builds};
use crate::preview::entry::PreviewEntry;
use crate::source::{FetchError, PreviewSource};

/// Which metadata a page is built from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    /// Commits on the preview branch that have a deployed directory
    #[default]
    Deployed,
    /// Every commit on the preview branch
    Commits,
    /// `v-<n>` build directories, newest first
    Versions,
}

/// Fetches metadata for `variant` and derives the preview list
///
/// For [`Variant::Deployed`] the directory listing only filters the commits, so
/// a failed listing counts as empty instead of failing the load.
pub async fn load_previews(
    source: &dyn PreviewSource,
    settings: &Settings,
    variant: Variant,
) -> Result<Vec<PreviewEntry>, FetchError> {
    let entries = match variant {
        Variant::Deployed => {
            let (commits, listing) = tokio::join!(
                source.fetch_commits(&settings.preview_branch, settings.per_page),
                source.fetch_directory(&settings.preview_dir, &settings.pages_branch),
            );

            let listing = listing.unwrap_or_else(|e| {
                warn!(
                    "Failed to list {} on {}, assuming no deployed previews: {}",
                    settings.preview_dir, settings.pages_branch, e
                );
                Vec::new()
            });

            deployed_commits(&commits?, &listing)
        }
        Variant::Commits => {
            let commits = source
                .fetch_commits(&settings.preview_branch, settings.per_page)
                .await?;
            all_commits(&commits)
        }
        Variant::Versions => {
            let listing = source
                .fetch_directory(&settings.preview_dir, &settings.pages_branch)
                .await?;
            version_builds(&listing)
        }
    };

    info!("Loaded {} previews ({:?})", entries.len(), variant);

    Ok(entries)
}
