//! One-shot page generation

use tracing::error;

use crate::config::Settings;
use crate::preview::{PageState, PreviewLinks, Variant, load_previews};
use crate::render::render_page;
use crate::source::PreviewSource;

/// Runs the fetch chain once and settles the page state
pub async fn load_page_state(
    source: &dyn PreviewSource,
    settings: &Settings,
    variant: Variant,
) -> PageState {
    let result = load_previews(source, settings, variant)
        .await
        .inspect_err(|e| error!("Failed to load previews: {}", e));

    PageState::settle(result)
}

/// Loads previews and renders the page for them
pub async fn generate_page(
    source: &dyn PreviewSource,
    settings: &Settings,
    variant: Variant,
) -> String {
    let state = load_page_state(source, settings, variant).await;
    let links = PreviewLinks::from_settings(settings);

    render_page(&state, &links, &settings.preview_branch)
}
