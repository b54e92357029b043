//! Preview list derivation and loading
//!
//! # Modules
//!
//! - [`derive`]: Filters and orders fetched metadata into preview entries
//! - [`entry`]: The `PreviewEntry` rendered for each preview
//! - [`links`]: Site-relative and hosted URLs of a preview
//! - [`loader`]: Runs the fetch chain for a [`Variant`]
//! - [`state`]: Page state settled from the fetch chain

pub mod derive;
pub mod entry;
pub mod links;
pub mod loader;
pub mod state;

pub use entry::PreviewEntry;
pub use links::PreviewLinks;
pub use loader::{Variant, load_previews};
pub use state::PageState;
