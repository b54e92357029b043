//! Generator for the index page of Sphinx documentation preview builds
//!
//! # Modules
//!
//! - [`config`]: Settings and defaults
//! - [`source`]: Hosting API client for commits and directory listings
//! - [`preview`]: Derives the preview list and settles the page state
//! - [`render`]: HTML rendering of the page
//! - [`generator`]: Ties loading and rendering together

pub mod config;
pub mod generator;
pub mod preview;
pub mod render;
pub mod source;
