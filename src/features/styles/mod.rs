//! # Feature: Text Styles
//!
//! Renders plain text in decorative Unicode styles (fullwidth, bubble, script, ...).
//! Styles come from a versioned style-set document compiled in from
//! `data/style_sets.yaml`, or loaded from `STYLE_SETS_PATH` at startup.
//!
//! - **Version**: 1.2.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.2.0: Select-menu picker with 25 styles per page
//! - 1.1.0: External YAML/JSON style sets
//! - 1.0.0: Initial release with render, preview and pagination

pub mod buttons;
pub mod catalog;
pub mod engine;
pub mod pagination;

pub use buttons::*;
pub use catalog::{CatalogError, Style, StyleCatalog, StyleError, SUPPORTED_VERSION};
pub use engine::{preview, render, PREVIEW_ALPHABET};
pub use pagination::{page_count, plan, PagePlan, DEFAULT_STYLES_PER_PAGE};
