//! # Features
//!
//! - `styles`: style catalog, rendering engine, pagination and picker components
//! - `sessions`: per-user picker state

pub mod sessions;
pub mod styles;

pub use sessions::{SessionStore, StyledRequest};
pub use styles::{render, preview, plan, PagePlan, Style, StyleCatalog, StyleError};

/// Bot version from Cargo.toml
pub fn get_bot_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
