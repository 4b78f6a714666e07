//! # Core Module
//!
//! Configuration and Discord message helpers shared by the bot.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Add response module with label truncation
//! - 1.0.0: Initial creation with config module

pub mod config;
pub mod response;

// Re-export commonly used items
pub use config::Config;
pub use response::{
    chunk_for_message, chunk_text, truncate_label, truncate_to_chars, LABEL_PREVIEW_CHARS,
    MESSAGE_LIMIT, OPTION_TEXT_LIMIT,
};
