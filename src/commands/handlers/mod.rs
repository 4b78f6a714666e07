//! Per-command handler implementations
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Add StyleHandler (style, styles)
//! - 1.0.0: UtilityHandler (start, help, ping, status)

pub mod style;
pub mod utility;

use std::sync::Arc;

pub use utility::WELCOME_MESSAGE;

use super::handler::SlashCommandHandler;

/// Create all registered command handlers
pub fn create_all_handlers() -> Vec<Arc<dyn SlashCommandHandler>> {
    vec![
        Arc::new(utility::UtilityHandler),
        Arc::new(style::StyleHandler),
    ]
}
