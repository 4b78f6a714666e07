//! # Command System
//!
//! Slash command (/) handling for Discord interactions.
//!
//! - **Version**: 2.1.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 2.1.0: Add /styles listing
//! - 2.0.0: Handler trait, shared context and registry
//! - 1.0.0: Initial /start, /help and /style commands

pub mod context;
pub mod handler;
pub mod handlers;
pub mod registry;
pub mod slash;

// Re-export the CommandHandler from the handler module
pub use crate::command_handler::CommandHandler;

// Re-export handler infrastructure
pub use context::{check_text, CommandContext, SelectionOutcome, MAX_TEXT_CHARS, NO_SESSION_MESSAGE};
pub use handler::SlashCommandHandler;
pub use registry::CommandRegistry;

// Re-export commonly used items from submodules
pub use slash::{
    create_slash_commands, get_string_option, register_global_commands, register_guild_commands,
};
