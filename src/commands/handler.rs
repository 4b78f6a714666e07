//! Slash command handler trait
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::Result;
use async_trait::async_trait;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::prelude::Context;
use std::sync::Arc;

use super::context::CommandContext;

/// A handler for one or more slash commands
///
/// Handlers are registered with a [`CommandRegistry`](super::CommandRegistry)
/// and dispatched by command name.
///
/// ```ignore
/// pub struct PingHandler;
///
/// #[async_trait]
/// impl SlashCommandHandler for PingHandler {
///     fn command_names(&self) -> &'static [&'static str] {
///         &["ping"]
///     }
///
///     async fn handle(
///         &self,
///         ctx: Arc<CommandContext>,
///         serenity_ctx: &Context,
///         command: &ApplicationCommandInteraction,
///     ) -> Result<()> {
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait SlashCommandHandler: Send + Sync {
    /// Command name(s) this handler processes
    fn command_names(&self) -> &'static [&'static str];

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // The registry stores handlers as trait objects
    fn _assert_object_safe(_: &dyn SlashCommandHandler) {}
}
