//! Utility command handlers
//!
//! Handles: start, help, ping, status
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::Result;
use async_trait::async_trait;
use log::info;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::application::interaction::InteractionResponseType;
use serenity::prelude::Context;
use std::sync::Arc;
use std::time::Duration;

use crate::commands::context::CommandContext;
use crate::commands::handler::SlashCommandHandler;
use crate::features::get_bot_version;

pub const WELCOME_MESSAGE: &str = "👋 Welcome to Stylish Text Generator Bot!\n\n\
Send me any text and I'll show you different style options.\n\
Tap on any style to copy it directly!\n\n\
In a server, use `/style text:<your text>` instead.";

/// Handler for utility commands: start, help, ping, status
pub struct UtilityHandler;

#[async_trait]
impl SlashCommandHandler for UtilityHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["start", "help", "ping", "status"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let content = match command.data.name.as_str() {
            "start" | "help" => WELCOME_MESSAGE.to_string(),
            "ping" => "Pong!".to_string(),
            "status" => format_status(&ctx),
            _ => return Ok(()),
        };

        command
            .create_interaction_response(&serenity_ctx.http, |response| {
                response
                    .kind(InteractionResponseType::ChannelMessageWithSource)
                    .interaction_response_data(|message| message.content(content))
            })
            .await?;

        info!(
            "/{} command completed for user {}",
            command.data.name, command.user.id
        );
        Ok(())
    }
}

fn format_uptime(uptime: Duration) -> String {
    let secs = uptime.as_secs();
    format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
}

fn format_status(ctx: &CommandContext) -> String {
    format!(
        "**Bot Status**\n\
        ✅ Online and operational\n\
        ⏱️ Uptime: {}\n\
        🎨 Styles: {}\n\
        👥 Active sessions: {}\n\
        📦 Version: {}",
        format_uptime(ctx.start_time.elapsed()),
        ctx.catalog.len(),
        ctx.sessions.len(),
        get_bot_version()
    )
}
