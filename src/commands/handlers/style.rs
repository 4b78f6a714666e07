//! Style command handlers
//!
//! Handles: style, styles
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::Result;
use async_trait::async_trait;
use log::{debug, info};
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::application::interaction::InteractionResponseType;
use serenity::prelude::Context;
use std::sync::Arc;
use uuid::Uuid;

use crate::commands::context::{check_text, CommandContext};
use crate::commands::handler::SlashCommandHandler;
use crate::commands::slash::get_string_option;
use crate::core::chunk_for_message;
use crate::features::styles::{StyleCatalog, PICKER_PROMPT};

/// Handler for the picker (/style) and the catalog listing (/styles)
pub struct StyleHandler;

#[async_trait]
impl SlashCommandHandler for StyleHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["style", "styles"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        match command.data.name.as_str() {
            "style" => self.handle_style(&ctx, serenity_ctx, command).await,
            "styles" => self.handle_styles(&ctx, serenity_ctx, command).await,
            _ => Ok(()),
        }
    }
}

impl StyleHandler {
    /// Handle /style - store the text and show the first picker page
    async fn handle_style(
        &self,
        ctx: &CommandContext,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let request_id = Uuid::new_v4();
        let user_id = command.user.id;
        let text = get_string_option(&command.data.options, "text").unwrap_or_default();

        if let Some(reason) = check_text(&text) {
            command
                .create_interaction_response(&serenity_ctx.http, |response| {
                    response
                        .kind(InteractionResponseType::ChannelMessageWithSource)
                        .interaction_response_data(|message| {
                            message
                                .content(reason)
                                .ephemeral(true)
                        })
                })
                .await?;
            return Ok(());
        }

        debug!("[{request_id}] /style from {user_id}: {} chars", text.chars().count());
        let components = ctx.start_picker(user_id.0, &text);

        command
            .create_interaction_response(&serenity_ctx.http, |response| {
                response
                    .kind(InteractionResponseType::ChannelMessageWithSource)
                    .interaction_response_data(|message| {
                        message
                            .content(PICKER_PROMPT)
                            .set_components(components)
                            .ephemeral(true)
                    })
            })
            .await?;

        info!("[{request_id}] Style picker sent to user {user_id}");
        Ok(())
    }

    /// Handle /styles - list every style with its alphabet preview
    async fn handle_styles(
        &self,
        ctx: &CommandContext,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let listing = format_style_listing(&ctx.catalog);
        let mut chunks = chunk_for_message(&listing).into_iter();
        let first = chunks.next().unwrap_or_default();

        command
            .create_interaction_response(&serenity_ctx.http, |response| {
                response
                    .kind(InteractionResponseType::ChannelMessageWithSource)
                    .interaction_response_data(|message| message.content(first).ephemeral(true))
            })
            .await?;

        for chunk in chunks {
            command
                .create_followup_message(&serenity_ctx.http, |message| {
                    message.content(chunk).ephemeral(true)
                })
                .await?;
        }

        info!("Styles listing sent to user {}", command.user.id);
        Ok(())
    }
}

/// One line per style, in catalog order
pub fn format_style_listing(catalog: &StyleCatalog) -> String {
    let mut listing = format!("**Available Styles ({}):**\n", catalog.len());
    for style in catalog.styles() {
        listing.push_str(&format!("• `{}` {}\n", style.name(), style.preview()));
    }
    listing
}
