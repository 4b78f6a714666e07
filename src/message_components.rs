use anyhow::Result;
use log::{debug, info, warn};
use serenity::builder::CreateComponents;
use serenity::model::application::interaction::message_component::MessageComponentInteraction;
use serenity::model::application::interaction::InteractionResponseType;
use serenity::prelude::Context;
use std::sync::Arc;
use uuid::Uuid;

use crate::commands::context::{CommandContext, SelectionOutcome, NO_SESSION_MESSAGE};
use crate::features::styles::{parse_page_id, PAGE_PREFIX, PICKER_PROMPT, STYLE_SELECT_ID};

pub const UNKNOWN_COMPONENT_MESSAGE: &str = "Unknown component interaction.";

/// Where a component interaction is dispatched to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentRoute {
    /// Navigation or "Back to Styles" button
    Page(usize),
    /// A style was chosen in the select menu
    SelectStyle,
    Unknown,
}

pub fn route_component(custom_id: &str) -> ComponentRoute {
    match custom_id {
        STYLE_SELECT_ID => ComponentRoute::SelectStyle,
        id if id.starts_with(PAGE_PREFIX) => match parse_page_id(id) {
            Some(page) => ComponentRoute::Page(page),
            None => ComponentRoute::Unknown,
        },
        _ => ComponentRoute::Unknown,
    }
}

/// Handler for all message component interactions
pub struct MessageComponentHandler {
    context: Arc<CommandContext>,
}

impl MessageComponentHandler {
    pub fn new(context: Arc<CommandContext>) -> Self {
        Self { context }
    }

    /// Handle all types of component interactions
    pub async fn handle_component_interaction(&self, ctx: &Context, interaction: &MessageComponentInteraction) -> Result<()> {
        let request_id = Uuid::new_v4();
        let custom_id = &interaction.data.custom_id;

        info!("[{}] Processing component interaction: {} from user: {}",
              request_id, custom_id, interaction.user.id);

        match route_component(custom_id) {
            ComponentRoute::Page(page) => {
                self.handle_page(ctx, interaction, page, request_id).await?;
            }
            ComponentRoute::SelectStyle => {
                self.handle_style_select(ctx, interaction, request_id).await?;
            }
            ComponentRoute::Unknown => {
                warn!("[{request_id}] ❓ Unknown component: {custom_id}");
                interaction
                    .create_interaction_response(&ctx.http, |response| {
                        response
                            .kind(InteractionResponseType::ChannelMessageWithSource)
                            .interaction_response_data(|message| {
                                message.content(UNKNOWN_COMPONENT_MESSAGE).ephemeral(true)
                            })
                    })
                    .await?;
            }
        }

        Ok(())
    }

    /// Show picker page `page` in place of the current message
    async fn handle_page(
        &self,
        ctx: &Context,
        interaction: &MessageComponentInteraction,
        page: usize,
        request_id: Uuid,
    ) -> Result<()> {
        let Some(request) = self.context.turn_page(interaction.user.id.0, page) else {
            debug!("[{request_id}] No session for user {}", interaction.user.id);
            return self.update_message(ctx, interaction, NO_SESSION_MESSAGE, CreateComponents::default()).await;
        };

        debug!("[{}] Page {} requested, showing page {}", request_id, page, request.page);
        let components = self.context.picker(&request.text, request.page);
        self.update_message(ctx, interaction, PICKER_PROMPT, components).await
    }

    async fn handle_style_select(
        &self,
        ctx: &Context,
        interaction: &MessageComponentInteraction,
        request_id: Uuid,
    ) -> Result<()> {
        let style_name = interaction.data.values.first().map(String::as_str).unwrap_or_default();
        debug!("[{request_id}] Style selected: '{style_name}'");

        match self.context.select_style(interaction.user.id.0, style_name) {
            SelectionOutcome::Styled { message, page } => {
                let components = self.context.back_to_styles(page);
                self.update_message(ctx, interaction, &message, components).await?;
                info!("[{request_id}] ✅ Rendered '{style_name}' for user {}", interaction.user.id);
            }
            SelectionOutcome::UnknownStyle(message) => {
                warn!("[{request_id}] Unknown style requested: '{style_name}'");
                interaction
                    .create_interaction_response(&ctx.http, |response| {
                        response
                            .kind(InteractionResponseType::ChannelMessageWithSource)
                            .interaction_response_data(|msg| msg.content(message).ephemeral(true))
                    })
                    .await?;
            }
            SelectionOutcome::NoSession => {
                self.update_message(ctx, interaction, NO_SESSION_MESSAGE, CreateComponents::default()).await?;
            }
        }

        Ok(())
    }

    async fn update_message(
        &self,
        ctx: &Context,
        interaction: &MessageComponentInteraction,
        content: &str,
        components: CreateComponents,
    ) -> Result<()> {
        interaction
            .create_interaction_response(&ctx.http, |response| {
                response
                    .kind(InteractionResponseType::UpdateMessage)
                    .interaction_response_data(|msg| msg.content(content).set_components(components))
            })
            .await?;
        Ok(())
    }
}
