use crate::commands::context::{check_text, CommandContext};
use crate::commands::handlers::{create_all_handlers, WELCOME_MESSAGE};
use crate::commands::registry::CommandRegistry;
use crate::features::styles::PICKER_PROMPT;
use anyhow::Result;
use log::{debug, info, warn};
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::application::interaction::InteractionResponseType;
use serenity::model::channel::Message;
use serenity::prelude::Context;
use std::sync::Arc;
use uuid::Uuid;

/// What a plain message should trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageAction {
    /// Store the text and show the picker
    Style(String),
    /// Text commands are not supported; answer with the welcome text
    Welcome,
    /// Reply with why the text was rejected
    Reject(String),
    Ignore,
}

/// Decide how to answer a message. Only direct messages are styled.
pub fn classify_message(content: &str, is_dm: bool) -> MessageAction {
    if !is_dm {
        return MessageAction::Ignore;
    }

    let trimmed = content.trim();
    if trimmed.is_empty() {
        MessageAction::Ignore
    } else if trimmed.starts_with('/') {
        MessageAction::Welcome
    } else if let Some(reason) = check_text(content) {
        MessageAction::Reject(reason)
    } else {
        MessageAction::Style(content.to_string())
    }
}

#[derive(Clone)]
pub struct CommandHandler {
    registry: CommandRegistry,
    context: Arc<CommandContext>,
}

impl CommandHandler {
    pub fn new(context: Arc<CommandContext>) -> Self {
        let registry = CommandRegistry::with_handlers(create_all_handlers());
        debug!("Command registry initialized with {} commands", registry.len());
        CommandHandler { registry, context }
    }

    pub fn context(&self) -> Arc<CommandContext> {
        Arc::clone(&self.context)
    }

    pub async fn handle_message(&self, ctx: &Context, msg: &Message) -> Result<()> {
        let request_id = Uuid::new_v4();
        let user_id = msg.author.id;
        let is_dm = msg.guild_id.is_none();

        debug!("[{}] 📥 Message received | User: {} | DM: {} | Length: {}",
               request_id, user_id, is_dm, msg.content.chars().count());

        match classify_message(&msg.content, is_dm) {
            MessageAction::Style(text) => {
                info!("[{request_id}] 🎨 Showing style picker to user {user_id}");
                let components = self.context.start_picker(user_id.0, &text);
                msg.channel_id
                    .send_message(&ctx.http, |m| {
                        m.content(PICKER_PROMPT).set_components(components)
                    })
                    .await?;
            }
            MessageAction::Welcome => {
                debug!("[{request_id}] 👋 Text command in DM, sending welcome");
                msg.channel_id.say(&ctx.http, WELCOME_MESSAGE).await?;
            }
            MessageAction::Reject(reason) => {
                debug!("[{request_id}] ✋ Rejected text from {user_id}: {reason}");
                msg.channel_id.say(&ctx.http, reason).await?;
            }
            MessageAction::Ignore => {
                debug!("[{request_id}] ℹ️ Message ignored");
                return Ok(());
            }
        }

        info!("[{request_id}] ✅ Message processing completed");
        Ok(())
    }

    pub async fn handle_slash_command(&self, ctx: &Context, command: &ApplicationCommandInteraction) -> Result<()> {
        let request_id = Uuid::new_v4();
        let guild_id = command.guild_id.map(|id| id.to_string()).unwrap_or_else(|| "DM".to_string());

        info!("[{}] 📥 Slash command received | Command: {} | User: {} | Guild: {}",
              request_id, command.data.name, command.user.id, guild_id);

        match self.registry.get(&command.data.name) {
            Some(handler) => {
                handler.handle(self.context(), ctx, command).await?;
            }
            None => {
                warn!("[{}] ❓ Unknown slash command: {}", request_id, command.data.name);
                command
                    .create_interaction_response(&ctx.http, |response| {
                        response
                            .kind(InteractionResponseType::ChannelMessageWithSource)
                            .interaction_response_data(|message| {
                                message
                                    .content("Unknown command. Use `/help` to see available commands.")
                                    .ephemeral(true)
                            })
                    })
                    .await?;
            }
        }

        info!("[{request_id}] ✅ Slash command processing completed");
        Ok(())
    }
}
