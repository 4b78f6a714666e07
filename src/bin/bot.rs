use anyhow::Result;
use dotenvy::dotenv;
use log::{debug, error, info};
use serenity::async_trait;
use serenity::model::application::interaction::{Interaction, InteractionResponseType};
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::model::id::GuildId;
use serenity::prelude::*;
use std::sync::Arc;
use std::time::Duration;

use stylish::commands::{
    register_global_commands, register_guild_commands, CommandContext, CommandHandler,
};
use stylish::core::Config;
use stylish::features::get_bot_version;
use stylish::features::sessions::SessionStore;
use stylish::features::styles::StyleCatalog;
use stylish::message_components::MessageComponentHandler;

const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

struct Handler {
    command_handler: Arc<CommandHandler>,
    component_handler: Arc<MessageComponentHandler>,
    guild_id: Option<GuildId>,
}

impl Handler {
    fn new(context: Arc<CommandContext>, guild_id: Option<GuildId>) -> Self {
        Handler {
            command_handler: Arc::new(CommandHandler::new(Arc::clone(&context))),
            component_handler: Arc::new(MessageComponentHandler::new(context)),
            guild_id,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }

        if let Err(e) = self.command_handler.handle_message(&ctx, &msg).await {
            error!("Error handling message: {e}");
            if let Err(why) = msg
                .channel_id
                .say(
                    &ctx.http,
                    "❌ Sorry, I encountered an error processing your message.",
                )
                .await
            {
                error!("Failed to send error message: {why}");
            }
        }
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("🎉 {} is connected and ready!", ready.user.name);
        info!("📡 Connected to {} guilds", ready.guilds.len());
        info!("🤖 Bot ID: {}", ready.user.id);

        // Register slash commands - use guild commands for development (instant), global for production
        if let Some(guild_id) = self.guild_id {
            info!("🔧 Development mode: Registering commands for guild {guild_id}");
            if let Err(e) = register_guild_commands(&ctx, guild_id).await {
                error!("❌ Failed to register guild slash commands: {e}");
            }
        } else {
            info!("🌍 Production mode: Registering commands globally");
            if let Err(e) = register_global_commands(&ctx).await {
                error!("❌ Failed to register global slash commands: {e}");
            }
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        match interaction {
            Interaction::ApplicationCommand(command) => {
                if let Err(e) = self
                    .command_handler
                    .handle_slash_command(&ctx, &command)
                    .await
                {
                    error!(
                        "Error handling slash command '{}': {}",
                        command.data.name, e
                    );

                    let error_message =
                        "❌ Sorry, I encountered an error processing your command. Please try again.";

                    // The handler may already have responded; follow up in that case
                    #[allow(clippy::redundant_pattern_matching)]
                    if let Err(_) = command
                        .create_interaction_response(&ctx.http, |response| {
                            response
                                .kind(InteractionResponseType::ChannelMessageWithSource)
                                .interaction_response_data(|message| {
                                    message.content(error_message).ephemeral(true)
                                })
                        })
                        .await
                    {
                        let _ = command
                            .create_followup_message(&ctx.http, |message| {
                                message.content(error_message).ephemeral(true)
                            })
                            .await;
                    }
                }
            }
            Interaction::MessageComponent(component) => {
                if let Err(e) = self
                    .component_handler
                    .handle_component_interaction(&ctx, &component)
                    .await
                {
                    error!(
                        "Error handling component interaction '{}': {}",
                        component.data.custom_id, e
                    );

                    let error_message = "❌ Sorry, I encountered an error processing your interaction. Please try again.";

                    // Try to update the message, fallback to new response if that fails
                    #[allow(clippy::redundant_pattern_matching)]
                    if let Err(_) = component
                        .create_interaction_response(&ctx.http, |response| {
                            response
                                .kind(InteractionResponseType::UpdateMessage)
                                .interaction_response_data(|message| message.content(error_message))
                        })
                        .await
                    {
                        let _ = component
                            .create_interaction_response(&ctx.http, |response| {
                                response
                                    .kind(InteractionResponseType::ChannelMessageWithSource)
                                    .interaction_response_data(|message| {
                                        message.content(error_message).ephemeral(true)
                                    })
                            })
                            .await;
                    }
                }
            }
            _ => {}
        }
    }
}

/// Only DMs are styled, and DM content needs no privileged intent
fn gateway_intents() -> GatewayIntents {
    GatewayIntents::GUILDS | GatewayIntents::DIRECT_MESSAGES
}

fn load_catalog(config: &Config) -> Result<StyleCatalog> {
    let catalog = match &config.style_sets_path {
        Some(path) => {
            info!("📚 Loading style sets from {path}");
            StyleCatalog::load(path)
                .map_err(|e| anyhow::anyhow!("Failed to load style sets from {}: {}", path, e))?
        }
        None => StyleCatalog::embedded()
            .map_err(|e| anyhow::anyhow!("Embedded style sets are invalid: {}", e))?,
    };
    info!("📚 {} styles available", catalog.len());
    Ok(catalog)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting Stylish Text Generator Bot v{}...", get_bot_version());

    let catalog = Arc::new(load_catalog(&config)?);
    let sessions = Arc::new(SessionStore::new(config.session_capacity, config.session_ttl));
    info!(
        "👥 Session store: capacity {}, idle timeout {:?}",
        sessions.capacity(),
        config.session_ttl
    );
    let context = Arc::new(CommandContext::new(
        catalog,
        Arc::clone(&sessions),
        config.styles_per_page,
    ));

    // Drop sessions nobody has touched within the TTL
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SESSION_SWEEP_INTERVAL);
        loop {
            interval.tick().await;
            let removed = sessions.sweep_expired();
            debug!(
                "🧹 Session sweep removed {} expired, {} active",
                removed,
                sessions.len()
            );
        }
    });

    // Parse guild ID if provided for development mode
    let guild_id = match &config.discord_guild_id {
        Some(id) => Some(GuildId(id.parse::<u64>().map_err(|e| {
            anyhow::anyhow!("DISCORD_GUILD_ID is not a valid id '{}': {}", id, e)
        })?)),
        None => None,
    };

    let handler = Handler::new(context, guild_id);

    let intents = gateway_intents();

    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await
        .map_err(|e| {
            error!("Failed to create Discord client: {e}");
            anyhow::anyhow!("Client creation failed: {}", e)
        })?;

    info!("Bot configured successfully. Connecting to Discord gateway...");
    info!("Gateway intents: {intents:?}");

    if let Err(why) = client.start().await {
        error!("Gateway connection failed: {why:?}");
        return Err(anyhow::anyhow!(
            "Failed to establish gateway connection: {}",
            why
        ));
    }

    Ok(())
}
