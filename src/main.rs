// This is the entry point of the Discord bot.
//
// **Architecture Overview:**
// - `core/` = Business logic (platform-agnostic)
// - `infra/` = Implementations of core traits (config store, health server)
// - `discord/` = Discord-specific adapters (commands, events)
//
// This file's job is to:
// 1. Load configuration
// 2. Initialize services (dependency injection)
// 3. Set up the Discord framework
// 4. Register commands and event handlers

// These attrs point each module declaration at a more descriptive root file
// so we don't end up with half a dozen mod.rs files that all look the same.
#[path = "core/core_layer.rs"]
mod core;
#[path = "discord/discord_layer.rs"]
mod discord;
#[path = "infra/infra_layer.rs"]
mod infra;

use crate::core::config::{AppSettings, BotConfig, ConfigService};
use crate::core::logging::LoggingService;
use crate::discord::commands::presence;
use crate::discord::logging::events as logging_events;
use crate::discord::roles::role_menu;
use crate::discord::{Data, Error};
use crate::infra::config::InMemoryConfigStore;
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Event handler for non-command Discord events.
/// Every branch logs its own failure so one bad event never affects another.
async fn event_handler(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    data: &Data,
) -> Result<(), Error> {
    match event {
        serenity::FullEvent::Message { new_message } => {
            logging_events::remember_message(data, new_message);
        }
        serenity::FullEvent::GuildMemberAddition { new_member } => {
            if let Err(e) = logging_events::handle_member_join(ctx, data, new_member).await {
                tracing::error!("Error assigning auto-roles: {}", e);
            }
        }
        serenity::FullEvent::MessageDelete {
            channel_id,
            deleted_message_id,
            guild_id,
        } => {
            if let Err(e) = logging_events::handle_message_delete(
                ctx,
                data,
                *channel_id,
                *deleted_message_id,
                *guild_id,
            )
            .await
            {
                tracing::error!("Error handling message delete: {}", e);
            }
        }
        serenity::FullEvent::MessageUpdate {
            old_if_available,
            event,
            ..
        } => {
            if let Err(e) =
                logging_events::handle_message_update(ctx, data, old_if_available.as_ref(), event)
                    .await
            {
                tracing::error!("Error handling message update: {}", e);
            }
        }
        serenity::FullEvent::VoiceStateUpdate { old, new } => {
            if let Err(e) =
                logging_events::handle_voice_state_update(ctx, data, old.as_ref(), new).await
            {
                tracing::error!("Error handling voice state update: {}", e);
            }
        }
        serenity::FullEvent::GuildMemberUpdate {
            old_if_available,
            event,
            ..
        } => {
            if let Err(e) =
                logging_events::handle_member_update(ctx, data, old_if_available.as_ref(), event)
                    .await
            {
                tracing::error!("Error handling member update: {}", e);
            }
        }
        serenity::FullEvent::InteractionCreate {
            interaction: serenity::Interaction::Component(component),
        } if role_menu::is_role_menu(component) => {
            if let Err(e) = role_menu::handle_role_menu(ctx, component).await {
                tracing::error!("Error handling role menu selection: {}", e);
            }
        }

        _ => {}
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file (if it exists)
    dotenv::dotenv().ok();

    // Initialize logging so we can see what's happening
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = AppSettings::from_env().expect("Invalid environment configuration");

    // The health endpoint shares nothing with the bot, so it gets its own task.
    let health_port = settings.health_port;
    tokio::spawn(async move {
        if let Err(e) = infra::health::serve(health_port).await {
            tracing::error!("Health server stopped: {}", e);
        }
    });

    // ========================================================================
    // DEPENDENCY INJECTION
    // ========================================================================
    // This is the "composition root" where we wire everything together.

    let config_service = Arc::new(ConfigService::new(InMemoryConfigStore::new(
        BotConfig::default(),
    )));
    let logging_service = Arc::new(LoggingService::new());

    let data = Data {
        config: Arc::clone(&config_service),
        logging: Arc::clone(&logging_service),
    };

    // ========================================================================
    // DISCORD FRAMEWORK SETUP
    // ========================================================================

    let intents = serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT // Required to read message content
        | serenity::GatewayIntents::GUILDS
        | serenity::GatewayIntents::GUILD_MEMBERS
        | serenity::GatewayIntents::GUILD_VOICE_STATES;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![
                discord::commands::embed::embed(),
                discord::commands::reaction_roles::reactionroles(),
                discord::commands::settings::setlogchannel(),
                discord::commands::settings::setautoroles(),
                discord::commands::settings::botconfig(),
            ],
            event_handler: |ctx, event, framework, data| {
                Box::pin(event_handler(ctx, event, framework, data))
            },
            ..Default::default()
        })
        .setup(|ctx, ready, framework| {
            Box::pin(async move {
                println!("✅ Bot is online as {}", ready.user.name);

                // Role menus need no registration: interactions are matched by
                // custom id in the event handler, so old posts keep working.
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                println!(
                    "✅ Synced {} slash commands",
                    framework.options().commands.len()
                );

                presence::on_ready(ctx);
                Ok(data)
            })
        })
        .build();

    // Create the client and start the bot
    let mut cache_settings = serenity::cache::Settings::default();
    cache_settings.max_messages = 10000;

    let mut client = serenity::ClientBuilder::new(settings.discord_token, intents)
        .framework(framework)
        .cache_settings(cache_settings)
        .await
        .expect("Error creating client");

    client.start().await.expect("Error running bot");
}
