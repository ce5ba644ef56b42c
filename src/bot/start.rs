use std::sync::Arc;

use serenity::all::{ApplicationId, Client, GatewayIntents, GuildId};

use crate::{
    bot::{dispatch::Dispatcher, handler::Handler},
    config::Config,
    error::AppError,
};

/// Builds the Discord client without connecting.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token and ids
/// - `dispatcher` - Dispatcher that answers slash commands
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started with [`start_bot`]
/// - `Err(AppError::DiscordErr)` - The token was rejected or the client could not be built
pub async fn init_bot(config: &Config, dispatcher: Dispatcher) -> Result<Client, AppError> {
    let intents = GatewayIntents::GUILDS;

    let handler = Handler::new(
        Arc::new(dispatcher),
        config.discord_guild_id.map(GuildId::new),
    );

    let client = Client::builder(&config.discord_bot_token, intents)
        .application_id(ApplicationId::new(config.discord_application_id))
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Runs the bot until it is shut down.
///
/// Ctrl-C stops every shard, after which `client.start()` returns.
///
/// # Returns
/// - `Ok(())` - The bot shut down cleanly
/// - `Err(AppError::DiscordErr)` - The gateway connection failed
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    let shard_manager = client.shard_manager.clone();

    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("Received Ctrl-C, shutting down");
                shard_manager.shutdown_all().await;
            }
            Err(e) => tracing::error!("Failed to listen for Ctrl-C: {}", e),
        }
    });

    tracing::info!("Starting Discord bot...");

    client.start().await?;

    tracing::info!("Discord bot stopped");

    Ok(())
}
