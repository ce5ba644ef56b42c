//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway. The handler:
//! - Logs connection information
//! - Sets the bot's activity
//! - Checks that the CardSight API is reachable
//! - Publishes the slash command schemas
//!
//! None of these steps are fatal. A failed health check only warns, since the
//! API may recover before the first command arrives, and a failed registration
//! leaves the previously published commands in place.

use serenity::all::{ActivityData, Command, Context, GuildId, Ready};
use serenity::http::Http;

use crate::{
    bot::{command::CommandRegistry, dispatch::Dispatcher},
    error::AppError,
    service::identification::IdentificationService,
};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `dispatcher` - Dispatcher holding the command registry and CardSight service
/// - `guild_id` - Guild to register commands in, or `None` for global commands
/// - `ctx` - Discord context for setting activity status and HTTP calls
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(
    dispatcher: &Dispatcher,
    guild_id: Option<GuildId>,
    ctx: Context,
    ready: Ready,
) {
    tracing::info!(
        guilds = ready.guilds.len(),
        "{} is connected to Discord",
        ready.user.name
    );

    ctx.set_activity(Some(ActivityData::watching("/identify")));

    check_cardsight_health(&dispatcher.state().identification).await;

    match register_commands(&ctx.http, dispatcher.registry(), guild_id).await {
        Ok(count) => tracing::info!(
            count,
            guild_id = guild_id.map(|id| id.get()),
            "Registered slash commands"
        ),
        Err(e) => tracing::error!("Failed to register slash commands: {}", e),
    }
}

/// Calls the CardSight health endpoint.
///
/// # Returns
/// - `true` - The API answered the health check
/// - `false` - The call failed; a warning has been logged
pub async fn check_cardsight_health(identification: &IdentificationService) -> bool {
    match identification.health().await {
        Ok(health) => {
            tracing::info!(status = %health.status, "CardSight API is reachable");
            true
        }
        Err(e) => {
            tracing::warn!("CardSight health check failed: {}", e);
            false
        }
    }
}

/// Publishes every registered command schema.
///
/// Guild commands replace the guild's command set and update immediately;
/// global commands replace the application's command set.
///
/// # Returns
/// - `Ok(usize)` - Number of commands Discord now has registered
/// - `Err(AppError::DiscordErr)` - Discord rejected the registration
pub async fn register_commands(
    http: &Http,
    registry: &CommandRegistry,
    guild_id: Option<GuildId>,
) -> Result<usize, AppError> {
    let schemas = registry.schemas();

    let commands = match guild_id {
        Some(guild_id) => guild_id.set_commands(http, schemas).await?,
        None => Command::set_global_commands(http, schemas).await?,
    };

    Ok(commands.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::{error::cardsight::CardSightError, service::test::ScriptedIdentifier};

    /// Tests a reachable CardSight API.
    ///
    /// Expected: health check passes
    #[tokio::test]
    async fn reports_reachable_api() {
        let service = IdentificationService::new(Arc::new(ScriptedIdentifier::unused()));

        assert!(check_cardsight_health(&service).await);
    }

    /// Tests that a failing health check is reported without panicking.
    ///
    /// Expected: health check fails
    #[tokio::test]
    async fn reports_unreachable_api() {
        let service = IdentificationService::new(Arc::new(
            ScriptedIdentifier::unused().with_failing_health(CardSightError::Timeout),
        ));

        assert!(!check_cardsight_health(&service).await);
    }
}
