use std::sync::Arc;

use serenity::all::{Context, EventHandler, GuildId, Interaction, Ready};
use serenity::async_trait;

use crate::bot::dispatch::Dispatcher;

pub mod interaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub dispatcher: Arc<Dispatcher>,
    /// Guild to register commands in; global registration when `None`.
    pub guild_id: Option<GuildId>,
}

impl Handler {
    pub fn new(dispatcher: Arc<Dispatcher>, guild_id: Option<GuildId>) -> Self {
        Self {
            dispatcher,
            guild_id,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.dispatcher, self.guild_id, ctx, ready).await;
    }

    /// Called for slash commands, autocomplete, and component interactions
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(&self.dispatcher, ctx, interaction).await;
    }
}
