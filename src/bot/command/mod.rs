//! Slash commands and the registry they are looked up in.
//!
//! Commands form a closed set ([`BotCommand`]); the [`CommandRegistry`] maps
//! the names Discord sends back to them. The registry is filled once at
//! startup and only read afterwards.

pub mod identify;

use std::collections::HashMap;

use serenity::all::{CommandInteraction, CreateCommand, ResolvedValue};

use crate::{
    bot::reply::{Reply, Responder},
    error::AppError,
    model::attachment::ImageAttachment,
    state::BotState,
};

/// Every command the bot knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BotCommand {
    Identify,
}

impl BotCommand {
    pub const ALL: [BotCommand; 1] = [BotCommand::Identify];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Identify => identify::NAME,
        }
    }

    /// Schema published to Discord at startup.
    pub fn schema(&self) -> CreateCommand {
        match self {
            Self::Identify => identify::schema(),
        }
    }

    pub async fn execute<R: Responder>(
        &self,
        state: &BotState,
        invocation: &CommandInvocation,
        reply: &mut Reply<R>,
    ) -> Result<(), AppError> {
        match self {
            Self::Identify => identify::execute(state, invocation, reply).await,
        }
    }
}

/// Name-to-command lookup table.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    commands: HashMap<&'static str, BotCommand>,
}

impl CommandRegistry {
    /// Creates a registry holding every [`BotCommand`].
    pub fn new() -> Self {
        let mut registry = Self::default();
        for command in BotCommand::ALL {
            registry.register(command);
        }
        registry
    }

    pub fn register(&mut self, command: BotCommand) {
        self.commands.insert(command.name(), command);
    }

    pub fn get(&self, name: &str) -> Option<BotCommand> {
        self.commands.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Schemas of all registered commands, ordered by name.
    pub fn schemas(&self) -> Vec<CreateCommand> {
        let mut names: Vec<&&'static str> = self.commands.keys().collect();
        names.sort();

        names
            .into_iter()
            .filter_map(|name| self.commands.get(*name))
            .map(BotCommand::schema)
            .collect()
    }
}

/// Command invocation extracted from a Discord interaction.
///
/// Decouples command handling from Serenity's interaction type so commands
/// can be exercised without a gateway connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    pub name: String,
    pub user_id: u64,
    attachments: Vec<(String, ImageAttachment)>,
}

impl CommandInvocation {
    pub fn new(name: impl Into<String>, user_id: u64) -> Self {
        Self {
            name: name.into(),
            user_id,
            attachments: Vec::new(),
        }
    }

    pub fn with_attachment(mut self, option: impl Into<String>, attachment: ImageAttachment) -> Self {
        self.attachments.push((option.into(), attachment));
        self
    }

    /// Attachment supplied for the named option.
    pub fn attachment(&self, option: &str) -> Option<&ImageAttachment> {
        self.attachments
            .iter()
            .find(|(name, _)| name == option)
            .map(|(_, attachment)| attachment)
    }

    pub fn from_interaction(interaction: &CommandInteraction) -> Self {
        let mut invocation = Self::new(interaction.data.name.clone(), interaction.user.id.get());

        for option in interaction.data.options() {
            if let ResolvedValue::Attachment(attachment) = option.value {
                invocation = invocation.with_attachment(option.name, ImageAttachment::from(attachment));
            }
        }

        invocation
    }
}
