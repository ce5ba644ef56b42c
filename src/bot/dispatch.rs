//! Routes command invocations to their command.
//!
//! The dispatcher owns the command registry and the shared bot state. Every
//! invocation ends with some reply to the user: unknown commands get a private
//! notice, and a command that returns an error gets a generic error message
//! through whichever reply channel is still valid. Nothing is propagated to
//! Serenity's event loop.

use std::time::Instant;

use crate::{
    bot::{
        command::{CommandInvocation, CommandRegistry},
        reply::{Reply, ReplyState, Responder},
    },
    service::format,
    state::BotState,
};

pub const UNKNOWN_COMMAND: &str = "Unknown command.";

pub struct Dispatcher {
    registry: CommandRegistry,
    state: BotState,
}

impl Dispatcher {
    pub fn new(registry: CommandRegistry, state: BotState) -> Self {
        Self { registry, state }
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn state(&self) -> &BotState {
        &self.state
    }

    /// Executes an invocation and replies through `responder`.
    ///
    /// # Arguments
    /// - `invocation` - Command name and options extracted from the interaction
    /// - `responder` - Reply channel for this interaction
    ///
    /// # Returns
    /// - `ReplyState` - Where the interaction's reply ended up
    pub async fn dispatch<R: Responder>(
        &self,
        invocation: &CommandInvocation,
        responder: R,
    ) -> ReplyState {
        let mut reply = Reply::new(responder);

        let Some(command) = self.registry.get(&invocation.name) else {
            tracing::warn!(
                command = %invocation.name,
                user_id = invocation.user_id,
                "Received unknown command"
            );
            if let Err(e) = reply.send(UNKNOWN_COMMAND, true).await {
                tracing::error!("Failed to reply to unknown command: {}", e);
            }
            return reply.state();
        };

        tracing::info!(
            command = command.name(),
            user_id = invocation.user_id,
            "Executing command"
        );
        let started = Instant::now();

        match command.execute(&self.state, invocation, &mut reply).await {
            Ok(()) => {
                tracing::info!(
                    command = command.name(),
                    user_id = invocation.user_id,
                    duration_ms = started.elapsed().as_millis() as u64,
                    "Command completed"
                );
            }
            Err(e) => {
                tracing::error!(
                    command = command.name(),
                    user_id = invocation.user_id,
                    reply_state = ?reply.state(),
                    error = %e,
                    "Command failed"
                );
                if let Err(e) = reply.send_fallback(format::format_command_error(), true).await {
                    tracing::error!("Failed to deliver command error reply: {}", e);
                }
            }
        }

        reply.state()
    }
}

#[cfg(test)]
mod test;
