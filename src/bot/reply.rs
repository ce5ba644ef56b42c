//! Interaction reply lifecycle.
//!
//! Discord allows exactly one initial response per interaction (a message or
//! a deferral); everything after that is an edit of the original response or
//! a follow-up message. [`Reply`] tracks which of these has happened so the
//! dispatcher can always pick a channel that is still valid:
//!
//! ```text
//! NotSent ──send──▶ Sent ──edit──▶ Edited
//!    │                │
//!    └──defer──▶ Deferred ─follow_up─▶ FollowedUp
//! ```
//!
//! [`Responder`] is the seam to Discord. [`SerenityResponder`] talks to the
//! real API; tests substitute a recording fake.

use std::sync::Arc;

use serenity::{
    all::{
        CommandInteraction, CreateEmbed, CreateInteractionResponse,
        CreateInteractionResponseFollowup, CreateInteractionResponseMessage,
        EditInteractionResponse,
    },
    async_trait,
    http::Http,
};

use crate::{error::AppError, model::message::ReplyContent};

/// Where an interaction's reply currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyState {
    /// Nothing has been sent; only an initial response is valid.
    NotSent,
    /// Acknowledged without content; the original response awaits an edit.
    Deferred,
    /// An initial response with content was sent.
    Sent,
    /// The original response was edited at least once.
    Edited,
    /// A follow-up message was sent.
    FollowedUp,
}

impl ReplyState {
    /// Whether Discord has received the initial response.
    pub fn is_acknowledged(&self) -> bool {
        !matches!(self, Self::NotSent)
    }
}

/// Discord reply operations for a single interaction.
#[async_trait]
pub trait Responder: Send + Sync {
    async fn create_response(&self, content: &ReplyContent, ephemeral: bool) -> Result<(), AppError>;

    async fn defer(&self, ephemeral: bool) -> Result<(), AppError>;

    async fn edit_response(&self, content: &ReplyContent) -> Result<(), AppError>;

    async fn create_followup(&self, content: &ReplyContent, ephemeral: bool) -> Result<(), AppError>;
}

/// Reply handle tracking the [`ReplyState`] of one interaction.
pub struct Reply<R> {
    responder: R,
    state: ReplyState,
}

impl<R: Responder> Reply<R> {
    pub fn new(responder: R) -> Self {
        Self {
            responder,
            state: ReplyState::NotSent,
        }
    }

    pub fn state(&self) -> ReplyState {
        self.state
    }

    /// Sends the initial response.
    ///
    /// # Returns
    /// - `Ok(())` - Response sent, state is `Sent`
    /// - `Err(AppError::InternalError)` - The interaction was already acknowledged
    /// - `Err(AppError::DiscordErr)` - Discord rejected the response
    pub async fn send(
        &mut self,
        content: impl Into<ReplyContent>,
        ephemeral: bool,
    ) -> Result<(), AppError> {
        self.require_state(!self.state.is_acknowledged(), "send")?;
        self.responder
            .create_response(&content.into(), ephemeral)
            .await?;
        self.state = ReplyState::Sent;
        Ok(())
    }

    /// Acknowledges the interaction without content.
    pub async fn defer(&mut self, ephemeral: bool) -> Result<(), AppError> {
        self.require_state(!self.state.is_acknowledged(), "defer")?;
        self.responder.defer(ephemeral).await?;
        self.state = ReplyState::Deferred;
        Ok(())
    }

    /// Replaces the content of the original response.
    pub async fn edit(&mut self, content: impl Into<ReplyContent>) -> Result<(), AppError> {
        self.require_state(self.state.is_acknowledged(), "edit")?;
        self.responder.edit_response(&content.into()).await?;
        self.state = ReplyState::Edited;
        Ok(())
    }

    /// Sends an additional message after the initial response.
    pub async fn follow_up(
        &mut self,
        content: impl Into<ReplyContent>,
        ephemeral: bool,
    ) -> Result<(), AppError> {
        self.require_state(self.state.is_acknowledged(), "follow up")?;
        self.responder
            .create_followup(&content.into(), ephemeral)
            .await?;
        self.state = ReplyState::FollowedUp;
        Ok(())
    }

    /// Delivers a message through whichever channel is valid right now.
    ///
    /// Initial response if nothing was sent, edit of the pending response if
    /// deferred, follow-up otherwise.
    pub async fn send_fallback(
        &mut self,
        content: impl Into<ReplyContent>,
        ephemeral: bool,
    ) -> Result<(), AppError> {
        match self.state {
            ReplyState::NotSent => self.send(content, ephemeral).await,
            ReplyState::Deferred => self.edit(content).await,
            ReplyState::Sent | ReplyState::Edited | ReplyState::FollowedUp => {
                self.follow_up(content, ephemeral).await
            }
        }
    }

    fn require_state(&self, valid: bool, operation: &str) -> Result<(), AppError> {
        if valid {
            Ok(())
        } else {
            Err(AppError::InternalError(format!(
                "Cannot {} interaction reply in state {:?}",
                operation, self.state
            )))
        }
    }
}

/// [`Responder`] backed by Serenity's HTTP client.
pub struct SerenityResponder {
    http: Arc<Http>,
    interaction: CommandInteraction,
}

impl SerenityResponder {
    pub fn new(http: Arc<Http>, interaction: CommandInteraction) -> Self {
        Self { http, interaction }
    }
}

#[async_trait]
impl Responder for SerenityResponder {
    async fn create_response(&self, content: &ReplyContent, ephemeral: bool) -> Result<(), AppError> {
        let message = match content {
            ReplyContent::Text(text) => CreateInteractionResponseMessage::new().content(text),
            ReplyContent::Embed(embed) => {
                CreateInteractionResponseMessage::new().embed(CreateEmbed::from(embed))
            }
        }
        .ephemeral(ephemeral);

        self.interaction
            .create_response(&self.http, CreateInteractionResponse::Message(message))
            .await?;

        Ok(())
    }

    async fn defer(&self, ephemeral: bool) -> Result<(), AppError> {
        let message = CreateInteractionResponseMessage::new().ephemeral(ephemeral);

        self.interaction
            .create_response(&self.http, CreateInteractionResponse::Defer(message))
            .await?;

        Ok(())
    }

    async fn edit_response(&self, content: &ReplyContent) -> Result<(), AppError> {
        // Clear whatever the previous response showed
        let edit = match content {
            ReplyContent::Text(text) => EditInteractionResponse::new()
                .content(text)
                .embeds(Vec::new()),
            ReplyContent::Embed(embed) => EditInteractionResponse::new()
                .content("")
                .embeds(vec![CreateEmbed::from(embed)]),
        };

        self.interaction.edit_response(&self.http, edit).await?;

        Ok(())
    }

    async fn create_followup(&self, content: &ReplyContent, ephemeral: bool) -> Result<(), AppError> {
        let followup = match content {
            ReplyContent::Text(text) => CreateInteractionResponseFollowup::new().content(text),
            ReplyContent::Embed(embed) => {
                CreateInteractionResponseFollowup::new().embed(CreateEmbed::from(embed))
            }
        }
        .ephemeral(ephemeral);

        self.interaction
            .create_followup(&self.http, followup)
            .await?;

        Ok(())
    }
}
