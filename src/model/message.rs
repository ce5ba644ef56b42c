//! Outgoing message payloads.
//!
//! The response formatter produces these plain values instead of Serenity
//! builders so the output can be compared in tests. They are converted into
//! `CreateEmbed` only when a reply is sent.

use serenity::all::{CreateEmbed, CreateEmbedFooter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmbedMessage {
    pub title: String,
    pub description: Option<String>,
    pub color: u32,
    pub fields: Vec<EmbedField>,
    pub footer: Option<String>,
    pub thumbnail_url: Option<String>,
}

impl EmbedMessage {
    pub fn new(title: impl Into<String>, color: u32) -> Self {
        Self {
            title: title.into(),
            color,
            ..Default::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(url.into());
        self
    }
}

impl From<&EmbedMessage> for CreateEmbed {
    fn from(message: &EmbedMessage) -> Self {
        let mut embed = CreateEmbed::new()
            .title(&message.title)
            .color(message.color);

        if let Some(description) = &message.description {
            embed = embed.description(description);
        }

        for field in &message.fields {
            embed = embed.field(&field.name, &field.value, field.inline);
        }

        if let Some(footer) = &message.footer {
            embed = embed.footer(CreateEmbedFooter::new(footer));
        }

        if let Some(url) = &message.thumbnail_url {
            embed = embed.thumbnail(url);
        }

        embed
    }
}

/// Body of a reply sent to an interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyContent {
    Text(String),
    Embed(EmbedMessage),
}

impl From<EmbedMessage> for ReplyContent {
    fn from(message: EmbedMessage) -> Self {
        Self::Embed(message)
    }
}

impl From<&str> for ReplyContent {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}
