//! Discord bot integration for trading card identification.
//!
//! The bot registers the `/identify` slash command and answers it by
//! forwarding the uploaded image to the CardSight API. Serenity runs each
//! gateway event on its own task; the only state shared between them is the
//! read-only [`Dispatcher`](dispatch::Dispatcher).
//!
//! # Gateway Intents
//!
//! Slash commands arrive as interactions, which need no intent at all. The bot
//! requests only `GUILDS` so Discord lists it as present in its servers.

pub mod command;
pub mod dispatch;
pub mod handler;
pub mod reply;
pub mod start;
