//! Domain models shared between the bot, the services and the CardSight client.

pub mod attachment;
pub mod identification;
pub mod message;
