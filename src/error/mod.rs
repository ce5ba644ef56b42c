//! Error types for the bot.
//!
//! `AppError` is the top-level error returned from startup and from command
//! executors. Command executors never show its message to users; the
//! dispatcher logs it and renders a generic reply instead. Remote API failures
//! have their own `CardSightError` type so the identification adapter can
//! classify them into user-facing messages.

pub mod cardsight;
pub mod config;

use thiserror::Error;

use crate::error::{cardsight::CardSightError, config::ConfigError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the bot. Most variants
/// use `#[from]` for automatic conversion with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Fatal at startup as the bot cannot connect without its secrets.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// CardSight API error outside of the identification adapter, e.g. the
    /// startup health check.
    #[error(transparent)]
    CardSightErr(#[from] CardSightError),

    /// HTTP client request error from reqwest.
    ///
    /// Raised when downloading an attachment fails or returns a non-success
    /// status.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Internal error with custom message.
    ///
    /// # Fields
    /// - Detailed error message for logging
    #[error("{0}")]
    InternalError(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
