use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{
    cardsight::CardSightClient, config::Config, error::AppError,
    service::identification::IdentificationService, state::BotState,
};

const DEFAULT_LOG_FILTER: &str = "cardsight_bot=info,serenity=warn";

/// Attachment downloads from Discord's CDN should never take this long.
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(30);

/// Installs the global tracing subscriber.
///
/// Honours `RUST_LOG` when set, otherwise logs this crate at `info` and
/// Serenity at `warn`.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .compact(),
        )
        .init();
}

/// Builds the HTTP client used to download attachments.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Client with a request timeout
/// - `Err(AppError::ReqwestErr)` - The TLS backend could not be initialised
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .timeout(DOWNLOAD_TIMEOUT)
        .user_agent(concat!("cardsight-bot/", env!("CARGO_PKG_VERSION")))
        .build()?;

    Ok(client)
}

/// Builds the shared bot state from configuration.
///
/// # Arguments
/// - `config` - Application configuration holding the CardSight settings
///
/// # Returns
/// - `Ok(BotState)` - CardSight service and download client
/// - `Err(AppError)` - Either HTTP client failed to build
pub fn build_state(config: &Config) -> Result<BotState, AppError> {
    let cardsight = CardSightClient::new(config)?;
    let identification = IdentificationService::new(Arc::new(cardsight));

    Ok(BotState::new(identification, setup_reqwest_client()?))
}
