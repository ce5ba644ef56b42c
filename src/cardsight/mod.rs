//! Client for the CardSight card-identification API.
//!
//! The API is consumed as an opaque remote service with two calls: identify
//! an uploaded image, and report service health. [`CardIdentifier`] is the
//! seam the rest of the bot depends on; [`client::CardSightClient`] is the
//! HTTP implementation.

pub mod client;
pub mod types;

use serenity::async_trait;

use crate::{
    cardsight::types::{HealthResponse, IdentifyResponse},
    error::cardsight::CardSightError,
};

pub use client::CardSightClient;

/// Remote card identification.
#[async_trait]
pub trait CardIdentifier: Send + Sync {
    /// Uploads an image and returns the raw identify response.
    async fn identify(
        &self,
        image: Vec<u8>,
        filename: &str,
        mime_type: &str,
    ) -> Result<IdentifyResponse, CardSightError>;

    /// Reports whether the remote service is reachable.
    async fn health(&self) -> Result<HealthResponse, CardSightError>;
}
