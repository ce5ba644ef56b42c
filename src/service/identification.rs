//! Identification adapter around the CardSight API.
//!
//! `IdentificationService::identify` never fails: every outcome, including
//! remote and transport errors, is folded into an [`IdentificationResult`]
//! whose `error` carries a message safe to show to users.

use std::sync::Arc;
use std::time::Instant;

use crate::{
    cardsight::{types::HealthResponse, CardIdentifier},
    error::{cardsight::CardSightError, AppError},
    model::identification::IdentificationResult,
};

const DEFAULT_MIME_TYPE: &str = "image/jpeg";
const IDENTIFY_ENDPOINT: &str = "identify";

/// Error message for a 2xx response without a truthy `success` flag.
pub const IDENTIFICATION_FAILED: &str = "Card identification failed";

/// User-facing category of a failed identification call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifyErrorKind {
    Auth,
    RateLimited,
    TooLarge,
    ServerError,
    Generic,
    Transport,
}

impl IdentifyErrorKind {
    /// Classifies a client error.
    ///
    /// Checked in priority order: authentication, 429, 413, 5xx, any other
    /// API-level failure, then transport and endpoint resolution failures.
    pub fn classify(error: &CardSightError) -> Self {
        match error {
            CardSightError::Authentication { .. } => Self::Auth,
            CardSightError::Api { status: 429, .. } => Self::RateLimited,
            CardSightError::Api { status: 413, .. } => Self::TooLarge,
            CardSightError::Api { status, .. } if *status >= 500 => Self::ServerError,
            CardSightError::Api { .. } | CardSightError::Timeout | CardSightError::Decode(_) => {
                Self::Generic
            }
            CardSightError::Transport(_) | CardSightError::InvalidUrl(_) => Self::Transport,
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Auth => "Authentication failed. Please check your API key.",
            Self::RateLimited => "Rate limit exceeded. Please try again later.",
            Self::TooLarge => "Image is too large. Please use a smaller image.",
            Self::ServerError => "CardSight service is temporarily unavailable.",
            Self::Generic => "Failed to identify card.",
            Self::Transport => "An unexpected error occurred.",
        }
    }
}

/// Service wrapping a [`CardIdentifier`] with timing, logging and error
/// classification.
#[derive(Clone)]
pub struct IdentificationService {
    identifier: Arc<dyn CardIdentifier>,
}

impl IdentificationService {
    pub fn new(identifier: Arc<dyn CardIdentifier>) -> Self {
        Self { identifier }
    }

    /// Identifies the cards in an image.
    ///
    /// # Arguments
    /// - `image` - Raw image bytes
    /// - `filename` - Sanitized filename sent along with the upload
    /// - `mime_type` - Declared MIME type, `image/jpeg` when `None`
    ///
    /// # Returns
    /// - `IdentificationResult` - Successful detections, or a failure with a
    ///   user-facing error message. `processing_time_ms` is set in both cases.
    pub async fn identify(
        &self,
        image: Vec<u8>,
        filename: &str,
        mime_type: Option<&str>,
    ) -> IdentificationResult {
        let mime_type = mime_type.unwrap_or(DEFAULT_MIME_TYPE);
        let started = Instant::now();

        let outcome = self.identifier.identify(image, filename, mime_type).await;
        let duration_ms = started.elapsed().as_millis() as u64;

        let result = match outcome {
            Ok(response) if response.success == Some(true) => IdentificationResult::success(
                response.detections.into_iter().map(Into::into).collect(),
                duration_ms,
                response.request_id,
            ),
            Ok(response) => {
                tracing::warn!(
                    request_id = response.request_id.as_deref(),
                    filename,
                    "CardSight response did not report success"
                );
                IdentificationResult::failure(IDENTIFICATION_FAILED, duration_ms, response.request_id)
            }
            Err(error) => {
                let kind = IdentifyErrorKind::classify(&error);
                tracing::error!(
                    kind = ?kind,
                    status = error.status(),
                    request_id = error.request_id(),
                    filename,
                    error = %error,
                    "CardSight identification failed"
                );
                IdentificationResult::failure(
                    kind.user_message(),
                    duration_ms,
                    error.request_id().map(str::to_string),
                )
            }
        };

        tracing::info!(
            endpoint = IDENTIFY_ENDPOINT,
            duration_ms,
            success = result.is_success(),
            detections = result.detections().len(),
            "CardSight API call"
        );

        result
    }

    /// Checks that the identification service is reachable.
    ///
    /// # Returns
    /// - `Ok(HealthResponse)` - Status reported by the API
    /// - `Err(AppError::CardSightErr)` - The API could not be reached or rejected the key
    pub async fn health(&self) -> Result<HealthResponse, AppError> {
        let health = self.identifier.health().await?;

        Ok(health)
    }
}
