//! State shared by all command executions.
//!
//! The state is built once at startup and then only read. Both fields are
//! cheap to clone:
//! - `IdentificationService` holds an `Arc` to the CardSight client
//! - `reqwest::Client` uses an `Arc` internally

use crate::service::identification::IdentificationService;

#[derive(Clone)]
pub struct BotState {
    /// Adapter for the CardSight identification API.
    pub identification: IdentificationService,

    /// HTTP client for downloading attachments from Discord's CDN.
    ///
    /// Separate from the CardSight client so downloads never carry the API key.
    pub http_client: reqwest::Client,
}

impl BotState {
    pub fn new(identification: IdentificationService, http_client: reqwest::Client) -> Self {
        Self {
            identification,
            http_client,
        }
    }
}
