use reqwest::{
    multipart::{Form, Part},
    RequestBuilder, StatusCode,
};
use serde::de::DeserializeOwned;
use serenity::async_trait;
use url::Url;

use crate::{
    cardsight::{
        types::{ErrorBody, HealthResponse, IdentifyResponse},
        CardIdentifier,
    },
    config::Config,
    error::{cardsight::CardSightError, AppError},
};

const IDENTIFY_PATH: &str = "v1/identify/card";
const HEALTH_PATH: &str = "health";
const API_KEY_HEADER: &str = "x-api-key";
const REQUEST_ID_HEADER: &str = "x-request-id";

/// HTTP client for the CardSight API.
///
/// Cheap to clone; the underlying `reqwest::Client` shares its connection pool.
#[derive(Clone)]
pub struct CardSightClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl CardSightClient {
    /// Creates a client from the bot configuration.
    ///
    /// The configured timeout applies to every request made by this client.
    ///
    /// # Returns
    /// - `Ok(CardSightClient)` - Client ready for requests
    /// - `Err(AppError::ReqwestErr)` - The HTTP client could not be built
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(config.cardsight_timeout)
            .build()?;

        Ok(Self::with_http_client(
            http,
            config.cardsight_base_url.clone(),
            config.cardsight_api_key.clone(),
        ))
    }

    /// Creates a client around an existing `reqwest::Client`.
    pub fn with_http_client(http: reqwest::Client, mut base_url: Url, api_key: String) -> Self {
        // Url::join replaces the last segment unless the base ends with a slash
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Self {
            http,
            base_url,
            api_key,
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, CardSightError> {
        self.base_url.join(path).map_err(CardSightError::InvalidUrl)
    }

    /// Sends a request and decodes the JSON body.
    ///
    /// Returns the decoded body together with the `x-request-id` header, if
    /// any. Non-success statuses are turned into `CardSightError`s using the
    /// API's error body when it can be read.
    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<(T, Option<String>), CardSightError> {
        let response = request
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        let status = response.status();
        let header_request_id = response
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?;

        if status.is_success() {
            let decoded = serde_json::from_slice(&body).map_err(CardSightError::Decode)?;
            return Ok((decoded, header_request_id));
        }

        let error_body: ErrorBody = serde_json::from_slice(&body).unwrap_or_default();
        let message = error_body
            .message
            .or(error_body.error)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            });

        let request_id = error_body.request_id.or(header_request_id);

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(CardSightError::Authentication {
                    message,
                    request_id,
                })
            }
            _ => Err(CardSightError::Api {
                status: status.as_u16(),
                message,
                request_id,
            }),
        }
    }
}

#[async_trait]
impl CardIdentifier for CardSightClient {
    async fn identify(
        &self,
        image: Vec<u8>,
        filename: &str,
        mime_type: &str,
    ) -> Result<IdentifyResponse, CardSightError> {
        let part = Part::bytes(image)
            .file_name(filename.to_string())
            .mime_str(mime_type)?;
        let form = Form::new().part("image", part);

        let request = self.http.post(self.endpoint(IDENTIFY_PATH)?).multipart(form);
        let (mut response, header_request_id): (IdentifyResponse, _) = self.send(request).await?;

        if response.request_id.is_none() {
            response.request_id = header_request_id;
        }

        Ok(response)
    }

    async fn health(&self) -> Result<HealthResponse, CardSightError> {
        let request = self.http.get(self.endpoint(HEALTH_PATH)?);
        let (response, _) = self.send(request).await?;

        Ok(response)
    }
}
