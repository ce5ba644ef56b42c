use thiserror::Error;

/// Errors raised by the CardSight HTTP client.
///
/// The variants mirror what the remote API can tell us apart: a rejected API
/// key, a non-success HTTP status, a request that ran out of time, a body we
/// could not decode, and everything that failed below HTTP. `InvalidUrl` is
/// the only variant raised before a request is sent.
#[derive(Error, Debug)]
pub enum CardSightError {
    /// The API rejected the configured key (HTTP 401 or 403).
    #[error("CardSight authentication failed: {message}")]
    Authentication {
        /// Message returned by the API, or the status text
        message: String,
        /// Correlation id from the body or the `x-request-id` header
        request_id: Option<String>,
    },

    /// The API answered with a non-success status other than an auth failure.
    #[error("CardSight API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message returned by the API, or the status text
        message: String,
        /// Correlation id from the body or the `x-request-id` header
        request_id: Option<String>,
    },

    /// The request exceeded the configured client timeout.
    #[error("CardSight request timed out")]
    Timeout,

    /// The API answered with a success status but an unreadable body.
    #[error("Failed to decode CardSight response: {0}")]
    Decode(#[source] serde_json::Error),

    /// An endpoint could not be resolved against the configured base URL.
    #[error("Invalid CardSight endpoint URL: {0}")]
    InvalidUrl(#[source] url::ParseError),

    /// Connection, TLS or other transport-level failure.
    #[error(transparent)]
    Transport(reqwest::Error),
}

impl CardSightError {
    /// HTTP status associated with the error, if the API answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Correlation id associated with the error, if the API supplied one.
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Api { request_id, .. } | Self::Authentication { request_id, .. } => {
                request_id.as_deref()
            }
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CardSightError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Transport(err)
        }
    }
}
