use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The base URL could not be turned into a request URL.
    #[error("invalid base url {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// The request never completed; no response was received.
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("failed to read response body: {0}")]
    Read(#[source] reqwest::Error),
    /// The body matched neither the expected success shape nor the error payload.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
    /// The service answered with a non-200 status and an `{"error": ...}` body.
    #[error("service error ({status}): {message}")]
    Service { status: u16, message: String },
}

impl Error {
    /// HTTP status reported by the service, if this is a service error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Service { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        self.status() == Some(429)
    }
}
