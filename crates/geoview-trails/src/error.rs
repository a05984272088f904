use geoview_core::FailureKind;
use thiserror::Error;

/// Errors returned by the trail directory adapters.
#[derive(Debug, Error)]
pub enum TrailError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The directory answered with a non-2xx status.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// No API key was configured, so the request was never sent.
    #[error("trail API key is not configured")]
    MissingApiKey,

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The body was valid JSON but not any envelope shape the adapter knows.
    #[error("unexpected response shape from {url}: {reason}")]
    UnexpectedShape { url: String, reason: String },

    /// Radius or limit outside what the directory accepts.
    #[error("invalid trail request: {0}")]
    InvalidRequest(String),

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

impl TrailError {
    /// Maps this error onto the shared failure taxonomy.
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Http(e) if e.is_decode() => FailureKind::Decode,
            Self::Http(e) => e
                .status()
                .map_or(FailureKind::Network, |s| FailureKind::from_http_status(s.as_u16())),
            Self::UnexpectedStatus { status, .. } => FailureKind::from_http_status(*status),
            Self::MissingApiKey => FailureKind::Auth,
            Self::Deserialize { .. } | Self::UnexpectedShape { .. } => FailureKind::Decode,
            Self::InvalidRequest(_) | Self::InvalidBaseUrl { .. } => FailureKind::Validation,
        }
    }
}
