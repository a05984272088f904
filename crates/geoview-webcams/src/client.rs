//! HTTP client for the webcam directory REST API.
//!
//! Wraps `reqwest` with header-based API key auth, request bounds checks, and
//! tolerant response decoding. One GET per query; no retries.

use std::time::Duration;

use geoview_core::config::{MAX_WEBCAM_LIMIT, MAX_WEBCAM_RADIUS};
use geoview_core::{AppConfig, Coordinate, SourceLimits};
use reqwest::{Client, Url};

use crate::error::WebcamError;
use crate::normalize::normalize_response;
use crate::record::WebcamQueryResult;
use crate::types::WebcamResponse;

const DEFAULT_BASE_URL: &str = "https://api.windy.com/webcams/api/v3/webcams";
const API_KEY_HEADER: &str = "x-windy-api-key";
const INCLUDE_FIELDS: &str = "categories,images,location,player,urls";

/// Place categories requested from the directory.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "city", "forest", "mountain", "beach", "harbor", "bay", "coast", "golf", "lake",
];

/// Client for the webcam directory.
///
/// Use [`WebcamClient::new`] for production or [`WebcamClient::with_base_url`]
/// to point at a mock server in tests.
pub struct WebcamClient {
    client: Client,
    api_key: Option<String>,
    base_url: Url,
    categories: Vec<String>,
}

impl WebcamClient {
    /// Creates a client pointed at the production directory.
    ///
    /// # Errors
    ///
    /// Returns [`WebcamError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        api_key: Option<&str>,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, WebcamError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`WebcamError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`WebcamError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn with_base_url(
        api_key: Option<&str>,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, WebcamError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let base_url = Url::parse(base_url).map_err(|e| WebcamError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.map(str::to_owned),
            base_url,
            categories: DEFAULT_CATEGORIES.iter().map(|c| (*c).to_owned()).collect(),
        })
    }

    /// Builds a client from application configuration.
    ///
    /// # Errors
    ///
    /// See [`WebcamClient::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Self, WebcamError> {
        Self::with_base_url(
            config.webcam_api_key.as_deref(),
            config.request_timeout_secs,
            &config.user_agent,
            config.webcam_base_url.as_deref().unwrap_or(DEFAULT_BASE_URL),
        )
    }

    /// Replaces the category allow-list sent with every request.
    #[must_use]
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Fetches webcams within `limits.radius` km of `coordinate`.
    ///
    /// Emits one `info` line (URL and summary) on success or one `warn` line
    /// (URL and error) on failure.
    ///
    /// # Errors
    ///
    /// - [`WebcamError::InvalidRequest`] if radius or limit is out of bounds (no request sent).
    /// - [`WebcamError::MissingApiKey`] if no key is configured (no request sent).
    /// - [`WebcamError::UnexpectedStatus`] on a non-2xx response.
    /// - [`WebcamError::Http`] on network failure.
    /// - [`WebcamError::Deserialize`] if the body is not the expected envelope.
    pub async fn fetch_nearby(
        &self,
        coordinate: Coordinate,
        limits: SourceLimits,
    ) -> Result<WebcamQueryResult, WebcamError> {
        Self::check_limits(limits)?;
        let api_key = self.api_key.as_deref().ok_or(WebcamError::MissingApiKey)?;
        let url = self.build_url(coordinate, limits);

        match self.request(&url, api_key).await {
            Ok(result) => {
                tracing::info!(
                    url = %url,
                    total = result.total,
                    count = result.webcams.len(),
                    dropped = result.dropped,
                    "webcam fetch complete"
                );
                Ok(result)
            }
            Err(e) => {
                tracing::warn!(url = %url, kind = %e.kind(), error = %e, "webcam fetch failed");
                Err(e)
            }
        }
    }

    fn check_limits(limits: SourceLimits) -> Result<(), WebcamError> {
        if limits.radius == 0 || limits.radius > MAX_WEBCAM_RADIUS {
            return Err(WebcamError::InvalidRequest(format!(
                "radius must be between 1 and {MAX_WEBCAM_RADIUS}, got {}",
                limits.radius
            )));
        }
        if limits.limit == 0 || limits.limit > MAX_WEBCAM_LIMIT {
            return Err(WebcamError::InvalidRequest(format!(
                "limit must be between 1 and {MAX_WEBCAM_LIMIT}, got {}",
                limits.limit
            )));
        }
        Ok(())
    }

    /// Builds the request URL with percent-encoded query parameters.
    fn build_url(&self, coordinate: Coordinate, limits: SourceLimits) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair(
                "nearby",
                &format!(
                    "{},{},{}",
                    coordinate.latitude(),
                    coordinate.longitude(),
                    limits.radius
                ),
            );
            pairs.append_pair("limit", &limits.limit.to_string());
            pairs.append_pair("offset", "0");
            pairs.append_pair("categoryOperation", "or");
            pairs.append_pair("include", INCLUDE_FIELDS);
            if !self.categories.is_empty() {
                pairs.append_pair("categories", &self.categories.join(","));
            }
        }
        url
    }

    async fn request(&self, url: &Url, api_key: &str) -> Result<WebcamQueryResult, WebcamError> {
        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .header(API_KEY_HEADER, api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WebcamError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let envelope: WebcamResponse =
            serde_json::from_str(&body).map_err(|e| WebcamError::Deserialize {
                context: url.to_string(),
                source: e,
            })?;

        Ok(normalize_response(envelope))
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
