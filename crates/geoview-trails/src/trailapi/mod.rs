//! Client for the TrailAPI directory (keyed activity schema).
//!
//! Authenticates with a host identifier and API key header pair. This is the
//! adapter used unless configuration selects another.

mod response;

use geoview_core::{AppConfig, Coordinate, SourceLimits, TrailAdapterKind};
use reqwest::{Client, Url};

use crate::error::TrailError;
use crate::fetch::{build_client, check_limits, get_json, parse_base_url};
use crate::normalize::collect_records;
use crate::record::TrailQueryResult;

const DEFAULT_BASE_URL: &str = "https://trailapi-trailapi.p.rapidapi.com/activity/";
const DEFAULT_API_HOST: &str = "trailapi-trailapi.p.rapidapi.com";
const HOST_HEADER: &str = "X-RapidAPI-Host";
const KEY_HEADER: &str = "X-RapidAPI-Key";

pub struct TrailApiClient {
    client: Client,
    api_key: Option<String>,
    api_host: String,
    base_url: Url,
}

impl TrailApiClient {
    /// Creates a client pointed at the production directory.
    ///
    /// # Errors
    ///
    /// Returns [`TrailError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        api_key: Option<&str>,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, TrailError> {
        Self::with_base_url(
            api_key,
            DEFAULT_API_HOST,
            timeout_secs,
            user_agent,
            DEFAULT_BASE_URL,
        )
    }

    /// Creates a client with a custom host header and base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`TrailError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`TrailError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn with_base_url(
        api_key: Option<&str>,
        api_host: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, TrailError> {
        Ok(Self {
            client: build_client(timeout_secs, user_agent)?,
            api_key: api_key.map(str::to_owned),
            api_host: api_host.to_owned(),
            base_url: parse_base_url(base_url)?,
        })
    }

    /// Builds a client from application configuration.
    ///
    /// # Errors
    ///
    /// See [`TrailApiClient::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Self, TrailError> {
        Self::with_base_url(
            config.trail_api_key.as_deref(),
            config.trail_api_host.as_deref().unwrap_or(DEFAULT_API_HOST),
            config.request_timeout_secs,
            &config.user_agent,
            config.trail_base_url.as_deref().unwrap_or(DEFAULT_BASE_URL),
        )
    }

    /// Fetches trails within `limits.radius` miles of `coordinate`.
    ///
    /// Entries that cannot be normalized are dropped and counted rather than
    /// failing the whole response.
    ///
    /// # Errors
    ///
    /// - [`TrailError::InvalidRequest`] if radius or limit is out of bounds (no request sent).
    /// - [`TrailError::MissingApiKey`] if no key is configured (no request sent).
    /// - [`TrailError::UnexpectedStatus`] on a non-2xx response.
    /// - [`TrailError::Http`] on network failure.
    /// - [`TrailError::Deserialize`] / [`TrailError::UnexpectedShape`] on a bad body.
    pub async fn fetch_nearby(
        &self,
        coordinate: Coordinate,
        limits: SourceLimits,
    ) -> Result<TrailQueryResult, TrailError> {
        check_limits(limits)?;
        let api_key = self.api_key.as_deref().ok_or(TrailError::MissingApiKey)?;
        let url = self.build_url(coordinate, limits);

        match self.request(&url, api_key).await {
            Ok(result) => {
                tracing::info!(
                    url = %url,
                    count = result.trails.len(),
                    dropped = result.dropped,
                    "trail fetch complete"
                );
                Ok(result)
            }
            Err(e) => {
                tracing::warn!(url = %url, kind = %e.kind(), error = %e, "trail fetch failed");
                Err(e)
            }
        }
    }

    fn build_url(&self, coordinate: Coordinate, limits: SourceLimits) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("lat", &coordinate.latitude().to_string())
            .append_pair("lon", &coordinate.longitude().to_string())
            .append_pair("radius", &limits.radius.to_string())
            .append_pair("limit", &limits.limit.to_string());
        url
    }

    async fn request(&self, url: &Url, api_key: &str) -> Result<TrailQueryResult, TrailError> {
        let body = get_json(
            &self.client,
            url,
            &[(HOST_HEADER, self.api_host.as_str()), (KEY_HEADER, api_key)],
        )
        .await?;

        let envelope =
            response::extract_entries(&body).ok_or_else(|| TrailError::UnexpectedShape {
                url: url.to_string(),
                reason: "no trails, places, or data collection".to_owned(),
            })?;

        let drafts = envelope
            .entries
            .iter()
            .map(|(key, entry)| response::map_trail(*key, entry));
        let (trails, dropped) = collect_records(drafts, TrailAdapterKind::TrailApi);

        Ok(TrailQueryResult {
            trails,
            reported_count: envelope.reported_count,
            dropped,
        })
    }
}
