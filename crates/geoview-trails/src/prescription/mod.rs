//! Client for the Prescription Trails directory (flat list schema).
//!
//! Reference adapter: fully functional, selected only when configuration asks
//! for it. The directory needs no credentials and has no radius parameter,
//! so `limits.radius` is validated but not sent.

mod response;

use geoview_core::{AppConfig, Coordinate, SourceLimits, TrailAdapterKind};
use reqwest::{Client, Url};

use crate::error::TrailError;
use crate::fetch::{build_client, check_limits, get_json, parse_base_url};
use crate::normalize::collect_records;
use crate::record::TrailQueryResult;

const DEFAULT_BASE_URL: &str = "https://prescriptiontrails.org/api/filter/";

pub struct PrescriptionTrailsClient {
    client: Client,
    base_url: Url,
}

impl PrescriptionTrailsClient {
    /// # Errors
    ///
    /// Returns [`TrailError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, TrailError> {
        Self::with_base_url(timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// # Errors
    ///
    /// Returns [`TrailError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`TrailError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn with_base_url(
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, TrailError> {
        Ok(Self {
            client: build_client(timeout_secs, user_agent)?,
            base_url: parse_base_url(base_url)?,
        })
    }

    /// # Errors
    ///
    /// See [`PrescriptionTrailsClient::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Self, TrailError> {
        Self::with_base_url(
            config.request_timeout_secs,
            &config.user_agent,
            config.trail_base_url.as_deref().unwrap_or(DEFAULT_BASE_URL),
        )
    }

    /// Fetches up to `limits.limit` trails ordered by distance from `coordinate`.
    ///
    /// # Errors
    ///
    /// - [`TrailError::InvalidRequest`] if radius or limit is out of bounds (no request sent).
    /// - [`TrailError::UnexpectedStatus`] on a non-2xx response.
    /// - [`TrailError::Http`] on network failure.
    /// - [`TrailError::Deserialize`] / [`TrailError::UnexpectedShape`] on a bad body.
    pub async fn fetch_nearby(
        &self,
        coordinate: Coordinate,
        limits: SourceLimits,
    ) -> Result<TrailQueryResult, TrailError> {
        check_limits(limits)?;
        let url = self.build_url(coordinate, limits);

        match self.request(&url).await {
            Ok(result) => {
                tracing::info!(
                    url = %url,
                    count = result.trails.len(),
                    reported = result.reported_count,
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
            .append_pair("by", "coord")
            .append_pair("lat", &coordinate.latitude().to_string())
            .append_pair("lng", &coordinate.longitude().to_string())
            .append_pair("offset", "0")
            .append_pair("count", &limits.limit.to_string());
        url
    }

    async fn request(&self, url: &Url) -> Result<TrailQueryResult, TrailError> {
        let body = get_json(&self.client, url, &[]).await?;

        let envelope =
            response::extract_entries(&body).ok_or_else(|| TrailError::UnexpectedShape {
                url: url.to_string(),
                reason: "expected a \"trails\" list".to_owned(),
            })?;

        let drafts = envelope.entries.iter().map(response::map_trail);
        let (trails, dropped) = collect_records(drafts, TrailAdapterKind::PrescriptionTrails);

        Ok(TrailQueryResult {
            trails,
            reported_count: envelope.reported_count,
            dropped,
        })
    }
}
