//! Shared HTTP plumbing for the trail adapters.

use std::time::Duration;

use geoview_core::config::{MAX_TRAIL_LIMIT, MAX_TRAIL_RADIUS};
use geoview_core::SourceLimits;
use reqwest::{Client, Url};

use crate::error::TrailError;

pub(crate) fn build_client(timeout_secs: u64, user_agent: &str) -> Result<Client, TrailError> {
    Ok(Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .user_agent(user_agent)
        .build()?)
}

pub(crate) fn parse_base_url(base_url: &str) -> Result<Url, TrailError> {
    Url::parse(base_url).map_err(|e| TrailError::InvalidBaseUrl {
        base_url: base_url.to_owned(),
        reason: e.to_string(),
    })
}

pub(crate) fn check_limits(limits: SourceLimits) -> Result<(), TrailError> {
    if limits.radius == 0 || limits.radius > MAX_TRAIL_RADIUS {
        return Err(TrailError::InvalidRequest(format!(
            "radius must be between 1 and {MAX_TRAIL_RADIUS}, got {}",
            limits.radius
        )));
    }
    if limits.limit == 0 || limits.limit > MAX_TRAIL_LIMIT {
        return Err(TrailError::InvalidRequest(format!(
            "limit must be between 1 and {MAX_TRAIL_LIMIT}, got {}",
            limits.limit
        )));
    }
    Ok(())
}

/// Sends a GET with the given extra headers, asserts a 2xx status, and parses
/// the body as JSON.
///
/// # Errors
///
/// Returns [`TrailError::UnexpectedStatus`] on a non-2xx status,
/// [`TrailError::Http`] on network failure, and [`TrailError::Deserialize`] if
/// the body is not valid JSON.
pub(crate) async fn get_json(
    client: &Client,
    url: &Url,
    headers: &[(&str, &str)],
) -> Result<serde_json::Value, TrailError> {
    let mut request = client
        .get(url.clone())
        .header(reqwest::header::ACCEPT, "application/json");
    for (name, value) in headers {
        request = request.header(*name, *value);
    }

    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(TrailError::UnexpectedStatus {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| TrailError::Deserialize {
        context: url.to_string(),
        source: e,
    })
}
