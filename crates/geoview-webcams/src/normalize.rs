//! Conversion of wire-format webcams into [`WebcamRecord`]s.

use std::collections::HashSet;
use std::fmt;

use geoview_core::{Coordinate, CoordinateError};

use crate::record::{WebcamLocation, WebcamQueryResult, WebcamRecord};
use crate::types::{RawWebcam, WebcamResponse};

/// Why a single webcam entry was left out of the result.
#[derive(Debug, Clone, PartialEq)]
pub enum RejectedWebcam {
    MissingId,
    MissingLocation,
    InvalidCoordinate(CoordinateError),
}

impl fmt::Display for RejectedWebcam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingId => write!(f, "missing webcamId"),
            Self::MissingLocation => write!(f, "missing location coordinates"),
            Self::InvalidCoordinate(e) => write!(f, "invalid coordinates: {e}"),
        }
    }
}

/// Converts one wire entry into a [`WebcamRecord`].
///
/// # Errors
///
/// Returns a [`RejectedWebcam`] when the entry has no id or no usable location.
pub fn normalize_webcam(raw: RawWebcam) -> Result<WebcamRecord, RejectedWebcam> {
    let id = raw.webcam_id.ok_or(RejectedWebcam::MissingId)?;
    let location = raw.location.ok_or(RejectedWebcam::MissingLocation)?;
    let (Some(lat), Some(lon)) = (location.latitude, location.longitude) else {
        return Err(RejectedWebcam::MissingLocation);
    };
    let coordinate = Coordinate::new(lat, lon).map_err(RejectedWebcam::InvalidCoordinate)?;

    Ok(WebcamRecord {
        id,
        title: raw.title.unwrap_or_default(),
        view_count: raw.view_count.unwrap_or(0),
        status: raw.status.unwrap_or_default(),
        last_updated_on: raw.last_updated_on.unwrap_or_default(),
        categories: raw.categories,
        images: raw.images,
        location: WebcamLocation {
            city: location.city,
            region: location.region,
            region_code: location.region_code,
            country: location.country,
            country_code: location.country_code,
            continent: location.continent,
            continent_code: location.continent_code,
            coordinate,
        },
        urls: raw.urls,
    })
}

/// Decodes and normalizes every entry of a response envelope.
///
/// Entries that fail to decode or normalize are skipped and counted in
/// `dropped`. A repeated `webcamId` keeps its first occurrence.
#[must_use]
pub fn normalize_response(response: WebcamResponse) -> WebcamQueryResult {
    let mut seen_ids = HashSet::new();
    let mut webcams = Vec::with_capacity(response.webcams.len());
    let mut dropped = 0usize;

    for (index, value) in response.webcams.into_iter().enumerate() {
        let raw = match serde_json::from_value::<RawWebcam>(value) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping undecodable webcam entry");
                dropped += 1;
                continue;
            }
        };

        match normalize_webcam(raw) {
            Ok(record) if seen_ids.insert(record.id) => webcams.push(record),
            Ok(record) => {
                tracing::debug!(id = record.id, "skipping duplicate webcam id");
                dropped += 1;
            }
            Err(reason) => {
                tracing::debug!(index, %reason, "skipping unusable webcam entry");
                dropped += 1;
            }
        }
    }

    WebcamQueryResult {
        total: response.total,
        webcams,
        dropped,
    }
}
