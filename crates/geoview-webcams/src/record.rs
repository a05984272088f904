//! Normalized webcam records handed to the aggregator.
//!
//! The nested image and URL blocks carry no invariants of their own, so they
//! double as wire types: every field defaults when absent or `null`.

use chrono::{DateTime, Utc};
use geoview_core::Coordinate;
use serde::{Deserialize, Serialize};

use crate::types::null_as_default;

/// One webcam, with a guaranteed-valid location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebcamRecord {
    pub id: i64,
    pub title: String,
    pub view_count: u64,
    /// Opaque upstream status, e.g. `"active"`.
    pub status: String,
    /// Raw upstream timestamp; see [`WebcamRecord::last_updated`].
    pub last_updated_on: String,
    pub categories: Vec<WebcamCategory>,
    pub images: WebcamImages,
    pub location: WebcamLocation,
    pub urls: WebcamUrls,
}

impl WebcamRecord {
    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        self.location.coordinate
    }

    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.location.coordinate.latitude()
    }

    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.location.coordinate.longitude()
    }

    /// Parses `last_updated_on` as RFC 3339. `None` if absent or malformed.
    #[must_use]
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.last_updated_on)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Whether the webcam is tagged with the given category id (case-insensitive).
    #[must_use]
    pub fn has_category(&self, id: &str) -> bool {
        self.categories
            .iter()
            .any(|c| c.id.eq_ignore_ascii_case(id))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebcamCategory {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebcamImages {
    #[serde(deserialize_with = "null_as_default")]
    pub current: ImageSet,
    #[serde(deserialize_with = "null_as_default")]
    pub daylight: ImageSet,
    #[serde(deserialize_with = "null_as_default")]
    pub sizes: ImageSizes,
}

/// Image URLs at the three sizes the directory renders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSet {
    #[serde(deserialize_with = "null_as_default")]
    pub icon: String,
    #[serde(deserialize_with = "null_as_default")]
    pub thumbnail: String,
    #[serde(deserialize_with = "null_as_default")]
    pub preview: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSizes {
    #[serde(deserialize_with = "null_as_default")]
    pub icon: ImageSize,
    #[serde(deserialize_with = "null_as_default")]
    pub thumbnail: ImageSize,
    #[serde(deserialize_with = "null_as_default")]
    pub preview: ImageSize,
}

/// Pixel dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSize {
    #[serde(deserialize_with = "null_as_default")]
    pub width: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebcamLocation {
    pub city: String,
    pub region: String,
    pub region_code: String,
    pub country: String,
    pub country_code: String,
    pub continent: String,
    pub continent_code: String,
    pub coordinate: Coordinate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebcamUrls {
    #[serde(deserialize_with = "null_as_default")]
    pub detail: String,
    #[serde(deserialize_with = "null_as_default")]
    pub edit: String,
    #[serde(deserialize_with = "null_as_default")]
    pub provider: String,
}

/// The outcome of one successful webcam query.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WebcamQueryResult {
    /// Total matches reported upstream; may exceed `webcams.len()` when paginated.
    pub total: u64,
    pub webcams: Vec<WebcamRecord>,
    /// Entries present in the payload but rejected during normalization.
    pub dropped: usize,
}
