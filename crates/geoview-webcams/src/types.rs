//! Webcam directory response types.
//!
//! Every field is optional or defaulted so that additive upstream changes and
//! sparse entries never fail the whole response. Unknown keys are ignored, and
//! an explicit `null` decodes the same as an absent key.

use serde::{Deserialize, Deserializer};

use crate::record::{WebcamCategory, WebcamImages, WebcamUrls};

/// Decodes `null` as `T::default()`. Pair with `#[serde(default)]` so absent
/// keys default too.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Top-level envelope: `{"total": n, "webcams": [...]}`.
///
/// Entries stay as raw JSON so each one can be decoded (and rejected)
/// individually.
#[derive(Debug, Deserialize)]
pub struct WebcamResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub webcams: Vec<serde_json::Value>,
}

/// A single webcam entry as it appears on the wire.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawWebcam {
    pub webcam_id: Option<i64>,
    pub title: Option<String>,
    pub view_count: Option<u64>,
    pub status: Option<String>,
    pub last_updated_on: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub categories: Vec<WebcamCategory>,
    #[serde(deserialize_with = "null_as_default")]
    pub images: WebcamImages,
    pub location: Option<RawLocation>,
    #[serde(deserialize_with = "null_as_default")]
    pub urls: WebcamUrls,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawLocation {
    #[serde(deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(deserialize_with = "null_as_default")]
    pub region: String,
    #[serde(deserialize_with = "null_as_default")]
    pub region_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub continent: String,
    #[serde(deserialize_with = "null_as_default")]
    pub continent_code: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
