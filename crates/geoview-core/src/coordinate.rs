//! Validated latitude/longitude pair.
//!
//! A [`Coordinate`] can only be constructed through [`Coordinate::new`] (or
//! deserialization, which goes through the same check), so every value in
//! circulation is finite and inside the geographic range.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),

    #[error("could not parse coordinate from \"{input}\": {reason}")]
    Unparsable { input: String, reason: String },
}

/// A point on Earth in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate", into = "RawCoordinate")]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawCoordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Builds a coordinate, rejecting NaN, infinities, and out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError::LatitudeOutOfRange`] or
    /// [`CoordinateError::LongitudeOutOfRange`] for the first offending axis.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !latitude.is_finite() || !(MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude) {
            return Err(CoordinateError::LatitudeOutOfRange(latitude));
        }
        if !longitude.is_finite() || !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&longitude) {
            return Err(CoordinateError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Parses manual entry of the form `"43.5,-116.0"` (whitespace tolerated).
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError::Unparsable`] if the input is not two
    /// comma-separated numbers, or a range error from [`Coordinate::new`].
    pub fn parse_pair(input: &str) -> Result<Self, CoordinateError> {
        let unparsable = |reason: &str| CoordinateError::Unparsable {
            input: input.to_owned(),
            reason: reason.to_owned(),
        };

        let (lat_raw, lon_raw) = input
            .split_once(',')
            .ok_or_else(|| unparsable("expected \"<lat>,<lon>\""))?;
        let latitude = lat_raw
            .trim()
            .parse::<f64>()
            .map_err(|e| unparsable(&format!("latitude: {e}")))?;
        let longitude = lon_raw
            .trim()
            .parse::<f64>()
            .map_err(|e| unparsable(&format!("longitude: {e}")))?;

        Self::new(latitude, longitude)
    }

    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = CoordinateError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Self::new(raw.latitude, raw.longitude)
    }
}

impl From<Coordinate> for RawCoordinate {
    fn from(c: Coordinate) -> Self {
        Self {
            latitude: c.latitude,
            longitude: c.longitude,
        }
    }
}
