//! Schema-independent half of trail normalization.
//!
//! Each adapter maps its wire entries onto a [`TrailDraft`]; the draft is then
//! validated here so both schemas share one exclusion rule: no usable place
//! id, unparsable or out-of-range coordinates, or an empty activity map drops
//! the entry.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use geoview_core::{Coordinate, CoordinateError, TrailAdapterKind};

use crate::record::{Activity, TrailRecord};

/// Why a single trail entry was left out of the result.
#[derive(Debug, Clone, PartialEq)]
pub enum RejectedTrail {
    MissingPlaceId,
    UnparsableCoordinates,
    InvalidCoordinates(CoordinateError),
    NoActivities,
}

impl fmt::Display for RejectedTrail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPlaceId => write!(f, "missing place id"),
            Self::UnparsableCoordinates => write!(f, "coordinates missing or not numeric"),
            Self::InvalidCoordinates(e) => write!(f, "invalid coordinates: {e}"),
            Self::NoActivities => write!(f, "no activities"),
        }
    }
}

/// A partially-trusted trail as read off the wire.
#[derive(Debug, Clone, Default)]
pub(crate) struct TrailDraft {
    pub place_id: Option<i64>,
    pub name: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub description: String,
    pub directions: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub parent_id: Option<String>,
    pub activities: BTreeMap<String, Activity>,
    pub attributes: BTreeMap<String, String>,
}

impl TrailDraft {
    pub(crate) fn validate(self, source: TrailAdapterKind) -> Result<TrailRecord, RejectedTrail> {
        let place_id = self.place_id.ok_or(RejectedTrail::MissingPlaceId)?;
        let (Some(lat), Some(lon)) = (self.latitude, self.longitude) else {
            return Err(RejectedTrail::UnparsableCoordinates);
        };
        let coordinate = Coordinate::new(lat, lon).map_err(RejectedTrail::InvalidCoordinates)?;
        if self.activities.is_empty() {
            return Err(RejectedTrail::NoActivities);
        }

        Ok(TrailRecord {
            place_id,
            name: self.name,
            city: self.city,
            state: self.state,
            country: self.country,
            description: self.description,
            directions: self.directions,
            coordinate,
            parent_id: self.parent_id,
            activities: self.activities,
            attributes: self.attributes,
            source,
        })
    }
}

/// Validates drafts, dropping rejects and repeated place ids.
///
/// Returns the accepted records and the number dropped.
pub(crate) fn collect_records<I>(drafts: I, source: TrailAdapterKind) -> (Vec<TrailRecord>, usize)
where
    I: IntoIterator<Item = TrailDraft>,
{
    let mut seen = HashSet::new();
    let mut records = Vec::new();
    let mut dropped = 0usize;

    for draft in drafts {
        let name = draft.name.clone();
        match draft.validate(source) {
            Ok(record) if seen.insert(record.place_id) => records.push(record),
            Ok(record) => {
                tracing::debug!(place_id = record.place_id, "skipping duplicate trail");
                dropped += 1;
            }
            Err(reason) => {
                tracing::debug!(%source, trail = %name, %reason, "skipping unusable trail");
                dropped += 1;
            }
        }
    }

    (records, dropped)
}
