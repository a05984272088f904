//! Normalized trail records handed to the aggregator.

use std::collections::BTreeMap;

use geoview_core::{Coordinate, TrailAdapterKind};
use serde::Serialize;

/// One trail or activity location.
///
/// Constructed only by the adapters' normalization step, which guarantees a
/// valid coordinate and at least one activity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrailRecord {
    pub place_id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub description: String,
    pub directions: String,
    pub coordinate: Coordinate,
    pub parent_id: Option<String>,
    /// Keyed by activity type, e.g. `"hiking"`. Never empty.
    pub activities: BTreeMap<String, Activity>,
    /// Adapter-specific descriptive fields (surface, lighting, hours, ...).
    pub attributes: BTreeMap<String, String>,
    #[serde(serialize_with = "serialize_adapter")]
    pub source: TrailAdapterKind,
}

/// Metadata for one activity offered at a trail.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Activity {
    pub name: String,
    /// Human-readable activity type, e.g. `"Mountain Biking"`.
    pub activity_type_name: String,
    pub url: String,
    /// Length in miles, when the upstream reports one.
    pub length: Option<f64>,
    pub description: String,
    pub rating: Option<f64>,
    pub rank: Option<i64>,
    pub thumbnail: String,
}

impl TrailRecord {
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.coordinate.latitude()
    }

    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.coordinate.longitude()
    }

    /// Whether any activity matches `name` by key or type name, ignoring case.
    #[must_use]
    pub fn offers_activity(&self, name: &str) -> bool {
        self.activities.iter().any(|(key, activity)| {
            key.eq_ignore_ascii_case(name) || activity.activity_type_name.eq_ignore_ascii_case(name)
        })
    }

    /// The first activity in key order, used as the trail's headline activity.
    #[must_use]
    pub fn primary_activity(&self) -> Option<&Activity> {
        self.activities.values().next()
    }
}

/// The outcome of one successful trail query.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrailQueryResult {
    pub trails: Vec<TrailRecord>,
    /// Count metadata from the envelope, when the schema carries one.
    pub reported_count: Option<u64>,
    /// Entries present in the payload but rejected during normalization.
    pub dropped: usize,
}

/// Keeps trails offering at least one of `activities`. An empty filter keeps everything.
#[must_use]
pub fn filter_by_activities<'a, S>(trails: &'a [TrailRecord], activities: &[S]) -> Vec<&'a TrailRecord>
where
    S: AsRef<str>,
{
    trails
        .iter()
        .filter(|trail| {
            activities.is_empty() || activities.iter().any(|a| trail.offers_activity(a.as_ref()))
        })
        .collect()
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn serialize_adapter<S>(kind: &TrailAdapterKind, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(kind)
}
