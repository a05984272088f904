//! Prescription Trails response parsers.
//!
//! Flat schema: `{"count": n, "trails": [...]}` with coordinates as strings
//! and walking loops keyed by loop number. Loops fold into one `walking`
//! activity whose length is the sum of the loop distances.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::normalize::TrailDraft;
use crate::parse_helpers::{f64_field, str_field, text_field, value_as_f64, value_as_i64};
use crate::record::Activity;

pub(super) const WALKING: &str = "walking";

/// Descriptive fields copied verbatim into `TrailRecord::attributes`.
const ATTRIBUTE_KEYS: &[&str] = &[
    "zip",
    "lighting",
    "difficulty",
    "surface",
    "parking",
    "facilities",
    "hours",
    "rating",
    "ratings",
    "favorites",
    "reviews",
    "distance",
    "modified",
    "published",
    "largeImgURL",
];

pub(super) struct Envelope<'a> {
    pub entries: &'a [Value],
    pub reported_count: Option<u64>,
}

pub(super) fn extract_entries(body: &Value) -> Option<Envelope<'_>> {
    let entries = match body.get("trails")? {
        Value::Array(items) => items.as_slice(),
        Value::Null => &[],
        _ => return None,
    };
    let reported_count = body
        .get("count")
        .and_then(value_as_i64)
        .and_then(|c| u64::try_from(c).ok());

    Some(Envelope {
        entries,
        reported_count,
    })
}

pub(super) fn map_trail(entry: &Value) -> TrailDraft {
    let mut attributes: BTreeMap<String, String> = ATTRIBUTE_KEYS
        .iter()
        .filter_map(|k| str_field(entry, k).map(|v| ((*k).to_string(), v)))
        .collect();
    if let Some(attractions) = join_attractions(entry.get("attractions")) {
        attributes.insert("attractions".to_string(), attractions);
    }

    let mut activities = BTreeMap::new();
    if let Some(activity) = walking_activity(entry) {
        activities.insert(WALKING.to_string(), activity);
    }

    TrailDraft {
        place_id: entry.get("id").and_then(value_as_i64),
        name: text_field(entry, "name"),
        city: text_field(entry, "city"),
        state: text_field(entry, "state"),
        country: text_field(entry, "country"),
        description: text_field(entry, "desc"),
        directions: directions(entry),
        latitude: f64_field(entry, "lat"),
        longitude: f64_field(entry, "lng"),
        parent_id: None,
        activities,
        attributes,
    }
}

/// `None` when the trail lists no loops, which leaves it without activities.
fn walking_activity(entry: &Value) -> Option<Activity> {
    let loops: Vec<&Value> = match entry.get("loops") {
        Some(Value::Object(map)) => map.values().collect(),
        Some(Value::Array(items)) => items.iter().collect(),
        _ => Vec::new(),
    };
    if loops.is_empty() {
        return None;
    }

    let distances: Vec<f64> = loops
        .iter()
        .filter_map(|l| l.get("distance").and_then(value_as_f64))
        .collect();
    let length = if distances.is_empty() {
        None
    } else {
        Some(distances.iter().sum())
    };

    Some(Activity {
        name: text_field(entry, "name"),
        activity_type_name: "Walking".to_string(),
        url: text_field(entry, "url"),
        length,
        description: text_field(entry, "desc"),
        rating: f64_field(entry, "rating"),
        rank: None,
        thumbnail: text_field(entry, "thumbURL"),
    })
}

fn directions(entry: &Value) -> String {
    let mut parts = Vec::new();
    if let Some(address) = str_field(entry, "address") {
        parts.push(address);
    }
    if let Some(cross) = str_field(entry, "crossstreets") {
        parts.push(format!("near {cross}"));
    }
    if let Some(transit) = str_field(entry, "transit") {
        parts.push(format!("transit: {transit}"));
    }
    parts.join("; ")
}

fn join_attractions(value: Option<&Value>) -> Option<String> {
    let items = value?.as_array()?;
    let names: Vec<String> = items
        .iter()
        .filter_map(|v| v.as_str().map(str::trim).filter(|s| !s.is_empty()))
        .map(str::to_string)
        .collect();
    if names.is_empty() {
        None
    } else {
        Some(names.join(", "))
    }
}
