//! TrailAPI response parsers.
//!
//! The envelope has shipped in several shapes: trails keyed by place id under
//! `"trails"`, plain lists under `"trails"`/`"places"`/`"data"`, or a bare
//! top-level list. All of them flatten to `(key, entry)` pairs here.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::normalize::TrailDraft;
use crate::parse_helpers::{f64_field, str_field, text_field, value_as_i64};
use crate::record::Activity;

const ENVELOPE_KEYS: &[&str] = &["trails", "places", "data"];

/// Flattened envelope: each entry with its map key (if the envelope was a map).
pub(super) struct Envelope<'a> {
    pub entries: Vec<(Option<&'a str>, &'a Value)>,
    pub reported_count: Option<u64>,
}

/// Locates the trail entries in `body`. `None` if no known shape matches.
pub(super) fn extract_entries(body: &Value) -> Option<Envelope<'_>> {
    if let Some(items) = body.as_array() {
        return Some(Envelope {
            entries: items.iter().map(|v| (None, v)).collect(),
            reported_count: None,
        });
    }

    let obj = body.as_object()?;
    let reported_count = ["count", "results"]
        .iter()
        .find_map(|k| obj.get(*k).and_then(Value::as_u64));

    let container = ENVELOPE_KEYS.iter().find_map(|k| obj.get(*k))?;
    let entries = match container {
        Value::Null => Vec::new(),
        Value::Array(items) => items.iter().map(|v| (None, v)).collect(),
        Value::Object(map) => map.iter().map(|(k, v)| (Some(k.as_str()), v)).collect(),
        _ => return None,
    };

    Some(Envelope {
        entries,
        reported_count,
    })
}

/// Maps one trail entry onto a draft. `key` is the envelope map key, used as
/// the place id when the entry carries none.
pub(super) fn map_trail(key: Option<&str>, entry: &Value) -> TrailDraft {
    let place_id = entry
        .get("place_id")
        .or_else(|| entry.get("id"))
        .and_then(value_as_i64)
        .or_else(|| key.and_then(|k| k.trim().parse::<i64>().ok()));

    TrailDraft {
        place_id,
        name: text_field(entry, "name"),
        city: text_field(entry, "city"),
        state: text_field(entry, "state"),
        country: text_field(entry, "country"),
        description: text_field(entry, "description"),
        directions: text_field(entry, "directions"),
        latitude: f64_field(entry, "lat").or_else(|| f64_field(entry, "latitude")),
        longitude: f64_field(entry, "lon")
            .or_else(|| f64_field(entry, "lng"))
            .or_else(|| f64_field(entry, "longitude")),
        parent_id: str_field(entry, "parent_id"),
        activities: map_activities(entry.get("activities")),
        attributes: BTreeMap::new(),
    }
}

fn map_activities(value: Option<&Value>) -> BTreeMap<String, Activity> {
    match value {
        Some(Value::Object(map)) => map
            .iter()
            .filter(|(_, v)| v.is_object())
            .map(|(k, v)| (k.clone(), map_activity(k, v)))
            .collect(),
        Some(Value::Array(items)) => items
            .iter()
            .filter(|v| v.is_object())
            .filter_map(|v| {
                let key = str_field(v, "activity_type_name")
                    .or_else(|| str_field(v, "activity_type"))?
                    .to_lowercase();
                let activity = map_activity(&key, v);
                Some((key, activity))
            })
            .collect(),
        _ => BTreeMap::new(),
    }
}

fn map_activity(key: &str, v: &Value) -> Activity {
    let length = f64_field(v, "length")
        .or_else(|| v.get("attribs").and_then(|a| f64_field(a, "length")));

    Activity {
        name: text_field(v, "name"),
        activity_type_name: str_field(v, "activity_type_name").unwrap_or_else(|| key.to_string()),
        url: text_field(v, "url"),
        length,
        description: text_field(v, "description"),
        rating: f64_field(v, "rating"),
        rank: v.get("rank").and_then(value_as_i64),
        thumbnail: text_field(v, "thumbnail"),
    }
}
