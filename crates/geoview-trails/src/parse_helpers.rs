//! Loose JSON accessors for upstreams that mix numbers and numeric strings.

use serde_json::Value;

pub(crate) fn value_as_string(value: &Value) -> Option<String> {
    value.as_str().map(str::to_string).or_else(|| {
        if value.is_number() {
            Some(value.to_string())
        } else {
            None
        }
    })
}

pub(crate) fn value_as_f64(value: &Value) -> Option<f64> {
    value
        .as_f64()
        .or_else(|| value.as_str().and_then(|raw| raw.trim().parse::<f64>().ok()))
}

pub(crate) fn value_as_i64(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_str().and_then(|raw| raw.trim().parse::<i64>().ok()))
}

/// Trimmed, non-empty string field.
pub(crate) fn str_field(obj: &Value, key: &str) -> Option<String> {
    obj.get(key)
        .and_then(value_as_string)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Like [`str_field`] but empty when absent.
pub(crate) fn text_field(obj: &Value, key: &str) -> String {
    str_field(obj, key).unwrap_or_default()
}

/// Numeric field that may arrive as a number or a numeric string; blank is `None`.
pub(crate) fn f64_field(obj: &Value, key: &str) -> Option<f64> {
    obj.get(key).and_then(value_as_f64)
}
