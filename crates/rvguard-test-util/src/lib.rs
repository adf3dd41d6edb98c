//! Shared test utilities for the rvguard workspace.
//!
//! Lives outside `#[cfg(test)]` so integration tests in several crates can
//! compare reports against golden files.

use serde_json::Value;

const TIMESTAMP_KEYS: &[&str] = &["started_at", "finished_at"];
const ENVELOPE_KEYS: &[&str] = &["schema", "tool", "verdict", "findings", "data"];

/// Normalize non-deterministic report fields for golden-file comparison.
///
/// - `tool.version` becomes `"__VERSION__"`, but only on a root object that
///   has every envelope key, so finding payloads that happen to carry a
///   `tool` object are left alone.
/// - `started_at` / `finished_at` become `"__TIMESTAMP__"` at any depth.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_envelope = ENVELOPE_KEYS.iter().all(|k| obj.contains_key(*k));
        if is_envelope
            && let Some(tool_obj) = obj.get_mut("tool").and_then(Value::as_object_mut)
            && tool_obj.contains_key("version")
        {
            tool_obj.insert(
                "version".to_string(),
                Value::String("__VERSION__".to_string()),
            );
        }
    }
    normalize_timestamps(&mut value);
    value
}

fn normalize_timestamps(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in TIMESTAMP_KEYS {
                if let Some(v) = map.get_mut(*key) {
                    *v = Value::String("__TIMESTAMP__".to_string());
                }
            }
            for val in map.values_mut() {
                normalize_timestamps(val);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_timestamps(val);
            }
        }
        _ => {}
    }
}
