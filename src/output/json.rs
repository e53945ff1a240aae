//! JSON output formatter.

use serde::Serialize;

/// Serializes `value` as pretty-printed JSON with a trailing newline.
///
/// # Panics
///
/// Panics if the value cannot be serialized (should not happen with
/// inventory types, whose fields are all plain data).
pub fn format<T: Serialize>(value: &T) -> String {
    let mut out = serde_json::to_string_pretty(value).expect("JSON serialization failed");
    out.push('\n');
    out
}
