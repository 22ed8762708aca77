//! Helpers for reading raw `serde_json::Value` payloads inside entity
//! constructors. The presence rule matches the original wire behavior: a
//! field is missing when it is absent, null, or an empty string.

use serde_json::Value;

/// Returns the field only if it counts as present.
pub fn field<'a>(payload: &'a Value, key: &str) -> Option<&'a Value> {
    match payload.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(value) => Some(value),
    }
}

/// Reads a string field leniently, for raw id lookups performed before any
/// entity validation runs. Absent or mistyped ids collapse to `""`, which no
/// existence check will ever find.
pub fn raw_str<'a>(payload: &'a Value, key: &str) -> &'a str {
    payload.get(key).and_then(Value::as_str).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_null_and_empty_string_are_missing() {
        let payload = json!({ "a": null, "b": "", "c": "x", "d": 7 });
        assert!(field(&payload, "a").is_none());
        assert!(field(&payload, "b").is_none());
        assert!(field(&payload, "missing").is_none());
        assert!(field(&payload, "c").is_some());
        assert!(field(&payload, "d").is_some());
    }

    #[test]
    fn raw_str_collapses_bad_ids_to_empty() {
        let payload = json!({ "threadId": 123 });
        assert_eq!(raw_str(&payload, "threadId"), "");
        assert_eq!(raw_str(&payload, "commentId"), "");
        let payload = json!({ "threadId": "thread-1" });
        assert_eq!(raw_str(&payload, "threadId"), "thread-1");
    }
}
