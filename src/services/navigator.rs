//! Default-valued lookup into a partially populated JSON document.
//!
//! Every nested read of a report goes through here. A missing key, a value of
//! the wrong shape, an out-of-range index and an explicit `null` all resolve
//! to "absent"; nothing in this module can fail.

use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seg<'a> {
    Key(&'a str),
    Index(usize),
}

impl<'a> From<&'a str> for Seg<'a> {
    fn from(key: &'a str) -> Self {
        Seg::Key(key)
    }
}

impl<'a> From<&'a String> for Seg<'a> {
    fn from(key: &'a String) -> Self {
        Seg::Key(key.as_str())
    }
}

impl From<usize> for Seg<'_> {
    fn from(index: usize) -> Self {
        Seg::Index(index)
    }
}

/// Builds a lookup path: `json_path!["audits", id, "details", "items", 0]`.
macro_rules! json_path {
    ($($seg:expr),* $(,)?) => {
        &[$($crate::services::navigator::Seg::from($seg)),*]
    };
}
pub(crate) use json_path;

/// The value at `path`, or `None` when any step is missing or the final value is `null`.
pub fn lookup<'v>(root: &'v Value, path: &[Seg<'_>]) -> Option<&'v Value> {
    let mut cur = root;
    for seg in path {
        cur = match (seg, cur) {
            (Seg::Key(key), Value::Object(map)) => map.get(*key)?,
            (Seg::Index(index), Value::Array(items)) => items.get(*index)?,
            _ => return None,
        };
    }
    if cur.is_null() {
        None
    } else {
        Some(cur)
    }
}

static NULL: Value = Value::Null;

pub fn get<'v>(root: &'v Value, path: &[Seg<'_>], default: &'v Value) -> &'v Value {
    lookup(root, path).unwrap_or(default)
}

pub fn get_f64(root: &Value, path: &[Seg<'_>]) -> Option<f64> {
    get(root, path, &NULL).as_f64()
}

pub fn get_f64_or(root: &Value, path: &[Seg<'_>], default: f64) -> f64 {
    get_f64(root, path).unwrap_or(default)
}

pub fn get_str<'v>(root: &'v Value, path: &[Seg<'_>]) -> Option<&'v str> {
    get(root, path, &NULL).as_str()
}

pub fn get_object<'v>(root: &'v Value, path: &[Seg<'_>]) -> Option<&'v Map<String, Value>> {
    get(root, path, &NULL).as_object()
}

/// Array at `path`; an empty slice when absent or not an array.
pub fn get_items<'v>(root: &'v Value, path: &[Seg<'_>]) -> &'v [Value] {
    get(root, path, &NULL)
        .as_array()
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc() -> Value {
        json!({
            "audits": {
                "color-contrast": {
                    "score": 0.5,
                    "details": {"items": [{"node": {"snippet": "<p>"}}]}
                },
                "informational": {"score": null}
            }
        })
    }

    #[test]
    fn resolves_nested_keys_and_indices() {
        let d = doc();
        let snippet = json_path![
            "audits",
            "color-contrast",
            "details",
            "items",
            0usize,
            "node",
            "snippet"
        ];
        assert_eq!(get_str(&d, snippet), Some("<p>"));
        assert_eq!(
            get_f64(&d, json_path!["audits", "color-contrast", "score"]),
            Some(0.5)
        );
    }

    #[test]
    fn missing_steps_fall_back_to_default() {
        let d = doc();
        let fallback = json!("fallback");
        assert_eq!(get(&d, json_path!["audits", "nope", "score"], &fallback), &fallback);
        let past_end = json_path!["audits", "color-contrast", "details", "items", 9usize];
        assert_eq!(get(&d, past_end, &fallback), &fallback);
        // indexing into an object and keying into an array both miss
        assert_eq!(get(&d, json_path!["audits", 0usize], &fallback), &fallback);
        let keyed_array = json_path!["audits", "color-contrast", "details", "items", "node"];
        assert_eq!(get(&d, keyed_array, &fallback), &fallback);
        // scalar in the middle of the path
        let through_scalar = json_path!["audits", "color-contrast", "score", "x"];
        assert_eq!(get(&d, through_scalar, &fallback), &fallback);
    }

    #[test]
    fn explicit_null_is_absent() {
        let d = doc();
        let score = json_path!["audits", "informational", "score"];
        assert!(lookup(&d, score).is_none());
        assert_eq!(get(&d, score, &NULL), &Value::Null);
        assert_eq!(get_f64_or(&d, score, 0.0), 0.0);
    }

    #[test]
    fn items_default_to_empty_slice() {
        let d = doc();
        let missing = json_path!["audits", "informational", "details", "items"];
        assert!(get_items(&d, missing).is_empty());
        let present = json_path!["audits", "color-contrast", "details", "items"];
        assert_eq!(get_items(&d, present).len(), 1);
    }

    #[test]
    fn wrong_shape_reads_as_absent() {
        let d = doc();
        let score = json_path!["audits", "color-contrast", "score"];
        assert!(get_items(&d, score).is_empty());
        assert!(get_str(&d, score).is_none());
        assert!(get_object(&d, score).is_none());
        let audits = json_path!["audits"];
        assert_eq!(get_object(&d, audits).map(|m| m.len()), Some(2));
        assert!(get_f64(&d, audits).is_none());
    }

    #[test]
    fn empty_path_returns_root() {
        let d = json!({"a": 1});
        assert_eq!(lookup(&d, json_path![]), Some(&d));
        assert!(lookup(&Value::Null, json_path![]).is_none());
    }
}
