//! Path-based property deletion for `serde_json` values.
//!
//! [`unset`] mirrors lodash's `unset`: it removes the value found at a path
//! and reports success whether or not anything was there. Missing
//! intermediate keys, scalar targets and empty paths are all no-ops.
//! [`take`] resolves the same way but hands back what it removed.
//!
//! # Example
//!
//! ```
//! use json_unset::{take, unset};
//! use serde_json::json;
//!
//! let mut errors = json!({"user": {"name": {"message": "Required"}, "email": true}});
//! assert!(unset(&mut errors, "user.name"));
//! assert_eq!(errors, json!({"user": {"email": true}}));
//!
//! // Missing paths are not an error.
//! assert!(unset(&mut errors, "user.address.zip"));
//!
//! let removed = take(&mut errors, ["user", "email"]);
//! assert_eq!(removed, Some(json!(true)));
//! ```
//!
//! # Arrays
//!
//! Array elements are addressed by canonical indices (`"0"`, `"12"`).
//! Removing an element does not shift the rest: the slot is set to
//! `null` and the length is unchanged.
//!
//! # Symbols
//!
//! A [`Symbol`] key never matches anything. Unsetting by a symbol returns
//! `true` and leaves the target untouched.

use serde_json::Value;
use tracing::{debug, trace};

pub mod cli;

pub mod types;
pub use types::{PathKey, PathStep, Symbol, UnsetPath};

pub mod util;
pub use util::{has_own_key, is_valid_index, parse_json_pointer, unescape_component};

use util::array_index;

/// Remove the value at `path` from `target`.
///
/// Always returns `true`: a missing path, an empty path, a symbol key or a
/// scalar target all leave `target` unchanged and still report success.
/// Use [`take`] to find out whether anything was removed.
///
/// # Example
///
/// ```
/// use json_unset::unset;
/// use serde_json::json;
///
/// let mut doc = json!({"a": {"b": {"c": 1}}, "d": 2});
/// assert!(unset(&mut doc, "a.b.c"));
/// assert_eq!(doc, json!({"a": {"b": {}}, "d": 2}));
///
/// let mut doc = json!({"0": "a", "1": "b", "2": "c"});
/// assert!(unset(&mut doc, 1_i64));
/// assert_eq!(doc, json!({"0": "a", "2": "c"}));
///
/// let mut scalar = json!(123);
/// assert!(unset(&mut scalar, "a"));
/// assert_eq!(scalar, json!(123));
/// ```
pub fn unset(target: &mut Value, path: impl Into<UnsetPath>) -> bool {
    take_at(target, &path.into());
    true
}

/// Remove the value at `path` from `target` and return it.
///
/// Resolves exactly like [`unset`]. Returns `None` when nothing was removed.
/// For an array element the returned value is the one replaced by `null`.
///
/// # Example
///
/// ```
/// use json_unset::take;
/// use serde_json::json;
///
/// let mut doc = json!({"items": [{"name": "first"}, {"name": "second"}]});
/// assert_eq!(take(&mut doc, "items.1.name"), Some(json!("second")));
/// assert_eq!(take(&mut doc, "items.1.name"), None);
/// assert_eq!(doc, json!({"items": [{"name": "first"}, {}]}));
/// ```
pub fn take(target: &mut Value, path: impl Into<UnsetPath>) -> Option<Value> {
    take_at(target, &path.into())
}

fn take_at(target: &mut Value, path: &UnsetPath) -> Option<Value> {
    if !is_container(target) {
        trace!("unset target is not an object or array");
        return None;
    }
    let Some(segments) = path.segments() else {
        trace!(?path, "symbol keys never match");
        return None;
    };
    let (last, parents) = segments.split_last()?;

    let mut current = target;
    for step in parents {
        let Some(next) = child_mut(current, step) else {
            trace!(segment = %step, "path segment missing");
            return None;
        };
        current = next;
    }

    let removed = remove_member(current, last);
    if removed.is_some() {
        debug!(key = %last, depth = parents.len(), "removed key");
    } else {
        trace!(key = %last, "terminal key missing");
    }
    removed
}

fn is_container(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

fn child_mut<'a>(value: &'a mut Value, step: &str) -> Option<&'a mut Value> {
    match value {
        Value::Object(map) => map.get_mut(step),
        Value::Array(arr) => {
            let idx = array_index(step, arr.len())?;
            arr.get_mut(idx)
        }
        _ => None,
    }
}

fn remove_member(value: &mut Value, key: &str) -> Option<Value> {
    match value {
        Value::Object(map) => map.shift_remove(key),
        Value::Array(arr) => {
            let idx = array_index(key, arr.len())?;
            Some(std::mem::replace(&mut arr[idx], Value::Null))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unset_top_level() {
        let mut doc = json!({"a": 1, "b": 2, "c": 3});
        assert!(unset(&mut doc, "b"));
        assert_eq!(doc, json!({"a": 1, "c": 3}));
        assert!(!has_own_key(&doc, "b"));
    }

    #[test]
    fn test_unset_nested_dot_path() {
        let mut doc = json!({"a": {"b": {"c": 1}}, "d": 2});
        assert!(unset(&mut doc, "a.b.c"));
        assert_eq!(doc, json!({"a": {"b": {}}, "d": 2}));
    }

    #[test]
    fn test_unset_segment_path() {
        let mut doc = json!({"a": {"b": {"c": 1}}, "d": 2});
        assert!(unset(&mut doc, ["a", "b", "c"]));
        assert_eq!(doc, json!({"a": {"b": {}}, "d": 2}));
    }

    #[test]
    fn test_unset_missing_key() {
        let mut doc = json!({"a": 1, "b": 2});
        assert!(unset(&mut doc, "c"));
        assert_eq!(doc, json!({"a": 1, "b": 2}));
    }

    #[test]
    fn test_unset_missing_intermediate() {
        let mut doc = json!({"a": {"b": 1}});
        assert!(unset(&mut doc, "a.c.d"));
        assert_eq!(doc, json!({"a": {"b": 1}}));
    }

    #[test]
    fn test_unset_through_scalar() {
        let mut doc = json!({"a": {"b": 1}});
        assert!(unset(&mut doc, "a.b.c"));
        assert_eq!(doc, json!({"a": {"b": 1}}));
    }

    #[test]
    fn test_unset_empty_segments() {
        let mut doc = json!({"a": 1});
        assert!(unset(&mut doc, Vec::<String>::new()));
        assert_eq!(doc, json!({"a": 1}));
    }

    #[test]
    fn test_unset_scalar_targets() {
        for original in [json!(null), json!(123), json!("string"), json!(true)] {
            let mut target = original.clone();
            assert!(unset(&mut target, "a"));
            assert_eq!(target, original);
        }
    }

    #[test]
    fn test_unset_array_element_is_sparse() {
        let mut doc = json!({"items": ["a", "b", "c"]});
        assert!(unset(&mut doc, "items.1"));
        assert_eq!(doc, json!({"items": ["a", null, "c"]}));
    }

    #[test]
    fn test_unset_array_out_of_bounds() {
        let mut doc = json!({"items": ["a"]});
        assert!(unset(&mut doc, "items.1"));
        assert!(unset(&mut doc, "items.01"));
        assert!(unset(&mut doc, "items.-1"));
        assert_eq!(doc, json!({"items": ["a"]}));
    }

    #[test]
    fn test_unset_root_array() {
        let mut doc = json!([{"x": 1}, {"x": 2}]);
        assert!(unset(&mut doc, 0_i64));
        assert_eq!(doc, json!([null, {"x": 2}]));
        assert!(unset(&mut doc, "1.x"));
        assert_eq!(doc, json!([null, {}]));
    }

    #[test]
    fn test_unset_symbol_is_noop() {
        let mut doc = json!({"Symbol(test)": 1, "b": 2});
        assert!(unset(&mut doc, Symbol::new("test")));
        assert_eq!(doc, json!({"Symbol(test)": 1, "b": 2}));
    }

    #[test]
    fn test_unset_large_integral_float_key() {
        let mut doc = json!({"1152921504606847000": 1, "other": 2});
        assert_eq!(take(&mut doc, 2f64.powi(60)), Some(json!(1)));
        assert_eq!(doc, json!({"other": 2}));
    }

    #[test]
    fn test_unset_dotted_key_needs_segments() {
        let mut doc = json!({"a.b": 1, "a": {"b": 2}});
        assert!(unset(&mut doc, vec!["a.b"]));
        assert_eq!(doc, json!({"a": {"b": 2}}));
    }

    #[test]
    fn test_unset_null_value_is_removed() {
        let mut doc = json!({"a": null, "b": 1});
        assert!(unset(&mut doc, "a"));
        assert_eq!(doc, json!({"b": 1}));
    }

    #[test]
    fn test_take_returns_removed() {
        let mut doc = json!({"a": {"b": [1, 2]}});
        assert_eq!(take(&mut doc, "a.b"), Some(json!([1, 2])));
        assert_eq!(doc, json!({"a": {}}));
        assert_eq!(take(&mut doc, "a.b"), None);
    }

    #[test]
    fn test_take_misses() {
        let mut doc = json!({"a": 1});
        assert_eq!(take(&mut doc, Vec::<String>::new()), None);
        assert_eq!(take(&mut doc, Symbol::new("a")), None);
        assert_eq!(take(&mut json!(null), "a"), None);
    }

    #[test]
    fn test_take_preserves_key_order() {
        let mut doc = json!({"a": 1, "b": 2, "c": 3});
        take(&mut doc, "a");
        let keys: Vec<&String> = doc.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["b", "c"]);
    }
}
