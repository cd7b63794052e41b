use serde_json::Value;

/// Unescapes a JSON Pointer path component.
///
/// Per RFC 6901, `~1` is replaced with `/` and `~0` is replaced with `~`.
pub fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    // Order matters: ~1 must be replaced before ~0
    component.replace("~1", "/").replace("~0", "~")
}

/// Parse a JSON Pointer string into path components.
///
/// The empty pointer is the empty path. A pointer without a leading `/` is
/// read as if it had one.
pub fn parse_json_pointer(pointer: &str) -> Vec<String> {
    if pointer.is_empty() {
        return Vec::new();
    }
    let body = pointer.strip_prefix('/').unwrap_or(pointer);
    body.split('/').map(unescape_component).collect()
}

/// Check if a string represents a valid non-negative integer array index.
///
/// # Example
///
/// ```
/// use json_unset::is_valid_index;
///
/// assert!(is_valid_index("0"));
/// assert!(is_valid_index("123"));
/// assert!(!is_valid_index("-1"));
/// assert!(!is_valid_index("1.5"));
/// assert!(!is_valid_index("01"));
/// ```
pub fn is_valid_index(index: &str) -> bool {
    if index.is_empty() {
        return false;
    }
    let bytes = index.as_bytes();
    // First char can't be leading zero unless it's just "0"
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|&b| b.is_ascii_digit())
}

/// Resolve `step` to an in-bounds index of an array of length `len`.
pub(crate) fn array_index(step: &str, len: usize) -> Option<usize> {
    if !is_valid_index(step) {
        return None;
    }
    step.parse::<usize>().ok().filter(|&idx| idx < len)
}

/// Check if a value has an own member under `key`.
///
/// Objects test key presence. Arrays test that `key` is a canonical index
/// within bounds. Scalars have no members.
///
/// # Example
///
/// ```
/// use json_unset::has_own_key;
/// use serde_json::json;
///
/// assert!(has_own_key(&json!({"a": null}), "a"));
/// assert!(has_own_key(&json!([1, 2]), "1"));
/// assert!(!has_own_key(&json!([1, 2]), "2"));
/// assert!(!has_own_key(&json!("str"), "0"));
/// ```
pub fn has_own_key(value: &Value, key: &str) -> bool {
    match value {
        Value::Object(map) => map.contains_key(key),
        Value::Array(arr) => array_index(key, arr.len()).is_some(),
        _ => false,
    }
}
