//! Type definitions for unset paths.

use std::borrow::Cow;
use std::fmt;

use crate::util::parse_json_pointer;

/// A single segment of a resolved path.
///
/// Object keys and array indices are both plain strings; an array index is
/// any canonical non-negative integer (see [`is_valid_index`](crate::is_valid_index)).
pub type PathStep = String;

/// An opaque symbol-like key.
///
/// Symbols have no string identity: they never match an object key or an
/// array index, so unsetting by a symbol is always a no-op. The display form
/// `Symbol(<description>)` is meant for diagnostics only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Symbol {
    description: Option<String>,
}

impl Symbol {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
        }
    }

    /// A symbol created without a description.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or(""))
    }
}

/// A scalar key, split on `.` before it is resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum PathKey {
    String(String),
    Int(i64),
    Float(f64),
    Symbol(Symbol),
}

impl PathKey {
    /// The string a key is coerced to before splitting.
    ///
    /// Numbers follow JavaScript's `String(n)`. Returns `None` for symbols,
    /// which have no matchable string form.
    pub fn to_key_string(&self) -> Option<Cow<'_, str>> {
        match self {
            PathKey::String(s) => Some(Cow::Borrowed(s)),
            PathKey::Int(n) => Some(Cow::Owned(n.to_string())),
            PathKey::Float(f) => Some(Cow::Owned(format_number(*f))),
            PathKey::Symbol(_) => None,
        }
    }
}

impl fmt::Display for PathKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathKey::String(s) => f.write_str(s),
            PathKey::Int(n) => write!(f, "{n}"),
            PathKey::Float(n) => f.write_str(&format_number(*n)),
            PathKey::Symbol(sym) => sym.fmt(f),
        }
    }
}

/// Format a float the way JavaScript's `Number.prototype.toString` does for
/// the ranges that matter to property keys.
fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        // Covers -0 as well.
        return "0".to_string();
    }
    let abs = n.abs();
    if abs >= 1e21 || abs < 1e-6 {
        let exp = format!("{n:e}");
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
            _ => exp,
        };
    }
    n.to_string()
}

/// A path accepted by [`unset`](crate::unset) and [`take`](crate::take).
///
/// `Segments` are used as-is and never split. `Scalar` keys are coerced to a
/// string and split on `.`; `"a.b"` and `["a", "b"]` therefore resolve to the
/// same location, while `["a.b"]` addresses a single key containing a dot.
#[derive(Debug, Clone, PartialEq)]
pub enum UnsetPath {
    Segments(Vec<PathStep>),
    Scalar(PathKey),
}

impl UnsetPath {
    /// Build a path from an RFC 6901 JSON Pointer.
    ///
    /// # Example
    ///
    /// ```
    /// use json_unset::UnsetPath;
    ///
    /// let path = UnsetPath::from_json_pointer("/a~1b/0");
    /// assert_eq!(path, UnsetPath::Segments(vec!["a/b".into(), "0".into()]));
    /// assert_eq!(UnsetPath::from_json_pointer(""), UnsetPath::Segments(vec![]));
    /// ```
    pub fn from_json_pointer(pointer: &str) -> Self {
        UnsetPath::Segments(parse_json_pointer(pointer))
    }

    /// The normalized segments of this path.
    ///
    /// Returns `None` for a symbol key, which matches nothing.
    ///
    /// # Example
    ///
    /// ```
    /// use json_unset::UnsetPath;
    ///
    /// let path = UnsetPath::from("user.name");
    /// assert_eq!(path.segments().unwrap().as_ref(), ["user", "name"]);
    /// ```
    pub fn segments(&self) -> Option<Cow<'_, [PathStep]>> {
        match self {
            UnsetPath::Segments(steps) => Some(Cow::Borrowed(steps.as_slice())),
            UnsetPath::Scalar(key) => {
                let key = key.to_key_string()?;
                Some(Cow::Owned(key.split('.').map(str::to_string).collect()))
            }
        }
    }
}

impl From<PathKey> for UnsetPath {
    fn from(key: PathKey) -> Self {
        UnsetPath::Scalar(key)
    }
}

impl From<Symbol> for UnsetPath {
    fn from(sym: Symbol) -> Self {
        UnsetPath::Scalar(PathKey::Symbol(sym))
    }
}

impl From<&str> for UnsetPath {
    fn from(s: &str) -> Self {
        UnsetPath::Scalar(PathKey::String(s.to_string()))
    }
}

impl From<String> for UnsetPath {
    fn from(s: String) -> Self {
        UnsetPath::Scalar(PathKey::String(s))
    }
}

impl From<&String> for UnsetPath {
    fn from(s: &String) -> Self {
        UnsetPath::Scalar(PathKey::String(s.clone()))
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for UnsetPath {
                fn from(n: $ty) -> Self {
                    UnsetPath::Scalar(PathKey::Int(n as i64))
                }
            }
        )*
    };
}

impl_from_int!(i32, i64, u32);

impl From<u64> for UnsetPath {
    fn from(n: u64) -> Self {
        match i64::try_from(n) {
            Ok(n) => UnsetPath::Scalar(PathKey::Int(n)),
            Err(_) => UnsetPath::Scalar(PathKey::String(n.to_string())),
        }
    }
}

impl From<usize> for UnsetPath {
    fn from(n: usize) -> Self {
        UnsetPath::from(n as u64)
    }
}

impl From<f64> for UnsetPath {
    fn from(n: f64) -> Self {
        UnsetPath::Scalar(PathKey::Float(n))
    }
}

impl From<Vec<String>> for UnsetPath {
    fn from(steps: Vec<String>) -> Self {
        UnsetPath::Segments(steps)
    }
}

impl From<Vec<&str>> for UnsetPath {
    fn from(steps: Vec<&str>) -> Self {
        UnsetPath::Segments(steps.into_iter().map(str::to_string).collect())
    }
}

impl From<&[String]> for UnsetPath {
    fn from(steps: &[String]) -> Self {
        UnsetPath::Segments(steps.to_vec())
    }
}

impl From<&[&str]> for UnsetPath {
    fn from(steps: &[&str]) -> Self {
        UnsetPath::Segments(steps.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for UnsetPath {
    fn from(steps: [&str; N]) -> Self {
        UnsetPath::Segments(steps.iter().map(|s| s.to_string()).collect())
    }
}
