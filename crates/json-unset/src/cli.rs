//! Core logic behind the `json-unset` binary.
//!
//! The binary only handles argument parsing and stdio; everything that can
//! be tested without a process lives here.

use serde_json::Value;
use thiserror::Error;

use crate::{take, UnsetPath};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

/// How the path argument is interpreted and what gets printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnsetOptions {
    /// Read the path as a JSON Pointer instead of a dot path.
    pub pointer: bool,
    pub pretty: bool,
    /// Print the removed value (or `null`) instead of the document.
    pub removed: bool,
}

impl UnsetOptions {
    fn parse_path(&self, path: &str) -> UnsetPath {
        if self.pointer {
            UnsetPath::from_json_pointer(path)
        } else {
            UnsetPath::from(path)
        }
    }
}

/// Unset `path` in the JSON document `json` and render the output.
///
/// # Example
///
/// ```
/// use json_unset::cli::{run, UnsetOptions};
///
/// let out = run(r#"{"a":{"b":1,"c":2}}"#, "a.b", &UnsetOptions::default()).unwrap();
/// assert_eq!(out, r#"{"a":{"c":2}}"#);
/// ```
pub fn run(json: &str, path: &str, options: &UnsetOptions) -> Result<String, CliError> {
    let mut doc: Value = serde_json::from_str(json)?;
    let removed = take(&mut doc, options.parse_path(path));
    let out = if options.removed {
        removed.unwrap_or(Value::Null)
    } else {
        doc
    };
    let rendered = if options.pretty {
        serde_json::to_string_pretty(&out)?
    } else {
        serde_json::to_string(&out)?
    };
    Ok(rendered)
}
