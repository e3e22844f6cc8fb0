use serde_json::Value;
use std::fmt;

/// Slash-separated location of a value inside a JSON document,
/// e.g. `/genesis/runtime/system/code`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath(String);

impl FieldPath {
    /// Create a new field path from a slash-separated string
    pub fn new(path: &str) -> Self {
        FieldPath(Self::normalize(path))
    }

    /// Create a field path from the dotted notation, e.g. `genesis.runtime.system.code`
    pub fn from_dotted(path: &str) -> Self {
        let segments: Vec<&str> = path.split('.').filter(|part| !part.is_empty()).collect();
        FieldPath(format!("/{}", segments.join("/")))
    }

    /// Normalize the path (single leading slash, no trailing slash)
    fn normalize(path: &str) -> String {
        format!("/{}", path.trim_start_matches('/').trim_end_matches('/'))
    }

    /// Get the internal string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path segments from the root, empty for the root path
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|part| !part.is_empty())
    }

    /// Walk the document and return the value at this path
    pub fn lookup<'a>(&self, json: &'a Value) -> Option<&'a Value> {
        self.segments().try_fold(json, |current, segment| match current {
            Value::Object(map) => map.get(segment),
            Value::Array(arr) => segment.parse::<usize>().ok().and_then(|i| arr.get(i)),
            _ => None,
        })
    }

    /// Walk the document and return a mutable reference to the value at this path
    pub fn lookup_mut<'a>(&self, json: &'a mut Value) -> Option<&'a mut Value> {
        self.segments().try_fold(json, |current, segment| match current {
            Value::Object(map) => map.get_mut(segment),
            Value::Array(arr) => segment.parse::<usize>().ok().and_then(move |i| arr.get_mut(i)),
            _ => None,
        })
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
