use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use serde_json::{Map, Value};
use crate::{LibraryError, Result};

/// A JSON object that may be surrounded by non-JSON text, as found in
/// `renamed_tracks_map.json` exports.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WrappedMap {
    pub entries: Map<String, Value>,
}

impl WrappedMap {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LibraryError::ManifestNotFound(path.to_path_buf()),
            _ => LibraryError::Io(e),
        })?;

        let object = Self::extract(&content)
            .ok_or_else(|| LibraryError::MalformedWrapper(path.to_path_buf()))?;
        let entries = serde_json::from_str(object).map_err(|source| LibraryError::ManifestParse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { entries })
    }

    /// Returns the span from the first `{` to the last `}`, inclusive.
    pub fn extract(content: &str) -> Option<&str> {
        let first = content.find('{')?;
        let last = content.rfind('}')?;
        (last > first).then(|| &content[first..=last])
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// The mapped filename for `key`, if it is present and a string.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Value::as_str)
    }
}
