use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use crate::{LibraryError, Result};

pub mod wrapped;

pub use wrapped::WrappedMap;

/// One entry of the manifest. Only `src` and `title` are interpreted; every
/// other field is carried through untouched and in its original order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackRecord(Map<String, Value>);

impl TrackRecord {
    pub fn new(src: &str, title: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("src".into(), Value::String(src.into()));
        fields.insert("title".into(), Value::String(title.into()));
        Self(fields)
    }

    pub fn src(&self) -> Option<&str> {
        self.0.get("src").and_then(Value::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.0.get("title").and_then(Value::as_str)
    }

    /// Replaces `src`, returning whether the stored value changed.
    pub fn set_src(&mut self, src: String) -> bool {
        self.set_string("src", src)
    }

    /// Replaces `title`, returning whether the stored value changed.
    pub fn set_title(&mut self, title: String) -> bool {
        self.set_string("title", title)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    fn set_string(&mut self, key: &str, value: String) -> bool {
        if self.0.get(key).and_then(Value::as_str) == Some(value.as_str()) {
            return false;
        }
        self.0.insert(key.to_string(), Value::String(value));
        true
    }
}

/// The `tracks.json` array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    pub tracks: Vec<TrackRecord>,
}

impl Manifest {
    pub fn new(tracks: Vec<TrackRecord>) -> Self {
        Self { tracks }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LibraryError::ManifestNotFound(path.to_path_buf()),
            _ => LibraryError::Io(e),
        })?;
        Self::parse(&content).map_err(|source| LibraryError::ManifestParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content.trim_start_matches('\u{feff}'))
    }

    /// Four-space indented JSON with non-ASCII characters left as-is.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        buf.push(b'\n');
        // serde_json only emits valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = self.to_json().map_err(|e| LibraryError::FilesystemWrite {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        fs::write(path, json).map_err(|source| LibraryError::FilesystemWrite {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
