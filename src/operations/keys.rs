use std::collections::HashSet;
use crate::manifest::{Manifest, WrappedMap};

/// Default directory prefix stripped from `src` to build lookup keys.
pub const DEFAULT_SRC_PREFIX: &str = "tracks/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupKey {
    pub key: String,
    pub src: String,
}

/// Keys found on only one side, each list in encounter order.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct KeyComparison {
    pub map_only: Vec<String>,
    pub manifest_only: Vec<String>,
}

impl KeyComparison {
    pub fn is_consistent(&self) -> bool {
        self.map_only.is_empty() && self.manifest_only.is_empty()
    }
}

/// Derives manifest lookup keys and compares them with a renamed-tracks map.
pub struct KeyLister {
    prefix: String,
}

impl KeyLister {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into() }
    }

    pub fn lookup_key<'a>(&self, src: &'a str) -> &'a str {
        src.strip_prefix(self.prefix.as_str()).unwrap_or(src)
    }

    pub fn lookup_keys(&self, manifest: &Manifest) -> Vec<LookupKey> {
        manifest
            .tracks
            .iter()
            .enumerate()
            .filter_map(|(index, track)| match track.src() {
                Some(src) => Some(LookupKey {
                    key: self.lookup_key(src).to_string(),
                    src: src.to_string(),
                }),
                None => {
                    log::warn!("Track #{} has no src, no lookup key generated", index);
                    None
                }
            })
            .collect()
    }

    pub fn compare(&self, map: &WrappedMap, manifest: &Manifest) -> KeyComparison {
        let lookup = self.lookup_keys(manifest);
        let lookup_set: HashSet<&str> = lookup.iter().map(|k| k.key.as_str()).collect();
        let map_set: HashSet<&str> = map.keys().collect();

        KeyComparison {
            map_only: map
                .keys()
                .filter(|k| !lookup_set.contains(k))
                .map(str::to_string)
                .collect(),
            manifest_only: lookup
                .iter()
                .filter(|k| !map_set.contains(k.key.as_str()))
                .map(|k| k.key.clone())
                .collect(),
        }
    }
}

impl Default for KeyLister {
    fn default() -> Self {
        Self::new(DEFAULT_SRC_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::TrackRecord;
    use pretty_assertions::assert_eq;

    fn map_of(json: &str) -> WrappedMap {
        WrappedMap { entries: serde_json::from_str(json).unwrap() }
    }

    #[test]
    fn strips_only_the_leading_prefix() {
        let lister = KeyLister::default();
        assert_eq!(lister.lookup_key("tracks/\"DON'T ASK\".mp4"), "\"DON'T ASK\".mp4");
        assert_eq!(lister.lookup_key("other/tracks/a.mp3"), "other/tracks/a.mp3");
    }

    #[test]
    fn reports_keys_on_each_side() {
        let lister = KeyLister::default();
        let map = map_of(r#"{"a.mp3": "A.mp3", "b.mp3": "B.mp3", "z.mp3": "Z.mp3"}"#);
        let manifest = Manifest::new(vec![
            TrackRecord::new("tracks/b.mp3", "B"),
            TrackRecord::new("tracks/c.mp3", "C"),
            TrackRecord::new("tracks/a.mp3", "A"),
        ]);

        let comparison = lister.compare(&map, &manifest);
        assert_eq!(comparison.map_only, vec!["z.mp3".to_string()]);
        assert_eq!(comparison.manifest_only, vec!["c.mp3".to_string()]);
        assert!(!comparison.is_consistent());
    }
}
