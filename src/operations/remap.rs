use crate::manifest::{Manifest, WrappedMap};
use crate::operations::keys::KeyLister;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct RemapOutcome {
    pub remapped: usize,
    /// Lookup keys that had no string entry in the map.
    pub unmapped: Vec<String>,
}

/// Rewrites manifest `src` values through a renamed-tracks map.
pub struct MapApplier {
    prefix: String,
    keys: KeyLister,
}

impl MapApplier {
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            keys: KeyLister::new(prefix.clone()),
            prefix,
        }
    }

    pub fn apply(&self, manifest: &mut Manifest, map: &WrappedMap) -> RemapOutcome {
        let mut outcome = RemapOutcome::default();

        for track in manifest.tracks.iter_mut() {
            let Some(src) = track.src() else {
                continue;
            };
            let key = self.keys.lookup_key(src).to_string();

            match map.get(&key).filter(|mapped| !mapped.is_empty()) {
                Some(mapped) => {
                    if track.set_src(format!("{}{}", self.prefix, mapped)) {
                        outcome.remapped += 1;
                    }
                }
                None => {
                    log::warn!("Could not find a mapping for track source (lookup key '{}')", key);
                    outcome.unmapped.push(key);
                }
            }
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::TrackRecord;
    use pretty_assertions::assert_eq;

    #[test]
    fn rewrites_mapped_sources_and_keeps_the_rest() {
        let map = WrappedMap {
            entries: serde_json::from_str(r#"{"“Hit”.mp4": "Hit.mp4", "odd.mp3": 3, "blank.mp3": ""}"#).unwrap(),
        };
        let mut manifest = Manifest::new(vec![
            TrackRecord::new("tracks/\u{201C}Hit\u{201D}.mp4", "Hit"),
            TrackRecord::new("tracks/odd.mp3", "Odd"),
            TrackRecord::new("tracks/gone.mp3", "Gone"),
            TrackRecord::new("tracks/blank.mp3", "Blank"),
        ]);

        let outcome = MapApplier::new("tracks/").apply(&mut manifest, &map);

        assert_eq!(outcome.remapped, 1);
        assert_eq!(outcome.unmapped, vec!["odd.mp3".to_string(), "gone.mp3".to_string(), "blank.mp3".to_string()]);
        assert_eq!(manifest.tracks[0].src(), Some("tracks/Hit.mp4"));
        assert_eq!(manifest.tracks[1].src(), Some("tracks/odd.mp3"));
        assert_eq!(manifest.tracks[2].src(), Some("tracks/gone.mp3"));
        assert_eq!(manifest.tracks[3].src(), Some("tracks/blank.mp3"));
    }
}
