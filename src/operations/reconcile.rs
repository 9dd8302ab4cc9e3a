use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::Path;
use crate::manifest::Manifest;
use crate::media::scan::MediaScanner;
use crate::naming::normalize::NameNormalizer;
use crate::Result;

/// Result of matching a manifest against a media directory.
#[derive(Debug)]
pub struct Reconciliation {
    pub manifest: Manifest,
    /// Number of `src`/`title` fields rewritten.
    pub updated: usize,
    /// Filenames (as referenced by the manifest) with no file on disk.
    pub missing: Vec<String>,
}

impl Reconciliation {
    pub fn missing_count(&self) -> usize {
        self.missing.len()
    }

    pub fn needs_write(&self) -> bool {
        self.updated > 0 || !self.missing.is_empty()
    }

    /// Saves the manifest if anything changed or went missing. Returns
    /// whether the file was written.
    pub fn write_back(&self, path: impl AsRef<Path>) -> Result<bool> {
        if !self.needs_write() {
            return Ok(false);
        }
        self.manifest.save(path)?;
        Ok(true)
    }
}

pub struct ManifestReconciler {
    normalizer: NameNormalizer,
    src_prefix: Option<String>,
}

impl ManifestReconciler {
    pub fn new(normalizer: NameNormalizer) -> Self {
        Self { normalizer, src_prefix: None }
    }

    /// Directory written in front of matched filenames. Defaults to the
    /// scanned directory.
    pub fn with_src_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.src_prefix = Some(prefix.into());
        self
    }

    pub fn reconcile(&self, manifest_path: impl AsRef<Path>, dir: impl AsRef<Path>) -> Result<Reconciliation> {
        let manifest = Manifest::load(manifest_path)?;
        self.reconcile_manifest(manifest, dir)
    }

    pub fn reconcile_manifest(&self, mut manifest: Manifest, dir: impl AsRef<Path>) -> Result<Reconciliation> {
        let dir = dir.as_ref();
        let physical = self.physical_files(dir)?;

        let prefix = self.prefix_for(dir);
        let mut updated = 0;
        let mut missing = Vec::new();

        for track in manifest.tracks.iter_mut() {
            let Some(src) = track.src().filter(|s| !s.is_empty()) else {
                continue;
            };
            let referenced = file_name_of(src).to_string();
            let cleaned = self.normalizer.clean_filename(&referenced);

            let Some(actual) = physical.get(&cleaned) else {
                log::warn!(
                    "Track '{}' has no corresponding physical file in '{}'. Keeping its entry.",
                    referenced,
                    dir.display()
                );
                missing.push(referenced);
                continue;
            };

            let new_src = if prefix.is_empty() {
                actual.clone()
            } else {
                format!("{}/{}", prefix, actual)
            };
            if track.set_src(new_src) {
                updated += 1;
            }
            if let Some(title) = track.title() {
                let title = self.normalizer.clean_title(title);
                if track.set_title(title) {
                    updated += 1;
                }
            }
        }

        Ok(Reconciliation { manifest, updated, missing })
    }

    /// Maps cleaned names to on-disk names. When several files clean to the
    /// same name, an already-clean file wins, otherwise the first one listed.
    fn physical_files(&self, dir: &Path) -> Result<HashMap<String, String>> {
        let mut physical: HashMap<String, String> = HashMap::new();

        for entry in MediaScanner::scan(dir)? {
            let cleaned = self.normalizer.clean_filename(&entry.file_name);
            match physical.entry(cleaned) {
                Entry::Vacant(slot) => {
                    slot.insert(entry.file_name);
                }
                Entry::Occupied(mut slot) => {
                    log::warn!(
                        "Files '{}' and '{}' both clean to '{}'",
                        slot.get(),
                        entry.file_name,
                        slot.key()
                    );
                    if entry.file_name == *slot.key() {
                        slot.insert(entry.file_name);
                    }
                }
            }
        }

        Ok(physical)
    }

    fn prefix_for(&self, dir: &Path) -> String {
        let prefix = match &self.src_prefix {
            Some(prefix) => prefix.clone(),
            None => dir.to_string_lossy().replace('\\', "/"),
        };
        prefix.trim_end_matches('/').to_string()
    }
}

/// Last segment of a manifest path, accepting either separator.
fn file_name_of(src: &str) -> &str {
    src.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(src)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_takes_last_segment() {
        assert_eq!(file_name_of("tracks/My Song.mp3"), "My Song.mp3");
        assert_eq!(file_name_of("media\\tracks\\a.wav"), "a.wav");
        assert_eq!(file_name_of("bare.mp4"), "bare.mp4");
    }
}
