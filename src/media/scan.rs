use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use crate::{LibraryError, Result};

/// Extensions (lowercase) of the audio/video containers kept in the library.
pub const MEDIA_EXTENSIONS: &[&str] = &["mp3", "mp4", "wav", "flac", "m4a"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaEntry {
    pub path: PathBuf,
    pub file_name: String,
}

pub struct MediaScanner;

impl MediaScanner {
    pub fn is_media_file(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| MEDIA_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
            .unwrap_or(false)
    }

    /// Lists the media files directly inside `dir`, ordered by file name.
    pub fn scan(dir: impl AsRef<Path>) -> Result<Vec<MediaEntry>> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(LibraryError::DirectoryNotFound(dir.to_path_buf()));
        }

        let entries = WalkDir::new(dir)
            .follow_links(true)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| match e {
                Ok(entry) => Some(entry),
                Err(err) => {
                    log::warn!("Error accessing entry: {}", err);
                    None
                }
            })
            .filter(|e| {
                let keep = e.file_type().is_file() && Self::is_media_file(e.path());
                if !keep {
                    log::debug!("Skipping non-media entry: {}", e.path().display());
                }
                keep
            })
            .filter_map(|e| {
                let Some(file_name) = e.file_name().to_str().map(str::to_string) else {
                    log::warn!("Skipping file with non UTF-8 name: {}", e.path().display());
                    return None;
                };
                Some(MediaEntry { path: e.into_path(), file_name })
            })
            .collect::<Vec<_>>();

        log::debug!("Found {} media files in {}", entries.len(), dir.display());
        Ok(entries)
    }
}
