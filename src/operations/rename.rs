use std::path::{Path, PathBuf};
use crate::media::scan::MediaScanner;
use crate::naming::normalize::NameNormalizer;
use crate::utils::file_ops::FileManager;
use crate::{LibraryError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Default)]
pub struct RenameReport {
    pub renamed: Vec<Rename>,
    pub already_clean: usize,
    pub collisions: Vec<Rename>,
    pub failures: Vec<(Rename, String)>,
}

impl RenameReport {
    pub fn scanned(&self) -> usize {
        self.renamed.len() + self.already_clean + self.collisions.len() + self.failures.len()
    }
}

/// Renames media files to their cleaned names.
pub struct FilenameNormalizer {
    normalizer: NameNormalizer,
    dry_run: bool,
}

impl FilenameNormalizer {
    pub fn new(normalizer: NameNormalizer) -> Self {
        Self { normalizer, dry_run: false }
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn normalize_directory(&self, dir: impl AsRef<Path>) -> Result<RenameReport> {
        let dir: PathBuf = dir.as_ref().to_path_buf();
        let entries = MediaScanner::scan(&dir)?;
        let mut files = FileManager::new(&dir, self.dry_run);
        let mut report = RenameReport::default();

        for entry in entries {
            let cleaned = self.normalizer.clean_filename(&entry.file_name);
            if cleaned == entry.file_name {
                log::debug!("'{}' already clean, no rename needed.", entry.file_name);
                report.already_clean += 1;
                continue;
            }

            let rename = Rename { from: entry.file_name, to: cleaned };
            match files.rename(&rename.from, &rename.to) {
                Ok(_) => {
                    log::info!("Renamed: '{}' -> '{}'", rename.from, rename.to);
                    report.renamed.push(rename);
                }
                Err(LibraryError::RenameCollision { .. }) => {
                    log::warn!(
                        "Cleaned name '{}' for '{}' already exists. Skipping rename to avoid overwrite.",
                        rename.to,
                        rename.from
                    );
                    report.collisions.push(rename);
                }
                Err(e) => {
                    log::error!("Error renaming '{}': {}", rename.from, e);
                    report.failures.push((rename, e.to_string()));
                }
            }
        }

        Ok(report)
    }
}
