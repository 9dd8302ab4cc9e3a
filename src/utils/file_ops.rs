use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use crate::{LibraryError, Result};

/// Renames files inside a single directory, refusing to overwrite.
pub struct FileManager {
    dir: PathBuf,
    dry_run: bool,
    claimed: HashSet<String>,
}

impl FileManager {
    pub fn new(dir: impl Into<PathBuf>, dry_run: bool) -> Self {
        Self {
            dir: dir.into(),
            dry_run,
            claimed: HashSet::new(),
        }
    }

    /// Renames `from` to `to` within the managed directory.
    ///
    /// Fails with [`LibraryError::RenameCollision`] when `to` already names a
    /// different file, or was the target of an earlier rename through this
    /// manager. In dry-run mode nothing is touched but targets are still
    /// claimed, so collisions come out the same as in a real run.
    pub fn rename(&mut self, from: &str, to: &str) -> Result<PathBuf> {
        let current = self.dir.join(from);
        let destination = self.dir.join(to);

        let taken = self.claimed.contains(to)
            || (destination.exists() && !Self::same_file(&current, &destination));
        if taken {
            return Err(LibraryError::RenameCollision {
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        if !self.dry_run {
            fs::rename(&current, &destination).map_err(|source| LibraryError::FilesystemWrite {
                path: destination.clone(),
                source,
            })?;
        }
        self.claimed.insert(to.to_string());
        Ok(destination)
    }

    fn same_file(a: &Path, b: &Path) -> bool {
        match (fs::canonicalize(a), fs::canonicalize(b)) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}
