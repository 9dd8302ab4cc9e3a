use std::path::PathBuf;

pub mod cli;
pub mod manifest;
pub mod media;
pub mod naming;
pub mod operations;
pub mod utils;

#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    #[error("Directory not found: {0}")]
    DirectoryNotFound(PathBuf),
    #[error("File not found: {0}")]
    ManifestNotFound(PathBuf),
    #[error("Error decoding JSON from {path}: {source}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Could not find a JSON object in {0}")]
    MalformedWrapper(PathBuf),
    #[error("Cleaned name '{to}' for '{from}' already exists")]
    RenameCollision { from: String, to: String },
    #[error("Failed to write {path}: {source}")]
    FilesystemWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, LibraryError>;

// Re-exports for convenience
pub use manifest::{Manifest, TrackRecord, WrappedMap};
pub use media::scan::{MediaEntry, MediaScanner};
pub use naming::normalize::NameNormalizer;
pub use operations::keys::{KeyComparison, KeyLister};
pub use operations::reconcile::{ManifestReconciler, Reconciliation};
pub use operations::remap::{MapApplier, RemapOutcome};
pub use operations::rename::{FilenameNormalizer, Rename, RenameReport};
