use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "track-tools")]
#[command(version = "1.0")]
#[command(about = "Maintenance tools for a media track library and its tracks.json manifest", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rename media files to their cleaned names
    Rename {
        /// Directory holding the media files
        #[arg(short = 'd', long = "dir", default_value = "tracks")]
        dir: PathBuf,

        /// Only report what would be renamed
        #[arg(long)]
        dry_run: bool,

        /// Write a CSV report of renames and skips
        #[arg(short = 'r', long)]
        report: Option<PathBuf>,
    },

    /// Point manifest entries at the files actually on disk
    Reconcile {
        /// Manifest to update
        #[arg(short = 'm', long, default_value = "tracks.json")]
        manifest: PathBuf,

        /// Directory holding the media files
        #[arg(short = 'd', long = "dir", default_value = "tracks")]
        dir: PathBuf,

        /// Path written in front of matched filenames (defaults to --dir)
        #[arg(long)]
        src_prefix: Option<String>,

        /// Only report, do not rewrite the manifest
        #[arg(long)]
        dry_run: bool,

        /// Write a CSV of manifest entries without a file
        #[arg(short = 'r', long)]
        report: Option<PathBuf>,
    },

    /// Print renamed-tracks map keys next to manifest lookup keys
    Keys {
        /// Renamed-tracks map (may be wrapped in other text)
        #[arg(long, default_value = "renamed_tracks_map.json")]
        map: PathBuf,

        #[arg(short = 'm', long, default_value = "tracks.json")]
        manifest: PathBuf,

        /// Prefix stripped from src to build lookup keys
        #[arg(short = 'p', long, default_value = "tracks/")]
        prefix: String,
    },

    /// Rewrite manifest sources through a renamed-tracks map
    Remap {
        #[arg(long, default_value = "renamed_tracks_map.json")]
        map: PathBuf,

        #[arg(short = 'm', long, default_value = "tracks.json")]
        manifest: PathBuf,

        #[arg(short = 'p', long, default_value = "tracks/")]
        prefix: String,
    },

    /// Re-write the manifest in canonical form, dropping any BOM
    Tidy {
        #[arg(short = 'm', long, default_value = "tracks.json")]
        manifest: PathBuf,
    },
}
