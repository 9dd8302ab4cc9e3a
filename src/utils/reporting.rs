use std::path::Path;
use csv::Writer;
use crate::operations::keys::{KeyComparison, LookupKey};
use crate::operations::reconcile::Reconciliation;
use crate::operations::rename::RenameReport;
use crate::Result;

pub struct Reporter;

impl Reporter {
    pub fn new() -> Self {
        Self
    }

    pub fn print_rename_summary(&self, report: &RenameReport, dry_run: bool) {
        let verb = if dry_run { "Would rename" } else { "Renamed" };
        for rename in &report.renamed {
            println!("  {}: '{}' -> '{}'", verb, rename.from, rename.to);
        }
        for rename in &report.collisions {
            println!("  Skipped (collision): '{}' -> '{}'", rename.from, rename.to);
        }
        for (rename, error) in &report.failures {
            println!("  Failed: '{}' ({})", rename.from, error);
        }

        if report.renamed.is_empty() {
            println!("No media files needed renaming.");
        }
        println!(
            "\n{} media files scanned: {} renamed, {} already clean, {} collisions, {} failures",
            report.scanned(),
            report.renamed.len(),
            report.already_clean,
            report.collisions.len(),
            report.failures.len()
        );
    }

    pub fn print_reconcile_summary(&self, result: &Reconciliation) {
        for name in &result.missing {
            println!("  Missing: '{}'", name);
        }
        println!(
            "\n{} tracks checked: {} fields updated, {} physical files missing from JSON entries.",
            result.manifest.len(),
            result.updated,
            result.missing_count()
        );
    }

    pub fn print_keys(&self, map_keys: &[&str], lookup: &[LookupKey], comparison: &KeyComparison) {
        println!("--- Keys from renamed tracks map ---");
        for key in map_keys {
            println!("Map Key: '{}'", key);
        }

        println!("\n--- Lookup Keys generated from manifest ---");
        for entry in lookup {
            println!("Lookup Key from track.src: '{}' (Original src: '{}')", entry.key, entry.src);
        }

        println!("\n--- Keys in map but not in manifest ---");
        for key in &comparison.map_only {
            println!("  {}", key);
        }
        println!("\n--- Keys in manifest but not in map ---");
        for key in &comparison.manifest_only {
            println!("  {}", key);
        }
    }

    pub fn generate_rename_report(&self, report: &RenameReport, output_path: impl AsRef<Path>) -> Result<()> {
        let output_path_ref = output_path.as_ref();
        let mut writer = Writer::from_path(output_path_ref)?;

        writer.write_record(["Original Name", "Cleaned Name", "Status", "Detail"])?;

        for rename in &report.renamed {
            writer.write_record([rename.from.as_str(), rename.to.as_str(), "renamed", ""])?;
        }
        for rename in &report.collisions {
            writer.write_record([rename.from.as_str(), rename.to.as_str(), "collision", "target exists"])?;
        }
        for (rename, error) in &report.failures {
            writer.write_record([rename.from.as_str(), rename.to.as_str(), "failed", error.as_str()])?;
        }

        writer.flush()?;
        log::info!("Rename report generated: {}", output_path_ref.display());
        Ok(())
    }

    pub fn generate_missing_report(&self, result: &Reconciliation, output_path: impl AsRef<Path>) -> Result<()> {
        let output_path_ref = output_path.as_ref();
        let mut writer = Writer::from_path(output_path_ref)?;

        writer.write_record(["Missing File"])?;
        for name in &result.missing {
            writer.write_record([name.as_str()])?;
        }

        writer.flush()?;
        log::info!("Missing files report generated: {}", output_path_ref.display());
        Ok(())
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}
