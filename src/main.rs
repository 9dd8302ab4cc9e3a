use clap::Parser;
use track_library_tools::{
    cli::commands::{Cli, Commands},
    utils::reporting::Reporter,
    FilenameNormalizer, KeyLister, Manifest, ManifestReconciler, MapApplier, NameNormalizer,
    Result, WrappedMap,
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    let reporter = Reporter::new();

    match command {
        Commands::Rename { dir, dry_run, report } => {
            println!("=== Starting file renaming in '{}' ===", dir.display());
            println!("Dry run mode: {}", dry_run);

            let normalizer = FilenameNormalizer::new(NameNormalizer::new()?).dry_run(dry_run);
            let result = normalizer.normalize_directory(&dir)?;
            reporter.print_rename_summary(&result, dry_run);

            if let Some(path) = report {
                match reporter.generate_rename_report(&result, &path) {
                    Ok(_) => println!("Report saved to: {}", path.display()),
                    Err(e) => eprintln!("Error generating report: {}", e),
                }
            }

            println!("\n=== File renaming complete ===");
        }

        Commands::Reconcile { manifest, dir, src_prefix, dry_run, report } => {
            println!("=== Updating '{}' from '{}' ===", manifest.display(), dir.display());

            let mut reconciler = ManifestReconciler::new(NameNormalizer::new()?);
            if let Some(prefix) = src_prefix {
                reconciler = reconciler.with_src_prefix(prefix);
            }
            let result = reconciler.reconcile(&manifest, &dir)?;
            reporter.print_reconcile_summary(&result);

            if dry_run {
                println!("Dry run - '{}' left untouched", manifest.display());
            } else {
                // A failed write still leaves the summary above accurate
                match result.write_back(&manifest) {
                    Ok(true) => println!("Successfully updated '{}'.", manifest.display()),
                    Ok(false) => println!("No changes or missing files detected. '{}' was not modified.", manifest.display()),
                    Err(e) => eprintln!("Error writing to '{}': {}", manifest.display(), e),
                }
            }

            if let Some(path) = report {
                match reporter.generate_missing_report(&result, &path) {
                    Ok(_) => println!("Report saved to: {}", path.display()),
                    Err(e) => eprintln!("Error generating report: {}", e),
                }
            }
        }

        Commands::Keys { map, manifest, prefix } => {
            let map = WrappedMap::load(&map)?;
            let manifest = Manifest::load(&manifest)?;

            let lister = KeyLister::new(prefix);
            let lookup = lister.lookup_keys(&manifest);
            let comparison = lister.compare(&map, &manifest);
            let map_keys: Vec<&str> = map.keys().collect();
            reporter.print_keys(&map_keys, &lookup, &comparison);

            if comparison.is_consistent() {
                println!("\nAll keys match.");
            }
        }

        Commands::Remap { map, manifest: manifest_path, prefix } => {
            let map = WrappedMap::load(&map)?;
            let mut manifest = Manifest::load(&manifest_path)?;

            let outcome = MapApplier::new(prefix).apply(&mut manifest, &map);
            println!(
                "{} sources remapped, {} without a mapping",
                outcome.remapped,
                outcome.unmapped.len()
            );

            if outcome.remapped > 0 {
                manifest.save(&manifest_path)?;
                println!("'{}' updated with new filenames.", manifest_path.display());
            }
        }

        Commands::Tidy { manifest: manifest_path } => {
            let manifest = Manifest::load(&manifest_path)?;
            manifest.save(&manifest_path)?;
            println!("'{}' cleaned and re-written ({} tracks).", manifest_path.display(), manifest.len());
        }
    }

    Ok(())
}
