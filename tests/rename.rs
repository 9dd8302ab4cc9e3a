use std::fs;
use std::path::Path;
use pretty_assertions::assert_eq;
use tempfile::tempdir;
use track_library_tools::{FilenameNormalizer, LibraryError, NameNormalizer, Rename};

fn normalizer() -> FilenameNormalizer {
    FilenameNormalizer::new(NameNormalizer::new().unwrap())
}

fn touch(dir: &Path, name: &str) {
    fs::write(dir.join(name), name.as_bytes()).unwrap();
}

fn listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn renames_dirty_media_files_only() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "Track \u{2014} \u{201C}Live\u{201D} Mix.mp3");
    touch(dir.path(), "Clean Name.wav");
    touch(dir.path(), "Cover  \u{201C}Art\u{201D}.jpg");

    let report = normalizer().normalize_directory(dir.path()).unwrap();

    assert_eq!(
        report.renamed,
        vec![Rename {
            from: "Track \u{2014} \u{201C}Live\u{201D} Mix.mp3".into(),
            to: "Track - Live Mix.mp3".into(),
        }]
    );
    assert_eq!(report.already_clean, 1);
    assert!(report.collisions.is_empty());
    assert_eq!(
        listing(dir.path()),
        vec!["Clean Name.wav", "Cover  \u{201C}Art\u{201D}.jpg", "Track - Live Mix.mp3"]
    );
}

#[test]
fn extension_filter_is_case_insensitive() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "Loud  Song.MP4");

    let report = normalizer().normalize_directory(dir.path()).unwrap();

    assert_eq!(report.renamed.len(), 1);
    assert!(dir.path().join("Loud Song.MP4").exists());
}

#[test]
fn second_run_renames_nothing() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "A  \u{2018}b\u{2019}.mp3");
    touch(dir.path(), "c?.wav");

    let first = normalizer().normalize_directory(dir.path()).unwrap();
    assert_eq!(first.renamed.len(), 2);

    let second = normalizer().normalize_directory(dir.path()).unwrap();
    assert!(second.renamed.is_empty());
    assert_eq!(second.already_clean, 2);
}

#[test]
fn colliding_names_keep_the_second_original() {
    let dir = tempdir().unwrap();
    // Both clean to "Hit.mp3"; "Hit?.mp3" sorts first.
    touch(dir.path(), "Hit?.mp3");
    touch(dir.path(), "\u{201C}Hit\u{201D}.mp3");

    let report = normalizer().normalize_directory(dir.path()).unwrap();

    assert_eq!(
        report.renamed,
        vec![Rename { from: "Hit?.mp3".into(), to: "Hit.mp3".into() }]
    );
    assert_eq!(
        report.collisions,
        vec![Rename { from: "\u{201C}Hit\u{201D}.mp3".into(), to: "Hit.mp3".into() }]
    );
    assert_eq!(fs::read(dir.path().join("Hit.mp3")).unwrap(), b"Hit?.mp3");
    assert!(dir.path().join("\u{201C}Hit\u{201D}.mp3").exists());
}

#[test]
fn existing_clean_file_is_never_overwritten() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "My Song.mp3");
    touch(dir.path(), "My  Song.mp3");

    let report = normalizer().normalize_directory(dir.path()).unwrap();

    assert!(report.renamed.is_empty());
    assert_eq!(report.collisions.len(), 1);
    assert_eq!(fs::read(dir.path().join("My Song.mp3")).unwrap(), b"My Song.mp3");
}

#[test]
fn dry_run_reports_without_renaming() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "Hit?.mp3");
    touch(dir.path(), "\u{201C}Hit\u{201D}.mp3");

    let report = normalizer().dry_run(true).normalize_directory(dir.path()).unwrap();

    assert_eq!(report.renamed.len(), 1);
    assert_eq!(report.collisions.len(), 1);
    assert!(!dir.path().join("Hit.mp3").exists());
}

#[test]
fn missing_directory_is_an_error() {
    let dir = tempdir().unwrap();
    let err = normalizer().normalize_directory(dir.path().join("nope")).unwrap_err();
    assert!(matches!(err, LibraryError::DirectoryNotFound(_)));
}
