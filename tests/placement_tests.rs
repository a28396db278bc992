// Integration tests for the collision-safe placement module

use std::fs;
use std::path::Path;

use movieshelf::placement::{place_file, place_subtitle, resolve_destination, PlacementError};

fn touch(path: &Path) {
    fs::write(path, b"occupied").unwrap();
}

#[test]
fn test_first_candidate_when_free() {
    let temp = tempfile::tempdir().unwrap();
    let dest = resolve_destination(temp.path(), "Dune [tmdbid-438631] - EN", ".mkv");
    assert_eq!(
        dest.file_name().unwrap().to_str().unwrap(),
        "Dune [tmdbid-438631] - EN.mkv"
    );
}

#[test]
fn test_collision_starts_counter_at_two() {
    let temp = tempfile::tempdir().unwrap();
    touch(&temp.path().join("Movie.mkv"));

    let dest = resolve_destination(temp.path(), "Movie", ".mkv");
    assert_eq!(dest.file_name().unwrap().to_str().unwrap(), "Movie 2.mkv");
}

#[test]
fn test_counter_skips_taken_slots() {
    let temp = tempfile::tempdir().unwrap();
    touch(&temp.path().join("Movie.mkv"));
    touch(&temp.path().join("Movie 2.mkv"));
    touch(&temp.path().join("Movie 3.mkv"));

    let dest = resolve_destination(temp.path(), "Movie", ".mkv");
    assert_eq!(dest.file_name().unwrap().to_str().unwrap(), "Movie 4.mkv");
}

#[test]
fn test_place_file_moves_and_creates_directory() {
    let temp = tempfile::tempdir().unwrap();
    let source = temp.path().join("source.mkv");
    fs::write(&source, b"movie bytes").unwrap();

    let folder = temp.path().join("movies").join("Movie [tmdbid-1]");
    let placed = place_file(&folder, &source, "Movie [tmdbid-1] - EN").unwrap();

    assert_eq!(
        placed,
        folder.join("Movie [tmdbid-1] - EN.mkv")
    );
    assert!(!source.exists());
    assert_eq!(fs::read(&placed).unwrap(), b"movie bytes");
}

#[test]
fn test_place_file_never_overwrites() {
    let temp = tempfile::tempdir().unwrap();
    let folder = temp.path().join("movies");
    fs::create_dir_all(&folder).unwrap();
    fs::write(folder.join("Movie.mkv"), b"original").unwrap();

    let source = temp.path().join("incoming.mkv");
    fs::write(&source, b"incoming").unwrap();

    let placed = place_file(&folder, &source, "Movie").unwrap();

    assert_eq!(placed.file_name().unwrap().to_str().unwrap(), "Movie 2.mkv");
    assert_eq!(fs::read(folder.join("Movie.mkv")).unwrap(), b"original");
    assert_eq!(fs::read(&placed).unwrap(), b"incoming");
}

#[test]
fn test_missing_source_leaves_no_trace() {
    let temp = tempfile::tempdir().unwrap();
    let folder = temp.path().join("movies");
    let source = temp.path().join("does-not-exist.mkv");

    let err = place_file(&folder, &source, "Movie").unwrap_err();

    assert!(matches!(err, PlacementError::SourceNotFound(_)));
    // Failure before any filesystem change: no half-created destination
    assert!(!folder.exists());
}

#[test]
fn test_subtitle_gets_language_extension() {
    let temp = tempfile::tempdir().unwrap();
    let source = temp.path().join("subs.srt");
    fs::write(&source, b"1\n00:00 --> 00:01\nhi\n").unwrap();

    let folder = temp.path().join("movies");
    let placed = place_subtitle(&folder, &source, "Movie - EN ENtit", "en").unwrap();

    assert_eq!(
        placed.file_name().unwrap().to_str().unwrap(),
        "Movie - EN ENtit.en.srt"
    );
    assert!(!source.exists());
}

#[test]
fn test_subtitle_has_its_own_collision_counter() {
    let temp = tempfile::tempdir().unwrap();
    let folder = temp.path().join("movies");
    fs::create_dir_all(&folder).unwrap();
    fs::write(folder.join("Movie.en.srt"), b"old").unwrap();

    let source = temp.path().join("subs.srt");
    fs::write(&source, b"new").unwrap();

    let placed = place_subtitle(&folder, &source, "Movie", "en").unwrap();

    assert_eq!(
        placed.file_name().unwrap().to_str().unwrap(),
        "Movie 2.en.srt"
    );
    assert_eq!(fs::read(folder.join("Movie.en.srt")).unwrap(), b"old");
}

#[test]
fn test_extensionless_source() {
    let temp = tempfile::tempdir().unwrap();
    let source = temp.path().join("raw");
    fs::write(&source, b"data").unwrap();

    let folder = temp.path().join("movies");
    let placed = place_file(&folder, &source, "Movie - ").unwrap();

    assert_eq!(placed.file_name().unwrap().to_str().unwrap(), "Movie - ");
}
