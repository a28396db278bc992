use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlacementError {
    #[error("source file not found: {0}")]
    SourceNotFound(PathBuf),
    #[error("could not create destination directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not move {from} to {to}: {source}")]
    Move {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// First free path of the form `dir/{base}{ext}`, then `dir/{base} 2{ext}`,
/// `dir/{base} 3{ext}`, ... Existing files are never reused or overwritten.
pub fn resolve_destination(dir: &Path, base: &str, ext: &str) -> PathBuf {
    let first = dir.join(format!("{base}{ext}"));
    if !first.exists() {
        return first;
    }

    let mut counter: u32 = 2;
    loop {
        let candidate = dir.join(format!("{base} {counter}{ext}"));
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}

/// Moves `source` into `dir` under the collision-free name derived from
/// `base` plus the source's extension. The directory is created with all
/// parents if missing. Returns the final destination path.
pub fn place_file(dir: &Path, source: &Path, base: &str) -> Result<PathBuf, PlacementError> {
    place_with_extension(dir, source, base, &extension_of(source))
}

/// Moves a subtitle file into `dir` next to its movie: same `base`, but a
/// two-part extension `.{lang_code}{original extension}` (e.g. `.en.srt`).
/// Runs the same collision probe as the primary move, independently.
pub fn place_subtitle(
    dir: &Path,
    source: &Path,
    base: &str,
    lang_code: &str,
) -> Result<PathBuf, PlacementError> {
    let ext = format!(".{}{}", lang_code, extension_of(source));
    place_with_extension(dir, source, base, &ext)
}

fn place_with_extension(
    dir: &Path,
    source: &Path,
    base: &str,
    ext: &str,
) -> Result<PathBuf, PlacementError> {
    if !source.is_file() {
        return Err(PlacementError::SourceNotFound(source.to_path_buf()));
    }

    fs::create_dir_all(dir).map_err(|e| PlacementError::CreateDir {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let destination = resolve_destination(dir, base, ext);
    move_file(source, &destination)?;
    Ok(destination)
}

/// The source's extension including the leading dot, or an empty string.
fn extension_of(path: &Path) -> String {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!(".{ext}"),
        None => String::new(),
    }
}

/// Renames `source` to `destination`, copying and deleting when the rename
/// crosses filesystems. From the caller's perspective the move is all or
/// nothing: on any failure the source still exists and no partial
/// destination file is left behind.
fn move_file(source: &Path, destination: &Path) -> Result<(), PlacementError> {
    match fs::rename(source, destination) {
        Ok(()) => Ok(()),
        Err(e) if is_cross_device(&e) => copy_then_remove(source, destination),
        Err(e) => Err(PlacementError::Move {
            from: source.to_path_buf(),
            to: destination.to_path_buf(),
            source: e,
        }),
    }
}

fn is_cross_device(error: &io::Error) -> bool {
    // EXDEV is 18 on Linux; the kind check covers other platforms
    error.kind() == io::ErrorKind::CrossesDevices || error.raw_os_error() == Some(18)
}

fn copy_then_remove(source: &Path, destination: &Path) -> Result<(), PlacementError> {
    let move_error = |e: io::Error| PlacementError::Move {
        from: source.to_path_buf(),
        to: destination.to_path_buf(),
        source: e,
    };

    if let Err(e) = fs::copy(source, destination) {
        // Don't leave a truncated file at the destination
        let _ = fs::remove_file(destination);
        return Err(move_error(e));
    }

    if let Err(e) = fs::remove_file(source) {
        // Copy landed but the source is stuck; undo the copy so the caller
        // sees an untouched source rather than a duplicate
        let _ = fs::remove_file(destination);
        return Err(move_error(e));
    }

    Ok(())
}
