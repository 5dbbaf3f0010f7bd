use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::utils::{OptimizerError, OptimizerResult};

/// Get file size in bytes
pub fn file_size(path: impl AsRef<Path>) -> OptimizerResult<u64> {
    fs::metadata(path.as_ref())
        .map(|m| m.len())
        .map_err(|e| OptimizerError::io(format!("Failed to get file size: {e}")))
}

/// File name component of `path`, for log lines.
pub fn extract_filename(path: &Path) -> Cow<'_, str> {
    path.file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_else(|| path.to_string_lossy())
}

/// Derive the backup path for a source file: same directory, `-original` suffix.
pub fn backup_path_for(source: &Path) -> PathBuf {
    let stem = source.file_stem().and_then(|s| s.to_str()).unwrap_or("logo");
    let ext = source.extension().and_then(|e| e.to_str()).unwrap_or("png");
    let parent = source.parent().unwrap_or(Path::new(""));
    parent.join(format!("{stem}-original.{ext}"))
}

/// Copy `source` to `backup` unless a file already exists there.
///
/// Returns `true` when a fresh backup was written. An existing backup is
/// never inspected or replaced, so it keeps the bytes from whichever run
/// created it first.
pub fn ensure_backup(source: &Path, backup: &Path) -> OptimizerResult<bool> {
    if backup.exists() {
        debug!("Backup already exists, leaving it untouched: {}", backup.display());
        return Ok(false);
    }

    fs::copy(source, backup).map_err(|e| {
        OptimizerError::io(format!("Failed to write backup '{}': {e}", backup.display()))
    })?;

    debug!("Backup written: {}", backup.display());
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backup_path_keeps_directory_and_extension() {
        let backup = backup_path_for(Path::new("public/logo.png"));
        assert_eq!(backup, PathBuf::from("public/logo-original.png"));
    }

    #[test]
    fn backup_path_for_bare_filename() {
        let backup = backup_path_for(Path::new("logo.png"));
        assert_eq!(backup, PathBuf::from("logo-original.png"));
    }

    #[test]
    fn ensure_backup_copies_once_then_skips() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("logo.png");
        let backup = dir.path().join("logo-original.png");
        fs::write(&source, b"first").unwrap();

        assert!(ensure_backup(&source, &backup).unwrap());
        assert_eq!(fs::read(&backup).unwrap(), b"first");

        // A changed source must not refresh the existing backup.
        fs::write(&source, b"second").unwrap();
        assert!(!ensure_backup(&source, &backup).unwrap());
        assert_eq!(fs::read(&backup).unwrap(), b"first");
    }
}
