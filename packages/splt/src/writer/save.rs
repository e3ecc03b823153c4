//! Atomic file output.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Result, SplitError};

/// Resolve an output key to a file path below `output_dir`.
///
/// `/` in the key becomes a directory separator and `extension` is appended
/// to the last segment.
#[must_use]
pub fn output_path(output_dir: &Path, key: &str, extension: &str) -> PathBuf {
    let mut path = output_dir.to_path_buf();
    let mut segments = key.split('/').filter(|s| !s.is_empty()).peekable();
    while let Some(segment) = segments.next() {
        if segments.peek().is_some() {
            path.push(segment);
        } else {
            path.push(format!("{segment}.{extension}"));
        }
    }
    path
}

/// Create the parent directory of an output file.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    let Some(dir) = path.parent() else {
        return Ok(());
    };
    fs::create_dir_all(dir).map_err(|source| SplitError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Write `content` to `path`.
///
/// Uses atomic write pattern: writes to temp file, syncs to disk, then renames.
/// A crash mid-write leaves any previous version of the file intact.
pub fn save_file(path: &Path, content: &str) -> Result<()> {
    let write_err = |source: std::io::Error| SplitError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let temp_file = path.with_file_name(format!(".{file_name}.tmp"));

    {
        let mut file = File::create(&temp_file).map_err(write_err)?;
        file.write_all(content.as_bytes()).map_err(write_err)?;
        file.sync_all().map_err(write_err)?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path).map_err(write_err)?;
    }

    fs::rename(&temp_file, path).map_err(write_err)?;

    tracing::info!(path = %path.display(), bytes = content.len(), "Wrote file");
    Ok(())
}
