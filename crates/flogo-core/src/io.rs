use crate::error::{FlogoError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Atomically write `data` to `path` using a tempfile in the same directory.
/// Readers never observe a half-written descriptor.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Read and decode a JSON document.
///
/// A missing file is `NotFound`; any other read failure or a decode failure
/// is `CorruptManifest` naming the file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(FlogoError::NotFound(path.to_path_buf()));
        }
        Err(e) => return Err(FlogoError::corrupt(path, e)),
    };
    serde_json::from_str(&data).map_err(|e| FlogoError::corrupt(path, e))
}

/// Pretty-print `value` as JSON and write it atomically.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut data = serde_json::to_string_pretty(value)?;
    data.push('\n');
    atomic_write(path, data.as_bytes())
}

/// Recursively copy the contents of `from` into `to`, creating `to` as needed.
/// Existing files at the destination are overwritten.
pub fn copy_dir(from: &Path, to: &Path) -> Result<()> {
    std::fs::create_dir_all(to)?;
    for entry in std::fs::read_dir(from)? {
        let entry = entry?;
        let target = to.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir(&entry.path(), &target)?;
        } else {
            std::fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

/// Canonical absolute form of `path`. A path that does not exist yet is
/// resolved through its deepest existing ancestor.
pub fn canonical_lenient(path: &Path) -> Result<PathBuf> {
    match path.canonicalize() {
        Ok(p) => Ok(p),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            match (path.parent(), path.file_name()) {
                (Some(parent), Some(name)) => {
                    let parent = if parent.as_os_str().is_empty() {
                        Path::new(".")
                    } else {
                        parent
                    };
                    Ok(canonical_lenient(parent)?.join(name))
                }
                _ => Err(e.into()),
            }
        }
        Err(e) => Err(e.into()),
    }
}
