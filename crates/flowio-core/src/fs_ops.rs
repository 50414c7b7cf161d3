//! Small file helpers: creation, whole-file text I/O, directory batches, sizes.

use crate::error::{FsError, Result};
use std::fs::{self, OpenOptions};
use std::io::{self, BufRead, BufReader};
use std::path::Path;

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

/// Create an empty file (and its parent directories) unless `path` already exists.
pub fn create_file(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| FsError::io(parent, e))?;
    }
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(_) => Ok(()),
        // Lost a race with another creator; the file exists either way.
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(FsError::io(path, e)),
    }
}

/// Replace the contents of `path` with `text`.
pub fn save_file(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|e| FsError::io(path, e))
}

/// Contents of `path` with line terminators dropped, or `""` if it does not exist.
pub fn load_file(path: &Path) -> Result<String> {
    let f = match fs::File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(String::new()),
        Err(e) => return Err(FsError::io(path, e)),
    };
    let mut text = String::new();
    for line in BufReader::new(f).lines() {
        text.push_str(&line.map_err(|e| FsError::io(path, e))?);
    }
    Ok(text)
}

/// Create `location/name` for each name that does not exist yet.
///
/// Each directory is created one level deep, so `location` must exist.
pub fn create_directories<S: AsRef<str>>(location: &Path, names: &[S]) -> Result<()> {
    for name in names {
        let dir = location.join(name.as_ref());
        if dir.exists() {
            continue;
        }
        fs::create_dir(&dir).map_err(|e| FsError::io(&dir, e))?;
        tracing::debug!(path = %dir.display(), "created directory");
    }
    Ok(())
}

/// Size of `path` in bytes; 0 if it does not exist or cannot be read.
pub fn file_size_bytes(path: &Path) -> u64 {
    fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

/// Size of `path` in whole KiB (rounded down).
pub fn file_size_kib(path: &Path) -> u64 {
    file_size_bytes(path) / KIB
}

/// Size of `path` in whole MiB (rounded down).
pub fn file_size_mib(path: &Path) -> u64 {
    file_size_bytes(path) / MIB
}
