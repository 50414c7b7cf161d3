use crate::error::{FsError, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use zip::ZipArchive;

/// A JAR to extract and the directory to extract it into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JarPath {
    pub destination: PathBuf,
    pub jar_path: PathBuf,
}

impl JarPath {
    pub fn new(destination: impl Into<PathBuf>, jar_path: impl Into<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
            jar_path: jar_path.into(),
        }
    }
}

fn archive_err(path: &Path, e: zip::result::ZipError) -> FsError {
    match e {
        zip::result::ZipError::Io(source) => FsError::io(path, source),
        other => FsError::Archive {
            path: path.to_path_buf(),
            message: other.to_string(),
        },
    }
}

/// Extract every entry of the zip/JAR at `jar` into `destination`.
///
/// Directory entries are created first, then file entries are written with
/// their parent directories created as needed. Entries that would land
/// outside `destination` fail the whole extraction before anything is written.
pub fn unzip_jar(destination: &Path, jar: &Path) -> Result<()> {
    tracing::debug!(jar = %jar.display(), dest = %destination.display(), "extracting jar");
    let f = File::open(jar).map_err(|e| FsError::io(jar, e))?;
    let mut archive = ZipArchive::new(BufReader::new(f)).map_err(|e| archive_err(jar, e))?;

    let mut dirs = Vec::new();
    let mut files = Vec::new();
    for i in 0..archive.len() {
        let entry = archive.by_index(i).map_err(|e| archive_err(jar, e))?;
        let rel = entry
            .enclosed_name()
            .map(|p| p.to_path_buf())
            .ok_or_else(|| FsError::UnsafeArchiveEntry {
                archive: jar.to_path_buf(),
                entry: entry.name().to_string(),
            })?;
        if entry.is_dir() {
            dirs.push(destination.join(rel));
        } else {
            files.push((i, destination.join(rel)));
        }
    }

    for dir in &dirs {
        fs::create_dir_all(dir).map_err(|e| FsError::io(dir, e))?;
    }

    for (i, out_path) in &files {
        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent).map_err(|e| FsError::io(parent, e))?;
        }
        let mut entry = archive.by_index(*i).map_err(|e| archive_err(jar, e))?;
        let mut out = File::create(out_path).map_err(|e| FsError::io(out_path, e))?;
        io::copy(&mut entry, &mut out).map_err(|e| FsError::io(out_path, e))?;
    }

    tracing::debug!(
        jar = %jar.display(),
        dirs = dirs.len(),
        files = files.len(),
        "jar extracted"
    );
    Ok(())
}

/// Extract each JAR in order, stopping at the first failure.
pub fn unzip_jars(jars: &[JarPath]) -> Result<()> {
    for jar in jars {
        unzip_jar(&jar.destination, &jar.jar_path)?;
    }
    Ok(())
}
