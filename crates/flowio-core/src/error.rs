//! Error taxonomy shared by the file-system helpers.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by the library operations.
///
/// Each operation fails independently; nothing here aggregates across calls.
/// The one exception is recursive deletion, which collects per-entry failures
/// into [`FsError::PartialDelete`].
#[derive(Debug, Error)]
pub enum FsError {
    /// Open, read, write or metadata failure on a local path.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Requested digest algorithm is not one of MD5, SHA-1 or SHA-256.
    #[error("unsupported digest algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Walker target missing or not a directory.
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Remote source answered with a non-2xx status.
    #[error("GET {url} returned HTTP {status}")]
    Http { url: String, status: u32 },

    /// libcurl failed to set up or complete the transfer.
    #[error("transfer from {url} failed: {source}")]
    Transfer {
        url: String,
        #[source]
        source: curl::Error,
    },

    /// Archive could not be parsed or unpacked.
    #[error("archive {}: {message}", .path.display())]
    Archive { path: PathBuf, message: String },

    /// Archive entry would be written outside the destination directory.
    #[error("archive {} contains unsafe entry {entry:?}", .archive.display())]
    UnsafeArchiveEntry { archive: PathBuf, entry: String },

    /// Some entries of a recursive deletion could not be removed.
    #[error("could not fully delete {}: {} left behind", .root.display(), entry_count(.failed))]
    PartialDelete { root: PathBuf, failed: Vec<PathBuf> },
}

impl FsError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        FsError::Io {
            path: path.into(),
            source,
        }
    }

    /// Kind of the underlying I/O error, if this is an I/O failure.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            FsError::Io { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}

fn entry_count(failed: &[PathBuf]) -> String {
    match failed.len() {
        1 => "1 entry".to_string(),
        n => format!("{n} entries"),
    }
}

pub type Result<T> = std::result::Result<T, FsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_display_includes_path() {
        let e = FsError::io(
            "/tmp/missing.bin",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        let s = e.to_string();
        assert!(s.contains("/tmp/missing.bin"));
        assert!(s.contains("no such file"));
        assert_eq!(e.io_kind(), Some(io::ErrorKind::NotFound));
    }

    #[test]
    fn partial_delete_display_pluralizes() {
        let one = FsError::PartialDelete {
            root: PathBuf::from("root"),
            failed: vec![PathBuf::from("root/a")],
        };
        assert!(one.to_string().contains("1 entry left behind"));
        let two = FsError::PartialDelete {
            root: PathBuf::from("root"),
            failed: vec![PathBuf::from("root/a"), PathBuf::from("root/b")],
        };
        assert!(two.to_string().contains("2 entries left behind"));
    }

    #[test]
    fn non_io_errors_have_no_io_kind() {
        let e = FsError::UnsupportedAlgorithm("SHA-512".into());
        assert_eq!(e.io_kind(), None);
        assert_eq!(e.to_string(), "unsupported digest algorithm: SHA-512");
    }
}
