//! Recursive directory listing and deletion.
//!
//! Traversal is depth-first with an explicit stack (`walkdir`), so tree depth
//! is bounded only by `max_depth`, never by the call stack. Sibling order is
//! whatever the OS returns from `readdir`; only ancestor/descendant order is
//! guaranteed.
//!
//! Concurrent modification of the tree while it is walked or deleted is not
//! coordinated; results are then undefined at the file-system level.

use crate::error::{FsError, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// What a listed path is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    /// Only reported when links are not followed.
    Symlink,
}

/// A path seen by the walker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl FsEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Where a directory appears relative to its contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WalkOrder {
    /// Every directory after all of its descendants.
    #[default]
    PostOrder,
    /// Every directory before its descendants.
    PreOrder,
}

/// Walker configuration.
#[derive(Debug, Clone, Default)]
pub struct WalkOptions {
    pub order: WalkOrder,
    /// Descend into symbolic links to directories (default: false).
    pub follow_symlinks: bool,
    /// Deepest level below the root to list (None = unlimited).
    pub max_depth: Option<usize>,
}

/// List every entry beneath `dir`, depth-first. The root itself is not listed.
///
/// Fails with [`FsError::NotADirectory`] when `dir` is missing or not a
/// directory. Subdirectories that cannot be read, and link cycles when links
/// are followed, are skipped with a warning; the walk itself never fails
/// past the root check.
pub fn list_recursive(dir: &Path, opts: &WalkOptions) -> Result<Vec<FsEntry>> {
    if !dir.is_dir() {
        return Err(FsError::NotADirectory(dir.to_path_buf()));
    }
    tracing::debug!(path = %dir.display(), order = ?opts.order, "listing directory");

    let walker = WalkDir::new(dir)
        .follow_links(opts.follow_symlinks)
        .contents_first(opts.order == WalkOrder::PostOrder)
        .max_depth(opts.max_depth.unwrap_or(usize::MAX));

    let mut entries = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                let path = e.path().map(Path::to_path_buf).unwrap_or_default();
                if e.loop_ancestor().is_some() {
                    tracing::warn!(path = %path.display(), "skipping symlink cycle");
                } else {
                    tracing::warn!(path = %path.display(), "skipping unreadable entry: {}", e);
                }
                continue;
            }
        };

        if entry.depth() == 0 {
            continue;
        }

        let ft = entry.file_type();
        let kind = if ft.is_dir() {
            EntryKind::Directory
        } else if ft.is_symlink() {
            EntryKind::Symlink
        } else {
            EntryKind::File
        };
        entries.push(FsEntry {
            path: entry.into_path(),
            kind,
        });
    }

    tracing::debug!(path = %dir.display(), count = entries.len(), "listing done");
    Ok(entries)
}

/// Immediate children of `dir`, symlinks not followed.
///
/// Same root check as [`list_recursive`]; a root that cannot be read lists
/// as empty.
pub fn list_dir(dir: &Path) -> Result<Vec<FsEntry>> {
    let opts = WalkOptions {
        order: WalkOrder::PreOrder,
        follow_symlinks: false,
        max_depth: Some(1),
    };
    list_recursive(dir, &opts)
}

/// Outcome of [`delete_directory`].
#[derive(Debug)]
pub struct DeleteReport {
    pub root: PathBuf,
    /// Entries removed, in removal order (root excluded).
    pub removed: Vec<PathBuf>,
    /// Entries that could not be removed, with the error for each.
    pub failed: Vec<(PathBuf, io::Error)>,
    /// Whether the root directory itself was removed.
    pub root_removed: bool,
}

impl DeleteReport {
    fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            removed: Vec::new(),
            failed: Vec::new(),
            root_removed: false,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Turn a report with failures into [`FsError::PartialDelete`].
    pub fn into_result(self) -> Result<Self> {
        if self.failed.is_empty() {
            return Ok(self);
        }
        Err(FsError::PartialDelete {
            root: self.root,
            failed: self.failed.into_iter().map(|(p, _)| p).collect(),
        })
    }
}

/// Remove `dir` and everything beneath it.
///
/// No-op when `dir` is missing or is not a directory (a symlink to a
/// directory counts as "not a directory" and is left alone, with or without
/// a trailing separator). Links inside the tree are removed, never followed.
/// Every entry is attempted; failures are collected in the report. The root
/// is only removed when every entry beneath it was.
pub fn delete_directory(dir: &Path) -> Result<DeleteReport> {
    delete_entries_with(dir, |entry| match entry.kind {
        EntryKind::Directory => fs::remove_dir(&entry.path),
        EntryKind::File | EntryKind::Symlink => fs::remove_file(&entry.path),
    })
}

fn delete_entries_with<F>(dir: &Path, mut remove: F) -> Result<DeleteReport>
where
    F: FnMut(&FsEntry) -> io::Result<()>,
{
    // "link/" would lstat the link target; drop trailing separators first.
    let dir: PathBuf = dir.components().collect();
    let mut report = DeleteReport::new(&dir);
    match fs::symlink_metadata(&dir) {
        Ok(md) if md.is_dir() => {}
        _ => return Ok(report),
    }

    for entry in list_recursive(&dir, &WalkOptions::default())? {
        match remove(&entry) {
            Ok(()) => report.removed.push(entry.path),
            Err(e) => {
                tracing::warn!(path = %entry.path.display(), "could not delete: {}", e);
                report.failed.push((entry.path, e));
            }
        }
    }

    if report.failed.is_empty() {
        match fs::remove_dir(&dir) {
            Ok(()) => report.root_removed = true,
            Err(e) => {
                tracing::warn!(path = %dir.display(), "could not delete root: {}", e);
                report.failed.push((dir.clone(), e));
            }
        }
    } else {
        tracing::warn!(
            path = %dir.display(),
            failed = report.failed.len(),
            "leaving root in place after failed deletes"
        );
    }

    tracing::debug!(
        path = %dir.display(),
        removed = report.removed.len(),
        root_removed = report.root_removed,
        "delete done"
    );
    Ok(report)
}
