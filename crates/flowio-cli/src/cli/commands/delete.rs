//! `flowio delete <dir>` – recursive deletion with a failure report.

use anyhow::{Context, Result};
use flowio_core::walk;
use std::path::Path;

/// Deletes the tree. Entries that could not be removed are printed, and the
/// command then fails so the exit status reflects the partial deletion.
pub async fn run_delete(dir: &Path) -> Result<()> {
    let report = tokio::task::spawn_blocking({
        let dir = dir.to_path_buf();
        move || walk::delete_directory(&dir)
    })
    .await
    .context("delete task join")??;

    if !report.root_removed && report.is_complete() {
        println!("Nothing to delete at {}", dir.display());
        return Ok(());
    }
    for (path, err) in &report.failed {
        eprintln!("could not delete {}: {}", path.display(), err);
    }
    println!(
        "Removed {} entr{} under {}",
        report.removed.len(),
        if report.removed.len() == 1 { "y" } else { "ies" },
        dir.display()
    );
    report.into_result()?;
    Ok(())
}
