//! `flowio list <dir>` – recursive listing.

use anyhow::{Context, Result};
use flowio_core::config::FlowioConfig;
use flowio_core::walk::{self, EntryKind, WalkOrder};
use std::path::Path;

pub async fn run_list(
    cfg: &FlowioConfig,
    dir: &Path,
    pre_order: bool,
    follow_symlinks: bool,
) -> Result<()> {
    let order = if pre_order {
        WalkOrder::PreOrder
    } else {
        WalkOrder::PostOrder
    };
    let mut opts = cfg.walk.options(order);
    opts.follow_symlinks |= follow_symlinks;

    let entries = tokio::task::spawn_blocking({
        let dir = dir.to_path_buf();
        move || walk::list_recursive(&dir, &opts)
    })
    .await
    .context("list task join")??;

    for e in entries {
        match e.kind {
            EntryKind::Directory => println!("{}/", e.path.display()),
            EntryKind::File | EntryKind::Symlink => println!("{}", e.path.display()),
        }
    }
    Ok(())
}
