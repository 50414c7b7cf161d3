//! Archive commands: `unzip-jar`, `untar`, `gzip`.

use anyhow::{Context, Result};
use flowio_core::archive;
use std::path::Path;

pub async fn run_unzip_jar(jar: &Path, dest: &Path) -> Result<()> {
    let (jar_buf, dest_buf) = (jar.to_path_buf(), dest.to_path_buf());
    tokio::task::spawn_blocking(move || archive::unzip_jar(&dest_buf, &jar_buf))
        .await
        .context("unzip task join")??;
    println!("Extracted {} into {}", jar.display(), dest.display());
    Ok(())
}

pub async fn run_untar(archive_path: &Path, dest: &Path) -> Result<()> {
    let (src, dest_buf) = (archive_path.to_path_buf(), dest.to_path_buf());
    tokio::task::spawn_blocking(move || archive::decompress_tar_gz(&src, &dest_buf))
        .await
        .context("untar task join")??;
    println!("Unpacked {} into {}", archive_path.display(), dest.display());
    Ok(())
}

pub async fn run_gzip(source: &Path, target: &Path) -> Result<()> {
    let (src, dst) = (source.to_path_buf(), target.to_path_buf());
    tokio::task::spawn_blocking(move || archive::gzip_file(&src, &dst))
        .await
        .context("gzip task join")??;
    println!("Compressed {} to {}", source.display(), target.display());
    Ok(())
}
