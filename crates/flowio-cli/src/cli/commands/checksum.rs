//! `flowio checksum <source>` – digest a file or URL.

use anyhow::{Context, Result};
use flowio_core::checksum::{self, DigestAlgorithm, DigestSource};
use flowio_core::config::FlowioConfig;

/// Compute and print the digest of `source` as `<hex>  <source>`.
pub async fn run_checksum(
    cfg: &FlowioConfig,
    source: &str,
    algorithm: Option<DigestAlgorithm>,
) -> Result<()> {
    let algorithm = algorithm.unwrap_or(cfg.checksum.default_algorithm);
    let src = DigestSource::parse(source);
    let digest = tokio::task::spawn_blocking({
        let src = src.clone();
        let checksum_cfg = cfg.checksum.clone();
        let http = cfg.http.clone();
        move || checksum::digest_source(&src, algorithm, &checksum_cfg, &http)
    })
    .await
    .context("checksum task join")??;
    println!("{}  {}", digest, src);
    Ok(())
}
