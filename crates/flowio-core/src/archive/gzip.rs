use crate::error::{FsError, Result};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

const BUF_SIZE: usize = 64 * 1024;

/// Compress `source` into a new gzip file at `target` (overwritten if present).
pub fn gzip_file(source: &Path, target: &Path) -> Result<()> {
    tracing::debug!(source = %source.display(), target = %target.display(), "gzip");
    let mut input = File::open(source).map_err(|e| FsError::io(source, e))?;
    let output = File::create(target).map_err(|e| FsError::io(target, e))?;
    let mut encoder = GzEncoder::new(output, Compression::default());

    let mut buf = vec![0u8; BUF_SIZE];
    loop {
        let n = match input.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(FsError::io(source, e)),
        };
        encoder
            .write_all(&buf[..n])
            .map_err(|e| FsError::io(target, e))?;
    }
    encoder
        .finish()
        .and_then(|mut f| f.flush())
        .map_err(|e| FsError::io(target, e))?;
    Ok(())
}
