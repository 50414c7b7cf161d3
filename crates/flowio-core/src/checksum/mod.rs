//! Streaming checksums (MD5, SHA-1, SHA-256) over files, readers and URLs.
//!
//! Every source is folded chunk by chunk into a single running digest, so
//! memory use is bounded by the buffer size regardless of input length. The
//! buffer size never changes the result.

mod remote;
mod source;

pub use remote::digest_url;
pub use source::DigestSource;

use crate::config::{ChecksumConfig, HttpOptions};
use crate::error::{FsError, Result};
use md5::Md5;
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Digest, Sha256};
use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::str::FromStr;

/// Default read buffer for local digests.
pub const DEFAULT_BUF_SIZE: usize = 8 * 1024;

/// Supported digest algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DigestAlgorithm {
    #[serde(rename = "md5")]
    Md5,
    #[serde(rename = "sha-1", alias = "sha1")]
    Sha1,
    #[serde(rename = "sha-256", alias = "sha256")]
    Sha256,
}

impl DigestAlgorithm {
    /// Digest width in bytes; the hex form is twice as long.
    pub fn output_len(self) -> usize {
        match self {
            DigestAlgorithm::Md5 => 16,
            DigestAlgorithm::Sha1 => 20,
            DigestAlgorithm::Sha256 => 32,
        }
    }

    /// Canonical name, as accepted by `from_str`.
    pub fn name(self) -> &'static str {
        match self {
            DigestAlgorithm::Md5 => "MD5",
            DigestAlgorithm::Sha1 => "SHA-1",
            DigestAlgorithm::Sha256 => "SHA-256",
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DigestAlgorithm {
    type Err = FsError;

    /// Case-insensitive; the dash in `SHA-1` / `SHA-256` is optional.
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "md5" => Ok(DigestAlgorithm::Md5),
            "sha1" => Ok(DigestAlgorithm::Sha1),
            "sha256" => Ok(DigestAlgorithm::Sha256),
            _ => Err(FsError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

/// Running digest for one of the supported algorithms.
pub(crate) enum Hasher {
    Md5(Md5),
    Sha1(Sha1),
    Sha256(Sha256),
}

impl Hasher {
    pub(crate) fn new(algorithm: DigestAlgorithm) -> Self {
        match algorithm {
            DigestAlgorithm::Md5 => Hasher::Md5(Md5::new()),
            DigestAlgorithm::Sha1 => Hasher::Sha1(Sha1::new()),
            DigestAlgorithm::Sha256 => Hasher::Sha256(Sha256::new()),
        }
    }

    pub(crate) fn update(&mut self, chunk: &[u8]) {
        match self {
            Hasher::Md5(h) => h.update(chunk),
            Hasher::Sha1(h) => h.update(chunk),
            Hasher::Sha256(h) => h.update(chunk),
        }
    }

    /// Lowercase hex, two characters per digest byte.
    pub(crate) fn finalize_hex(self) -> String {
        match self {
            Hasher::Md5(h) => hex::encode(h.finalize()),
            Hasher::Sha1(h) => hex::encode(h.finalize()),
            Hasher::Sha256(h) => hex::encode(h.finalize()),
        }
    }
}

/// Fold everything `reader` yields into a digest and return it as lowercase hex.
///
/// Reads in chunks of `buffer_size` bytes (clamped to at least 1) until a
/// zero-length read. Interrupted reads are retried.
pub fn digest_reader<R: Read>(
    mut reader: R,
    algorithm: DigestAlgorithm,
    buffer_size: usize,
) -> io::Result<String> {
    let mut hasher = Hasher::new(algorithm);
    let mut buf = vec![0u8; buffer_size.max(1)];
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buf[..n]);
    }
    Ok(hasher.finalize_hex())
}

/// Digest of the bytes in memory.
pub fn digest_bytes(data: &[u8], algorithm: DigestAlgorithm) -> String {
    let mut hasher = Hasher::new(algorithm);
    hasher.update(data);
    hasher.finalize_hex()
}

/// Compute the digest of a local file. The file is closed on every exit path.
pub fn digest_path(path: &Path, algorithm: DigestAlgorithm, buffer_size: usize) -> Result<String> {
    tracing::debug!(path = %path.display(), %algorithm, "computing file digest");
    let f = File::open(path).map_err(|e| FsError::io(path, e))?;
    let digest = digest_reader(f, algorithm, buffer_size).map_err(|e| FsError::io(path, e))?;
    tracing::debug!(path = %path.display(), %algorithm, %digest, "file digest done");
    Ok(digest)
}

/// MD5 of a local file.
pub fn md5_path(path: &Path) -> Result<String> {
    digest_path(path, DigestAlgorithm::Md5, DEFAULT_BUF_SIZE)
}

/// SHA-1 of a local file.
pub fn sha1_path(path: &Path) -> Result<String> {
    digest_path(path, DigestAlgorithm::Sha1, DEFAULT_BUF_SIZE)
}

/// MD5 of the body served at `url`, with default transfer options.
pub fn md5_url(url: &str) -> Result<String> {
    digest_url(url, DigestAlgorithm::Md5, &HttpOptions::default())
}

/// Digest a local path or a remote URL.
pub fn digest_source(
    source: &DigestSource,
    algorithm: DigestAlgorithm,
    checksum: &ChecksumConfig,
    http: &HttpOptions,
) -> Result<String> {
    match source {
        DigestSource::Path(path) => digest_path(path, algorithm, checksum.buffer_bytes),
        DigestSource::Url(url) => digest_url(url, algorithm, http),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MD5_EMPTY: &str = "d41d8cd98f00b204e9800998ecf8427e";
    const SHA1_EMPTY: &str = "da39a3ee5e6b4b0d3255bfef95601890afd80709";
    const SHA256_EMPTY: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
    const MD5_ABC: &str = "900150983cd24fb0d6963f7d28e17f72";
    const SHA1_ABC: &str = "a9993e364706816aba3e25717850c26c9cd0d89d";

    #[test]
    fn empty_input_digests() {
        assert_eq!(digest_reader(&b""[..], DigestAlgorithm::Md5, 64).unwrap(), MD5_EMPTY);
        assert_eq!(digest_reader(&b""[..], DigestAlgorithm::Sha1, 64).unwrap(), SHA1_EMPTY);
        assert_eq!(
            digest_reader(&b""[..], DigestAlgorithm::Sha256, 64).unwrap(),
            SHA256_EMPTY
        );
    }

    #[test]
    fn abc_digests() {
        assert_eq!(digest_bytes(b"abc", DigestAlgorithm::Md5), MD5_ABC);
        assert_eq!(digest_bytes(b"abc", DigestAlgorithm::Sha1), SHA1_ABC);
    }

    #[test]
    fn empty_file_digest() {
        let f = tempfile::NamedTempFile::new().unwrap();
        assert_eq!(md5_path(f.path()).unwrap(), MD5_EMPTY);
        assert_eq!(sha1_path(f.path()).unwrap(), SHA1_EMPTY);
    }

    #[test]
    fn abc_file_digest() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"abc").unwrap();
        f.flush().unwrap();
        assert_eq!(md5_path(f.path()).unwrap(), MD5_ABC);
        assert_eq!(sha1_path(f.path()).unwrap(), SHA1_ABC);
    }

    #[test]
    fn buffer_size_does_not_change_digest() {
        let data: Vec<u8> = (0u8..=255).cycle().take(10_000).collect();
        for alg in [DigestAlgorithm::Md5, DigestAlgorithm::Sha1, DigestAlgorithm::Sha256] {
            let expected = digest_bytes(&data, alg);
            for size in [0, 1, 7, 64, 1024, 8192, 65536] {
                assert_eq!(digest_reader(&data[..], alg, size).unwrap(), expected);
            }
        }
    }

    #[test]
    fn hex_length_matches_output_width() {
        for alg in [DigestAlgorithm::Md5, DigestAlgorithm::Sha1, DigestAlgorithm::Sha256] {
            for input in [&b""[..], &b"x"[..], &b"hello world, this is a longer input"[..]] {
                let d = digest_bytes(input, alg);
                assert_eq!(d.len(), alg.output_len() * 2);
                assert!(d.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
                assert_eq!(d, digest_bytes(input, alg));
            }
        }
        assert_eq!(digest_bytes(b"q", DigestAlgorithm::Md5).len(), 32);
        assert_eq!(digest_bytes(b"q", DigestAlgorithm::Sha1).len(), 40);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = md5_path(&dir.path().join("nope.bin")).unwrap_err();
        assert_eq!(err.io_kind(), Some(io::ErrorKind::NotFound));
    }

    #[test]
    fn read_failure_mid_stream_propagates() {
        struct Failing(bool);
        impl Read for Failing {
            fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
                if self.0 {
                    return Err(io::Error::new(io::ErrorKind::Other, "disk gone"));
                }
                self.0 = true;
                buf[0] = b'a';
                Ok(1)
            }
        }
        let err = digest_reader(Failing(false), DigestAlgorithm::Sha1, 16).unwrap_err();
        assert_eq!(err.to_string(), "disk gone");
    }

    #[test]
    fn interrupted_reads_are_retried() {
        struct Flaky {
            interrupted: bool,
            data: &'static [u8],
        }
        impl Read for Flaky {
            fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
                if !self.interrupted {
                    self.interrupted = true;
                    return Err(io::Error::new(io::ErrorKind::Interrupted, "signal"));
                }
                let n = self.data.len().min(buf.len());
                buf[..n].copy_from_slice(&self.data[..n]);
                self.data = &self.data[n..];
                Ok(n)
            }
        }
        let r = Flaky {
            interrupted: false,
            data: b"abc",
        };
        assert_eq!(digest_reader(r, DigestAlgorithm::Md5, 2).unwrap(), MD5_ABC);
    }

    #[test]
    fn algorithm_names_parse() {
        assert_eq!("MD5".parse::<DigestAlgorithm>().unwrap(), DigestAlgorithm::Md5);
        assert_eq!("SHA-1".parse::<DigestAlgorithm>().unwrap(), DigestAlgorithm::Sha1);
        assert_eq!("sha1".parse::<DigestAlgorithm>().unwrap(), DigestAlgorithm::Sha1);
        assert_eq!("Sha-256".parse::<DigestAlgorithm>().unwrap(), DigestAlgorithm::Sha256);
        let err = "SHA-512".parse::<DigestAlgorithm>().unwrap_err();
        assert!(matches!(err, FsError::UnsupportedAlgorithm(ref s) if s == "SHA-512"));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for alg in [DigestAlgorithm::Md5, DigestAlgorithm::Sha1, DigestAlgorithm::Sha256] {
            assert_eq!(alg.to_string().parse::<DigestAlgorithm>().unwrap(), alg);
        }
    }

    #[test]
    fn digest_source_dispatches_local_path() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"abc").unwrap();
        f.flush().unwrap();
        let src = DigestSource::parse(f.path().to_str().unwrap());
        let d = digest_source(
            &src,
            DigestAlgorithm::Sha1,
            &ChecksumConfig::default(),
            &HttpOptions::default(),
        )
        .unwrap();
        assert_eq!(d, SHA1_ABC);
    }
}
