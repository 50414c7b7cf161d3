//! Digest of a remote body, streamed through libcurl.
//!
//! The response is never buffered whole; each chunk libcurl hands to the
//! write callback goes straight into the running digest.

use super::{DigestAlgorithm, Hasher};
use crate::config::HttpOptions;
use crate::error::{FsError, Result};
use std::time::Duration;

/// GET `url` and return the digest of the response body as lowercase hex.
///
/// Follows redirects. Runs in the current thread; call from `spawn_blocking`
/// if used from async code. The curl handle is released on every exit path.
pub fn digest_url(url: &str, algorithm: DigestAlgorithm, opts: &HttpOptions) -> Result<String> {
    tracing::debug!(url, %algorithm, "computing remote digest");
    let transfer_err = |source: curl::Error| FsError::Transfer {
        url: url.to_string(),
        source,
    };

    let mut hasher = Hasher::new(algorithm);
    let mut received: u64 = 0;

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(transfer_err)?;
    easy.follow_location(true).map_err(transfer_err)?;
    easy.max_redirections(opts.max_redirections).map_err(transfer_err)?;
    easy.connect_timeout(Duration::from_secs(opts.connect_timeout_secs))
        .map_err(transfer_err)?;
    easy.timeout(Duration::from_secs(opts.timeout_secs))
        .map_err(transfer_err)?;

    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                hasher.update(data);
                received += data.len() as u64;
                Ok(data.len())
            })
            .map_err(transfer_err)?;
        transfer.perform().map_err(transfer_err)?;
    }

    let code = easy.response_code().map_err(transfer_err)?;
    if !(200..300).contains(&code) {
        return Err(FsError::Http {
            url: url.to_string(),
            status: code,
        });
    }

    let digest = hasher.finalize_hex();
    tracing::debug!(url, %algorithm, bytes = received, %digest, "remote digest done");
    Ok(digest)
}
