use std::fmt;
use std::path::PathBuf;

/// Where a digest reads its bytes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DigestSource {
    Path(PathBuf),
    Url(String),
}

impl DigestSource {
    /// Classify user input: absolute `http`, `https` or `ftp` URLs are remote,
    /// anything else is a local path.
    pub fn parse(input: &str) -> Self {
        match url::Url::parse(input) {
            Ok(u) if matches!(u.scheme(), "http" | "https" | "ftp") => {
                DigestSource::Url(input.to_string())
            }
            _ => DigestSource::Path(PathBuf::from(input)),
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, DigestSource::Url(_))
    }
}

impl fmt::Display for DigestSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DigestSource::Path(p) => write!(f, "{}", p.display()),
            DigestSource::Url(u) => f.write_str(u),
        }
    }
}
