use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::checksum::{DigestAlgorithm, DEFAULT_BUF_SIZE};
use crate::walk::{WalkOptions, WalkOrder};

/// Checksum parameters (optional `[checksum]` section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChecksumConfig {
    /// Read buffer size in bytes for local digests. Does not affect the result.
    pub buffer_bytes: usize,
    /// Algorithm used when the CLI is not given `--algorithm`.
    pub default_algorithm: DigestAlgorithm,
}

impl Default for ChecksumConfig {
    fn default() -> Self {
        Self {
            buffer_bytes: DEFAULT_BUF_SIZE,
            default_algorithm: DigestAlgorithm::Md5,
        }
    }
}

/// Remote transfer parameters for URL digests (optional `[http]` section).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpOptions {
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-transfer timeout in seconds.
    pub timeout_secs: u64,
    /// Maximum number of redirects followed.
    pub max_redirections: u32,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 300,
            max_redirections: 10,
        }
    }
}

/// Directory walk parameters (optional `[walk]` section).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkConfig {
    /// Descend into symbolic links to directories.
    pub follow_symlinks: bool,
    /// Deepest level listed below the root (unset = unlimited).
    pub max_depth: Option<usize>,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            max_depth: None,
        }
    }
}

impl WalkConfig {
    /// Walk options for the given traversal order.
    pub fn options(&self, order: WalkOrder) -> WalkOptions {
        WalkOptions {
            order,
            follow_symlinks: self.follow_symlinks,
            max_depth: self.max_depth,
        }
    }
}

/// Global configuration loaded from `~/.config/flowio/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlowioConfig {
    #[serde(default)]
    pub checksum: ChecksumConfig,
    #[serde(default)]
    pub http: HttpOptions,
    #[serde(default)]
    pub walk: WalkConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("flowio")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FlowioConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FlowioConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: FlowioConfig = toml::from_str(&data)?;
    Ok(cfg)
}
