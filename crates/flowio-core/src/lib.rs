pub mod config;
pub mod error;
pub mod logging;

pub mod archive;
pub mod checksum;
pub mod fs_ops;
pub mod path_ext;
pub mod walk;

pub use error::{FsError, Result};
