//! CLI command handlers. Each command family is in its own file.

mod archive;
mod checksum;
mod delete;
mod files;
mod list;

pub use archive::{run_gzip, run_untar, run_unzip_jar};
pub use checksum::run_checksum;
pub use delete::run_delete;
pub use files::{run_ext, run_mkdirs, run_size};
pub use list::run_list;
