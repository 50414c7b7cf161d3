//! Archive helpers: JAR (zip) extraction, `.tar.gz` unpacking and
//! single-file gzip compression.

mod gzip;
mod jar;
mod tar_gz;

pub use gzip::gzip_file;
pub use jar::{unzip_jar, unzip_jars, JarPath};
pub use tar_gz::decompress_tar_gz;
