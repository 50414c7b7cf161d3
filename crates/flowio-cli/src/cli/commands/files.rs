//! Small file commands: `size`, `ext`, `mkdirs`.

use crate::cli::SizeUnit;
use anyhow::Result;
use flowio_core::{fs_ops, path_ext};
use std::path::Path;

pub fn run_size(file: &Path, unit: SizeUnit) {
    let (n, suffix) = match unit {
        SizeUnit::B => (fs_ops::file_size_bytes(file), "B"),
        SizeUnit::Kib => (fs_ops::file_size_kib(file), "KiB"),
        SizeUnit::Mib => (fs_ops::file_size_mib(file), "MiB"),
    };
    println!("{} {}  {}", n, suffix, file.display());
}

pub fn run_ext(path: &str, strip: bool) {
    if strip {
        println!("{}", path_ext::remove_extension(path));
    } else {
        println!("{}", path_ext::file_extension(Path::new(path)));
    }
}

pub fn run_mkdirs(location: &Path, names: &[String]) -> Result<()> {
    fs_ops::create_directories(location, names)?;
    Ok(())
}
