//! File-name extension helpers.
//!
//! Unlike `Path::extension`, a leading dot counts as the separator, so
//! `.bashrc` has extension `bashrc`.

use std::path::Path;

/// Text after the last `.` of the final path component, or `""` if there is none.
pub fn file_extension(path: &Path) -> String {
    let name = match path.file_name() {
        Some(n) => n.to_string_lossy(),
        None => return String::new(),
    };
    match name.rfind('.') {
        Some(i) => name[i + 1..].to_string(),
        None => String::new(),
    }
}

/// `name` without its extension (and the dot before it).
///
/// Only the final path component is considered, so dots in directory names
/// are left alone. A name with no extension is returned unchanged.
pub fn remove_extension(name: &str) -> String {
    if file_extension(Path::new(name)).is_empty() {
        return name.to_string();
    }
    match name.rfind('.') {
        Some(i) => name[..i].to_string(),
        None => name.to_string(),
    }
}
